//! Group repository
//!
//! Persisted shape: one row in `groups` plus ordered rows in the five child
//! collection tables. Saves rewrite the child rows inside a transaction, so a
//! stored group is always a consistent snapshot of the entity.

use crate::model::{Group, NewGroup};
use crate::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

const COLLECTION_TABLES: [&str; 5] = [
    "group_labels",
    "group_members",
    "group_former_members",
    "group_subunits",
    "group_social_links",
];

/// Insert or replace a group and all of its collections
pub async fn save(pool: &SqlitePool, group: &Group) -> Result<()> {
    let mut tx = pool.begin().await?;
    let id = group.group_id().to_string();

    sqlx::query(
        r#"
        INSERT INTO groups (group_id, group_name, agency, debut_year, disband_year)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(group_id) DO UPDATE SET
            group_name = excluded.group_name,
            agency = excluded.agency,
            debut_year = excluded.debut_year,
            disband_year = excluded.disband_year
        "#,
    )
    .bind(&id)
    .bind(group.group_name())
    .bind(group.agency())
    .bind(group.debut_year())
    .bind(group.disband_year())
    .execute(&mut *tx)
    .await?;

    let collections: [(&str, &[String]); 5] = [
        ("group_labels", group.labels()),
        ("group_members", group.members()),
        ("group_former_members", group.former_members()),
        ("group_subunits", group.subunits()),
        ("group_social_links", group.social_links()),
    ];

    for (table, values) in collections {
        sqlx::query(&format!("DELETE FROM {table} WHERE group_id = ?1"))
            .bind(&id)
            .execute(&mut *tx)
            .await?;

        for (position, value) in values.iter().enumerate() {
            sqlx::query(&format!(
                "INSERT INTO {table} (group_id, position, value) VALUES (?1, ?2, ?3)"
            ))
            .bind(&id)
            .bind(position as i64)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Fetch a single group by id; None when no row exists
pub async fn get(pool: &SqlitePool, group_id: Uuid) -> Result<Option<Group>> {
    let row = sqlx::query_as::<_, (String, String, String, i64, i64)>(
        "SELECT group_id, group_name, agency, debut_year, disband_year
         FROM groups WHERE group_id = ?1",
    )
    .bind(group_id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Fetch all groups
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Group>> {
    fetch_where(pool, "1 = 1", None).await
}

/// Case-insensitive agency lookup
pub async fn by_agency(pool: &SqlitePool, agency: &str) -> Result<Vec<Group>> {
    fetch_where(pool, "agency = ?1 COLLATE NOCASE", Some(agency)).await
}

pub async fn by_debut_year(pool: &SqlitePool, year: i32) -> Result<Vec<Group>> {
    let rows = sqlx::query_as::<_, BaseRow>(
        "SELECT group_id, group_name, agency, debut_year, disband_year
         FROM groups WHERE debut_year = ?1",
    )
    .bind(year)
    .fetch_all(pool)
    .await?;
    hydrate_all(pool, rows).await
}

/// Groups with no disband year recorded (0-sentinel)
pub async fn active(pool: &SqlitePool) -> Result<Vec<Group>> {
    fetch_where(pool, "disband_year = 0", None).await
}

/// Groups with a positive disband year
pub async fn disbanded(pool: &SqlitePool) -> Result<Vec<Group>> {
    fetch_where(pool, "disband_year > 0", None).await
}

/// Groups where the name appears among current or former members
pub async fn by_member(pool: &SqlitePool, member: &str) -> Result<Vec<Group>> {
    fetch_where(
        pool,
        "group_id IN (SELECT group_id FROM group_members WHERE value = ?1
                      UNION
                      SELECT group_id FROM group_former_members WHERE value = ?1)",
        Some(member),
    )
    .await
}

/// Groups carrying the given label
pub async fn by_label(pool: &SqlitePool, label: &str) -> Result<Vec<Group>> {
    fetch_where(
        pool,
        "group_id IN (SELECT group_id FROM group_labels WHERE value = ?1)",
        Some(label),
    )
    .await
}

/// Delete a group; child rows cascade. Returns false when the id was absent.
pub async fn delete(pool: &SqlitePool, group_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM groups WHERE group_id = ?1")
        .bind(group_id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

type BaseRow = (String, String, String, i64, i64);

async fn base_rows(pool: &SqlitePool, sql: &str, bind: Option<&str>) -> Result<Vec<BaseRow>> {
    let mut query = sqlx::query_as::<_, BaseRow>(sql);
    if let Some(value) = bind {
        query = query.bind(value.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

async fn fetch_where(pool: &SqlitePool, clause: &str, bind: Option<&str>) -> Result<Vec<Group>> {
    let sql = format!(
        "SELECT group_id, group_name, agency, debut_year, disband_year
         FROM groups WHERE {clause}"
    );
    let rows = base_rows(pool, &sql, bind).await?;
    hydrate_all(pool, rows).await
}

async fn hydrate_all(pool: &SqlitePool, rows: Vec<BaseRow>) -> Result<Vec<Group>> {
    let mut groups = Vec::with_capacity(rows.len());
    for row in rows {
        groups.push(hydrate(pool, row).await?);
    }
    Ok(groups)
}

/// Rebuild the entity from its base row plus the five collection tables
async fn hydrate(pool: &SqlitePool, row: BaseRow) -> Result<Group> {
    let (id, group_name, agency, debut_year, disband_year) = row;
    let group_id = Uuid::parse_str(&id)
        .map_err(|e| Error::Internal(format!("Corrupt group_id in database: {e}")))?;

    let mut collections: [Vec<String>; 5] = Default::default();
    for (slot, table) in collections.iter_mut().zip(COLLECTION_TABLES) {
        *slot = load_collection(pool, table, &id).await?;
    }
    let [labels, members, former_members, subunits, social_links] = collections;

    Ok(Group::from_parts(
        group_id,
        NewGroup {
            group_name,
            agency,
            debut_year: debut_year as i32,
            disband_year: disband_year as i32,
            labels,
            members,
            former_members,
            subunits,
            social_links,
        },
    ))
}

async fn load_collection(pool: &SqlitePool, table: &str, group_id: &str) -> Result<Vec<String>> {
    let rows = sqlx::query_as::<_, (String,)>(&format!(
        "SELECT value FROM {table} WHERE group_id = ?1 ORDER BY position"
    ))
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(value,)| value).collect())
}
