//! Service layer
//!
//! Sole owner of create/update business rules: request validation before
//! anything reaches persistence, id assignment at create (via the mapper),
//! and translation of "not found in store" into a user-visible NotFound.

use groupdb_common::db::groups as repo;
use groupdb_common::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};
use groupdb_common::model::debut_year_in_range;
use groupdb_common::{mapper, Error, Result};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<GroupResponse>> {
    Ok(repo::get_all(pool).await?.iter().map(mapper::to_response).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<GroupResponse> {
    repo::get(pool, id)
        .await?
        .map(|group| mapper::to_response(&group))
        .ok_or_else(|| not_found(id))
}

pub async fn create(pool: &SqlitePool, request: CreateGroupRequest) -> Result<GroupResponse> {
    validate_create(&request)?;

    let group = mapper::to_entity(request);
    repo::save(pool, &group).await?;
    info!("Created group {} ({})", group.group_name(), group.group_id());

    Ok(mapper::to_response(&group))
}

pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    request: UpdateGroupRequest,
) -> Result<GroupResponse> {
    validate_update(&request)?;

    let mut group = repo::get(pool, id).await?.ok_or_else(|| not_found(id))?;
    mapper::apply_update(&mut group, request);
    repo::save(pool, &group).await?;
    info!("Updated group {} ({})", group.group_name(), group.group_id());

    Ok(mapper::to_response(&group))
}

pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<()> {
    if !repo::delete(pool, id).await? {
        return Err(not_found(id));
    }
    info!("Deleted group {id}");
    Ok(())
}

pub async fn find_by_agency(pool: &SqlitePool, agency: &str) -> Result<Vec<GroupResponse>> {
    Ok(repo::by_agency(pool, agency).await?.iter().map(mapper::to_response).collect())
}

pub async fn find_by_debut_year(pool: &SqlitePool, year: i32) -> Result<Vec<GroupResponse>> {
    Ok(repo::by_debut_year(pool, year).await?.iter().map(mapper::to_response).collect())
}

pub async fn find_active(pool: &SqlitePool) -> Result<Vec<GroupResponse>> {
    Ok(repo::active(pool).await?.iter().map(mapper::to_response).collect())
}

pub async fn find_disbanded(pool: &SqlitePool) -> Result<Vec<GroupResponse>> {
    Ok(repo::disbanded(pool).await?.iter().map(mapper::to_response).collect())
}

pub async fn find_by_member(pool: &SqlitePool, member: &str) -> Result<Vec<GroupResponse>> {
    Ok(repo::by_member(pool, member).await?.iter().map(mapper::to_response).collect())
}

pub async fn find_by_label(pool: &SqlitePool, label: &str) -> Result<Vec<GroupResponse>> {
    Ok(repo::by_label(pool, label).await?.iter().map(mapper::to_response).collect())
}

fn not_found(id: Uuid) -> Error {
    Error::NotFound(format!("Group not found with id: {id}"))
}

fn validate_create(request: &CreateGroupRequest) -> Result<()> {
    if request.group_name.trim().is_empty() {
        return Err(Error::InvalidInput("Group name is required".to_string()));
    }
    if request.agency.trim().is_empty() {
        return Err(Error::InvalidInput("Agency is required".to_string()));
    }
    if !debut_year_in_range(request.debut_year) {
        return Err(Error::InvalidInput(format!(
            "Debut year must be after 1900 and not in the future: {}",
            request.debut_year
        )));
    }
    Ok(())
}

fn validate_update(request: &UpdateGroupRequest) -> Result<()> {
    if let Some(name) = &request.group_name {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("Group name cannot be blank".to_string()));
        }
    }
    if let Some(agency) = &request.agency {
        if agency.trim().is_empty() {
            return Err(Error::InvalidInput("Agency cannot be blank".to_string()));
        }
    }
    if let Some(year) = request.debut_year {
        if !debut_year_in_range(year) {
            return Err(Error::InvalidInput(format!(
                "Debut year must be after 1900 and not in the future: {year}"
            )));
        }
    }
    Ok(())
}
