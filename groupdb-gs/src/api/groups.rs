//! Group CRUD and query endpoints
//!
//! Handlers are thin: extract, delegate to the service layer, map the common
//! error taxonomy onto HTTP statuses via `ApiError`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use groupdb_common::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};
use uuid::Uuid;

use crate::api::{ApiError, ApiResult};
use crate::{service, AppState};

/// Build group routes
pub fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(get_all_groups).post(create_group))
        .route("/groups/:id", put(update_group).get(get_group_by_id).delete(delete_group))
        .route("/groups/agency/:agency", get(get_groups_by_agency))
        .route("/groups/debut-year/:year", get(get_groups_by_debut_year))
        .route("/groups/active", get(get_active_groups))
        .route("/groups/disbanded", get(get_disbanded_groups))
        .route("/groups/member/:name", get(get_groups_by_member))
        .route("/groups/label/:label", get(get_groups_by_label))
}

/// GET /groups
pub async fn get_all_groups(State(state): State<AppState>) -> ApiResult<Json<Vec<GroupResponse>>> {
    Ok(Json(service::find_all(&state.db).await?))
}

/// POST /groups - returns 201 Created
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupRequest>,
) -> ApiResult<(StatusCode, Json<GroupResponse>)> {
    let created = service::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /groups/:id
pub async fn get_group_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GroupResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(service::find_by_id(&state.db, id).await?))
}

/// PUT /groups/:id
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGroupRequest>,
) -> ApiResult<Json<GroupResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(service::update(&state.db, id, payload).await?))
}

/// DELETE /groups/:id - returns 204 No Content
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /groups/agency/:agency (case-insensitive)
pub async fn get_groups_by_agency(
    State(state): State<AppState>,
    Path(agency): Path<String>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    Ok(Json(service::find_by_agency(&state.db, &agency).await?))
}

/// GET /groups/debut-year/:year
pub async fn get_groups_by_debut_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    let year: i32 = year
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid debut year: {year}")))?;
    Ok(Json(service::find_by_debut_year(&state.db, year).await?))
}

/// GET /groups/active
pub async fn get_active_groups(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    Ok(Json(service::find_active(&state.db).await?))
}

/// GET /groups/disbanded
pub async fn get_disbanded_groups(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    Ok(Json(service::find_disbanded(&state.db).await?))
}

/// GET /groups/member/:name (matches current and former members)
pub async fn get_groups_by_member(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    Ok(Json(service::find_by_member(&state.db, &name).await?))
}

/// GET /groups/label/:label
pub async fn get_groups_by_label(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    Ok(Json(service::find_by_label(&state.db, &label).await?))
}

fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid group id: {raw}")))
}
