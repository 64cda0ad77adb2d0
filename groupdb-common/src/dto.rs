//! Wire-level request and response shapes
//!
//! Requests keep every non-required field optional so that absent JSON fields
//! deserialize to `None`/empty; the mapper decides how absence is applied
//! (empty collections on create, leave-unchanged on update).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::GroupStatus;

/// Payload for `POST /groups`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub agency: String,
    pub debut_year: i32,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub members: Option<Vec<String>>,
    #[serde(default)]
    pub former_members: Option<Vec<String>>,
    #[serde(default)]
    pub disband_year: Option<i32>,
    #[serde(default)]
    pub subunits: Option<Vec<String>>,
    #[serde(default)]
    pub social_links: Option<Vec<String>>,
}

/// Payload for `PUT /groups/:id`.
///
/// Every field is optional: `None` strictly means "leave unchanged". A field
/// cannot be cleared by sending `null`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub members: Option<Vec<String>>,
    #[serde(default)]
    pub former_members: Option<Vec<String>>,
    #[serde(default)]
    pub debut_year: Option<i32>,
    #[serde(default)]
    pub disband_year: Option<i32>,
    #[serde(default)]
    pub subunits: Option<Vec<String>>,
    #[serde(default)]
    pub social_links: Option<Vec<String>>,
}

/// Response body for a single group.
///
/// `status` is the derived classification, computed at mapping time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub group_id: Uuid,
    pub group_name: String,
    pub agency: String,
    pub labels: Vec<String>,
    pub members: Vec<String>,
    pub former_members: Vec<String>,
    pub debut_year: i32,
    /// 0-sentinel: 0 means the group has not disbanded.
    pub disband_year: i32,
    pub subunits: Vec<String>,
    pub social_links: Vec<String>,
    pub status: GroupStatus,
}
