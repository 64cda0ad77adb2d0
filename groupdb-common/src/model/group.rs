//! Group entity and derived activity status
//!
//! The entity owns its collections; getters hand out borrowed views and
//! setters take owned vectors, so callers can never alias or mutate the
//! entity's state from outside. Status is never stored: it is recomputed on
//! every read from `disband_year` and `members`, so it cannot drift.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived three-state activity classification of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupStatus {
    Active,
    Inactive,
    Disbanded,
}

impl GroupStatus {
    /// Pure status rule: disband year takes precedence, then membership.
    ///
    /// A non-positive disband year means "not disbanded" — the `> 0` guard is
    /// deliberate, so negative years fall through to the members check.
    pub fn derive(disband_year: i32, members: &[String]) -> Self {
        if disband_year > 0 {
            GroupStatus::Disbanded
        } else if members.is_empty() {
            GroupStatus::Inactive
        } else {
            GroupStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::Active => "ACTIVE",
            GroupStatus::Inactive => "INACTIVE",
            GroupStatus::Disbanded => "DISBANDED",
        }
    }
}

impl core::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction parameters for [`Group::create`].
///
/// Required fields are `group_name`, `agency`, and `debut_year`; every
/// collection defaults to empty and `disband_year` defaults to 0
/// ("not disbanded").
#[derive(Debug, Clone, Default)]
pub struct NewGroup {
    pub group_name: String,
    pub agency: String,
    pub debut_year: i32,
    pub labels: Vec<String>,
    pub members: Vec<String>,
    pub former_members: Vec<String>,
    pub disband_year: i32,
    pub subunits: Vec<String>,
    pub social_links: Vec<String>,
}

/// The aggregate entity representing a music group/act.
///
/// `group_id` is assigned exactly once, at construction, and no operation
/// reassigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    group_id: Uuid,
    group_name: String,
    agency: String,
    labels: Vec<String>,
    members: Vec<String>,
    former_members: Vec<String>,
    debut_year: i32,
    /// 0 means "not disbanded"; any positive value marks the group disbanded.
    disband_year: i32,
    subunits: Vec<String>,
    social_links: Vec<String>,
}

impl Group {
    /// Create a group with a fresh id and empty collections.
    pub fn new(group_name: impl Into<String>, agency: impl Into<String>, debut_year: i32) -> Self {
        Self::create(NewGroup {
            group_name: group_name.into(),
            agency: agency.into(),
            debut_year,
            ..NewGroup::default()
        })
    }

    /// Create a group from full construction parameters, assigning a fresh id.
    pub fn create(parts: NewGroup) -> Self {
        Self::from_parts(Uuid::new_v4(), parts)
    }

    /// Rehydrate a group under an existing id (e.g. loaded from storage).
    pub fn from_parts(group_id: Uuid, parts: NewGroup) -> Self {
        Self {
            group_id,
            group_name: parts.group_name,
            agency: parts.agency,
            labels: parts.labels,
            members: parts.members,
            former_members: parts.former_members,
            debut_year: parts.debut_year,
            disband_year: parts.disband_year,
            subunits: parts.subunits,
            social_links: parts.social_links,
        }
    }

    pub fn group_id(&self) -> Uuid {
        self.group_id
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn former_members(&self) -> &[String] {
        &self.former_members
    }

    pub fn debut_year(&self) -> i32 {
        self.debut_year
    }

    pub fn disband_year(&self) -> i32 {
        self.disband_year
    }

    pub fn subunits(&self) -> &[String] {
        &self.subunits
    }

    pub fn social_links(&self) -> &[String] {
        &self.social_links
    }

    /// Derived activity status, recomputed on every call.
    pub fn status(&self) -> GroupStatus {
        GroupStatus::derive(self.disband_year, &self.members)
    }

    pub fn set_group_name(&mut self, group_name: String) {
        self.group_name = group_name;
    }

    pub fn set_agency(&mut self, agency: String) {
        self.agency = agency;
    }

    pub fn set_debut_year(&mut self, debut_year: i32) {
        self.debut_year = debut_year;
    }

    pub fn set_disband_year(&mut self, disband_year: i32) {
        self.disband_year = disband_year;
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    pub fn set_members(&mut self, members: Vec<String>) {
        self.members = members;
    }

    pub fn set_former_members(&mut self, former_members: Vec<String>) {
        self.former_members = former_members;
    }

    pub fn set_subunits(&mut self, subunits: Vec<String>) {
        self.subunits = subunits;
    }

    pub fn set_social_links(&mut self, social_links: Vec<String>) {
        self.social_links = social_links;
    }

    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    pub fn add_member(&mut self, member: impl Into<String>) {
        self.members.push(member.into());
    }

    pub fn add_former_member(&mut self, member: impl Into<String>) {
        self.former_members.push(member.into());
    }

    pub fn add_subunit(&mut self, subunit: impl Into<String>) {
        self.subunits.push(subunit.into());
    }

    pub fn add_social_link(&mut self, link: impl Into<String>) {
        self.social_links.push(link.into());
    }
}

/// Advisory validation helpers.
///
/// These are checks a caller may invoke; the entity itself does not reject
/// out-of-range values. The API layer enforces them on inbound requests.
impl Group {
    pub fn is_group_name_valid(&self) -> bool {
        !self.group_name.trim().is_empty()
    }

    pub fn is_agency_valid(&self) -> bool {
        !self.agency.trim().is_empty()
    }

    pub fn is_debut_year_valid(&self) -> bool {
        debut_year_in_range(self.debut_year)
    }

    /// A disband year is valid when unset (0), or between debut year and the
    /// current year.
    pub fn is_disband_year_valid(&self) -> bool {
        self.disband_year == 0
            || (self.disband_year >= self.debut_year && self.disband_year <= current_year())
    }

    pub fn is_valid(&self) -> bool {
        self.is_group_name_valid()
            && self.is_agency_valid()
            && self.is_debut_year_valid()
            && self.is_disband_year_valid()
    }
}

/// Domain-valid debut year range: after 1900, not in the future.
pub fn debut_year_in_range(year: i32) -> bool {
    year > 1900 && year <= current_year()
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn disband_year_takes_precedence_over_members() {
        let members = names(&["RM", "Jin"]);
        assert_eq!(GroupStatus::derive(2023, &members), GroupStatus::Disbanded);
        assert_eq!(GroupStatus::derive(2023, &[]), GroupStatus::Disbanded);
    }

    #[test]
    fn empty_members_means_inactive() {
        assert_eq!(GroupStatus::derive(0, &[]), GroupStatus::Inactive);
    }

    #[test]
    fn members_without_disband_year_means_active() {
        let members = names(&["CL"]);
        assert_eq!(GroupStatus::derive(0, &members), GroupStatus::Active);
    }

    #[test]
    fn negative_disband_year_is_not_disbanded() {
        assert_eq!(GroupStatus::derive(-2024, &[]), GroupStatus::Inactive);
        assert_eq!(
            GroupStatus::derive(-2024, &names(&["CL"])),
            GroupStatus::Active
        );
    }

    #[test]
    fn lifecycle_recomputes_status_on_every_read() {
        let mut group = Group::new("BTS", "HYBE", 2013);
        assert_eq!(group.status(), GroupStatus::Inactive);

        group.set_members(names(&["RM", "Jin"]));
        assert_eq!(group.status(), GroupStatus::Active);

        group.set_disband_year(2023);
        assert_eq!(group.status(), GroupStatus::Disbanded);

        // Once disbanded, adding members does not revert the status.
        group.add_member("V");
        assert_eq!(group.status(), GroupStatus::Disbanded);
        assert_eq!(group.members().len(), 3);
    }

    #[test]
    fn negative_disband_year_defers_to_members() {
        let mut group = Group::new("2NE1", "YG", 2009);
        group.set_disband_year(-2024);
        assert_eq!(group.status(), GroupStatus::Inactive);

        group.add_member("CL");
        assert_eq!(group.status(), GroupStatus::Active);
    }

    #[test]
    fn create_assigns_id_once_and_defaults_collections() {
        let group = Group::new("NewJeans", "ADOR", 2022);
        assert!(!group.group_id().is_nil());
        assert!(group.labels().is_empty());
        assert!(group.members().is_empty());
        assert!(group.former_members().is_empty());
        assert!(group.subunits().is_empty());
        assert!(group.social_links().is_empty());
        assert_eq!(group.disband_year(), 0);
    }

    #[test]
    fn each_instance_owns_independent_collections() {
        let mut a = Group::new("A", "X", 2010);
        let b = Group::new("B", "X", 2010);
        a.add_member("solo");
        assert_eq!(a.members().len(), 1);
        assert!(b.members().is_empty());
    }

    #[test]
    fn setter_stores_snapshot_of_caller_data() {
        let mut group = Group::new("BTS", "HYBE", 2013);
        let mut roster = names(&["RM"]);
        group.set_members(roster.clone());

        // Caller keeps mutating its own copy; the entity is unaffected.
        roster.push("Jin".to_string());
        assert_eq!(group.members(), &names(&["RM"])[..]);
    }

    #[test]
    fn create_from_full_parts() {
        let group = Group::create(NewGroup {
            group_name: "BLACKPINK".to_string(),
            agency: "YG".to_string(),
            debut_year: 2016,
            labels: names(&["YG Entertainment", "Interscope"]),
            members: names(&["Jisoo", "Jennie", "Rosé", "Lisa"]),
            ..NewGroup::default()
        });
        assert_eq!(group.labels().len(), 2);
        assert_eq!(group.status(), GroupStatus::Active);
    }

    #[test]
    fn validators_flag_blank_and_out_of_range_fields() {
        let mut group = Group::new("  ", "", 1900);
        assert!(!group.is_group_name_valid());
        assert!(!group.is_agency_valid());
        assert!(!group.is_debut_year_valid());
        assert!(group.is_disband_year_valid()); // 0 = unset is fine
        assert!(!group.is_valid());

        group.set_group_name("EXO".to_string());
        group.set_agency("SM".to_string());
        group.set_debut_year(2012);
        assert!(group.is_valid());

        // Disbanding before the debut year is inconsistent.
        group.set_disband_year(2011);
        assert!(!group.is_disband_year_valid());
        group.set_disband_year(2020);
        assert!(group.is_disband_year_valid());
    }

    #[test]
    fn debut_year_bounds_are_exclusive_low_inclusive_high() {
        assert!(!debut_year_in_range(1900));
        assert!(debut_year_in_range(1901));
        assert!(debut_year_in_range(chrono::Utc::now().year()));
        assert!(!debut_year_in_range(chrono::Utc::now().year() + 1));
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&GroupStatus::Disbanded).unwrap(),
            "\"DISBANDED\""
        );
        assert_eq!(GroupStatus::Active.to_string(), "ACTIVE");
    }
}
