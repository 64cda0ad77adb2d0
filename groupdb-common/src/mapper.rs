//! Request ⇄ entity ⇄ response mapping
//!
//! Stateless translations. Create mapping coerces absent lists to empty
//! collections (the entity never holds "null"); update mapping is a
//! field-by-field merge where `None` strictly means "leave unchanged".

use crate::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};
use crate::model::{Group, NewGroup};

/// Build a new entity (fresh id) from a create request.
pub fn to_entity(request: CreateGroupRequest) -> Group {
    Group::create(NewGroup {
        group_name: request.group_name,
        agency: request.agency,
        debut_year: request.debut_year,
        labels: request.labels.unwrap_or_default(),
        members: request.members.unwrap_or_default(),
        former_members: request.former_members.unwrap_or_default(),
        disband_year: request.disband_year.unwrap_or(0),
        subunits: request.subunits.unwrap_or_default(),
        social_links: request.social_links.unwrap_or_default(),
    })
}

/// Copy every entity field into a response shape, deriving status.
pub fn to_response(group: &Group) -> GroupResponse {
    GroupResponse {
        group_id: group.group_id(),
        group_name: group.group_name().to_string(),
        agency: group.agency().to_string(),
        labels: group.labels().to_vec(),
        members: group.members().to_vec(),
        former_members: group.former_members().to_vec(),
        debut_year: group.debut_year(),
        disband_year: group.disband_year(),
        subunits: group.subunits().to_vec(),
        social_links: group.social_links().to_vec(),
        status: group.status(),
    }
}

/// Apply partial-update semantics: each `Some` field overwrites the entity,
/// each `None` field leaves the current value untouched.
pub fn apply_update(group: &mut Group, request: UpdateGroupRequest) {
    if let Some(group_name) = request.group_name {
        group.set_group_name(group_name);
    }
    if let Some(agency) = request.agency {
        group.set_agency(agency);
    }
    if let Some(labels) = request.labels {
        group.set_labels(labels);
    }
    if let Some(members) = request.members {
        group.set_members(members);
    }
    if let Some(former_members) = request.former_members {
        group.set_former_members(former_members);
    }
    if let Some(debut_year) = request.debut_year {
        group.set_debut_year(debut_year);
    }
    if let Some(disband_year) = request.disband_year {
        group.set_disband_year(disband_year);
    }
    if let Some(subunits) = request.subunits {
        group.set_subunits(subunits);
    }
    if let Some(social_links) = request.social_links {
        group.set_social_links(social_links);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupStatus;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn to_entity_defaults_absent_lists_to_empty() {
        let request = CreateGroupRequest {
            group_name: "NewGroup".to_string(),
            agency: "NewAgency".to_string(),
            debut_year: 2020,
            members: None,
            ..CreateGroupRequest::default()
        };

        let group = to_entity(request);
        assert!(group.members().is_empty());
        assert!(group.labels().is_empty());
        assert_eq!(group.disband_year(), 0);
        assert_eq!(group.status(), GroupStatus::Inactive);
    }

    #[test]
    fn to_entity_carries_provided_fields() {
        let request = CreateGroupRequest {
            group_name: "BTS".to_string(),
            agency: "HYBE".to_string(),
            debut_year: 2013,
            labels: Some(names(&["Big Hit Music"])),
            members: Some(names(&["RM", "Jin"])),
            disband_year: Some(0),
            ..CreateGroupRequest::default()
        };

        let group = to_entity(request);
        assert_eq!(group.group_name(), "BTS");
        assert_eq!(group.agency(), "HYBE");
        assert_eq!(group.members(), &names(&["RM", "Jin"])[..]);
        assert_eq!(group.status(), GroupStatus::Active);
    }

    #[test]
    fn to_response_copies_fields_verbatim_and_derives_status() {
        let mut group = Group::new("2NE1", "YG", 2009);
        group.set_members(names(&["CL", "Dara"]));
        group.set_disband_year(2016);
        group.add_label("YG Entertainment");

        let response = to_response(&group);
        assert_eq!(response.group_id, group.group_id());
        assert_eq!(response.group_name, "2NE1");
        assert_eq!(response.agency, "YG");
        assert_eq!(response.debut_year, 2009);
        assert_eq!(response.disband_year, 2016);
        assert_eq!(response.labels, names(&["YG Entertainment"]));
        assert_eq!(response.status, GroupStatus::Disbanded);
    }

    #[test]
    fn apply_update_with_all_fields_absent_changes_nothing() {
        let mut group = Group::new("BTS", "HYBE", 2013);
        group.set_members(names(&["RM"]));
        group.add_label("Big Hit Music");
        let before = group.clone();

        apply_update(&mut group, UpdateGroupRequest::default());
        assert_eq!(group, before);
    }

    #[test]
    fn apply_update_overwrites_exactly_the_present_fields() {
        let mut group = Group::new("BTS", "HYBE", 2013);
        group.set_members(names(&["RM"]));

        apply_update(
            &mut group,
            UpdateGroupRequest {
                group_name: Some("Updated".to_string()),
                agency: None,
                ..UpdateGroupRequest::default()
            },
        );

        assert_eq!(group.group_name(), "Updated");
        assert_eq!(group.agency(), "HYBE");
        assert_eq!(group.members(), &names(&["RM"])[..]);
        assert_eq!(group.debut_year(), 2013);
    }

    #[test]
    fn apply_update_never_touches_the_id() {
        let mut group = Group::new("BTS", "HYBE", 2013);
        let id = group.group_id();

        apply_update(
            &mut group,
            UpdateGroupRequest {
                group_name: Some("Renamed".to_string()),
                members: Some(names(&["RM", "Jin", "V"])),
                disband_year: Some(2023),
                ..UpdateGroupRequest::default()
            },
        );

        assert_eq!(group.group_id(), id);
        assert_eq!(group.status(), GroupStatus::Disbanded);
    }
}
