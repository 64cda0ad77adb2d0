//! Domain model for the group catalog

mod group;

pub use group::{debut_year_in_range, Group, GroupStatus, NewGroup};
