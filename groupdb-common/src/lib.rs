//! Shared library for the groupdb microservice
//!
//! Contains the domain model (Group entity and derived activity status),
//! request/response DTOs and mapping, the SQLite persistence layer, common
//! error types, and configuration resolution.

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod model;

pub use error::{Error, Result};
pub use model::{Group, GroupStatus, NewGroup};
