//! HTTP API surface

pub mod error;
pub mod groups;
pub mod health;

pub use error::{ApiError, ApiResult};
