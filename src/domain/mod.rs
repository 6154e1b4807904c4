//! Domain layer - Pure business abstractions
//!
//! Only trait definitions, their input types and domain error types live here.
//! Implementations are in the infrastructure layer.

pub mod errors;
pub mod repositories;

pub use errors::{DomainError, require};
pub use repositories::*;
