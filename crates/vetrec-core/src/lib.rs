//! Core domain types and port definitions for vetrec.
//!
//! This crate holds the owner record domain model, form binding and
//! validation, the repository port, and the service facade. It knows
//! nothing about storage engines or transports; those live in the
//! adapter crates (`vetrec-db`, `vetrec-axum`).
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{NewOwner, Owner, SearchCriteria};
pub use ports::{OwnerRepository, RepositoryError};
pub use services::OwnerService;
pub use validation::{FieldError, OwnerForm, fields};
