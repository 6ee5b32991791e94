//! Service layer - orchestrates operations over the ports.

pub mod owner_service;

pub use owner_service::OwnerService;
