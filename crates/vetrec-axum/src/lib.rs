//! Axum web adapter for vetrec.
//!
//! Exposes the owner record controller as an HTTP surface: form views,
//! creation and update with field-level validation errors, name search
//! with cardinality-based routing, and read-only detail views. View
//! rendering itself is out of scope; controller outcomes name their
//! rendering target in a JSON envelope.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod view;

// Re-export primary types
pub use bootstrap::{AppContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
pub use view::ViewResult;
