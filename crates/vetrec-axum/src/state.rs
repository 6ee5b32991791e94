//! Shared application state type.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AppContext` containing the services needed
/// by the owner handlers. Handlers hold no state of their own; every
/// request is an independent request/response cycle.
pub type AppState = Arc<AppContext>;
