//! Controller outcome type: render a named view or redirect.
//!
//! Rendering mechanics are out of scope for this layer; a rendered
//! outcome is a 200 response whose JSON envelope names the view, the
//! model, and any field errors. A redirect is a 303 See Other to a
//! record's canonical location.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use vetrec_core::FieldError;

/// JSON envelope for rendered views.
#[derive(Serialize)]
struct ViewBody {
    view: &'static str,
    model: Value,
    errors: Vec<FieldError>,
}

/// Outcome of a controller operation.
pub enum ViewResult {
    /// Render the named view with the given model and field errors.
    Render {
        view: &'static str,
        model: Value,
        errors: Vec<FieldError>,
    },
    /// Redirect to the given location.
    Redirect(String),
}

impl ViewResult {
    /// Render a view with no field errors.
    pub fn render(view: &'static str, model: Value) -> Self {
        Self::Render {
            view,
            model,
            errors: Vec::new(),
        }
    }

    /// Re-render a view with the submitted model and its field errors.
    pub fn render_with_errors(view: &'static str, model: Value, errors: Vec<FieldError>) -> Self {
        Self::Render {
            view,
            model,
            errors,
        }
    }

    /// Redirect to a location.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect(location.into())
    }
}

impl IntoResponse for ViewResult {
    fn into_response(self) -> Response {
        match self {
            Self::Render {
                view,
                model,
                errors,
            } => (
                StatusCode::OK,
                Json(ViewBody {
                    view,
                    model,
                    errors,
                }),
            )
                .into_response(),
            Self::Redirect(location) => axum::response::Redirect::to(&location).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_is_ok_status() {
        let response = ViewResult::render("owners/form", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_redirect_is_see_other_with_location() {
        let response = ViewResult::redirect("/owners/1").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/owners/1"
        );
    }
}
