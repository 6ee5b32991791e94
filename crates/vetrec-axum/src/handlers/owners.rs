//! Owner handlers - the form-backed record controller.
//!
//! Mutating operations follow a two-outcome branch: an invalid
//! submission re-renders the form view with every violated field
//! flagged (still a 200), a valid one persists and redirects to the
//! record's detail location. The search operation routes on result
//! cardinality instead.

use axum::extract::{Path, Query, State};
use axum::Form;
use serde_json::json;

use vetrec_core::{FieldError, OwnerForm, SearchCriteria, fields};

use crate::error::HttpError;
use crate::state::AppState;
use crate::view::ViewResult;

/// Create/update form view.
pub const FORM_VIEW: &str = "owners/form";
/// Search form view.
pub const FIND_VIEW: &str = "owners/find";
/// Multi-result list view.
pub const LIST_VIEW: &str = "owners/list";
/// Read-only detail view.
pub const DETAILS_VIEW: &str = "owners/details";

/// Message attached to the last-name field when a search matches nothing.
pub const MSG_NOT_FOUND: &str = "not found";

fn owner_location(id: i64) -> String {
    format!("/owners/{id}")
}

/// Render a blank creation form.
pub async fn new_form() -> ViewResult {
    ViewResult::render(FORM_VIEW, json!({ "owner": OwnerForm::default() }))
}

/// Accept a creation submission: validate, persist, redirect.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<OwnerForm>,
) -> Result<ViewResult, HttpError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(ViewResult::render_with_errors(
            FORM_VIEW,
            json!({ "owner": form }),
            errors,
        ));
    }

    let owner = state.owners.create(form.into_new_owner()).await?;
    Ok(ViewResult::redirect(owner_location(owner.id)))
}

/// Render a blank search form.
pub async fn find_form() -> ViewResult {
    ViewResult::render(FIND_VIEW, json!({ "criteria": SearchCriteria::default() }))
}

/// Run a name search and route on result cardinality.
pub async fn find(
    State(state): State<AppState>,
    Query(criteria): Query<SearchCriteria>,
) -> Result<ViewResult, HttpError> {
    let matches = state
        .owners
        .find_by_full_name(&criteria.last_name, &criteria.first_name)
        .await?;

    match matches.len() {
        0 => Ok(ViewResult::render_with_errors(
            FIND_VIEW,
            json!({ "criteria": criteria }),
            vec![FieldError::new(fields::LAST_NAME, MSG_NOT_FOUND)],
        )),
        1 => Ok(ViewResult::redirect(owner_location(matches[0].id))),
        _ => Ok(ViewResult::render(LIST_VIEW, json!({ "owners": matches }))),
    }
}

/// Render the edit form pre-populated from the stored record.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ViewResult, HttpError> {
    let owner = state.owners.find_by_id(id).await?;
    Ok(ViewResult::render(
        FORM_VIEW,
        json!({ "owner": OwnerForm::from_owner(&owner) }),
    ))
}

/// Accept an edit submission: validate, re-save under the path ID,
/// redirect to the record's detail location.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<OwnerForm>,
) -> Result<ViewResult, HttpError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(ViewResult::render_with_errors(
            FORM_VIEW,
            json!({ "owner": form }),
            errors,
        ));
    }

    let owner = form.into_owner(id);
    state.owners.update(&owner).await?;
    Ok(ViewResult::redirect(owner_location(id)))
}

/// Render the read-only detail view.
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ViewResult, HttpError> {
    let owner = state.owners.find_by_id(id).await?;
    Ok(ViewResult::render(DETAILS_VIEW, json!({ "owner": owner })))
}
