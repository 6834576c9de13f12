use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::json;

use super::domain::{event_dates, EventLocation, RoleCategory, VolunteerRole};
use super::form::RegistrationForm;
use super::service::{RegistrationService, SubmissionError};
use super::store::{ConfirmationNavigator, RecordStore};

/// Router builder exposing the registration intake endpoints.
pub fn registration_router<S, N>(service: Arc<RegistrationService<S, N>>) -> Router
where
    S: RecordStore + 'static,
    N: ConfirmationNavigator + 'static,
{
    Router::new()
        .route("/api/v1/volunteers", post(submit_handler::<S, N>))
        .route("/api/v1/volunteers/catalogue", get(catalogue_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<S, N>(
    State(service): State<Arc<RegistrationService<S, N>>>,
    axum::Json(form): axum::Json<RegistrationForm>,
) -> Response
where
    S: RecordStore + 'static,
    N: ConfirmationNavigator + 'static,
{
    let now = Utc::now();
    let form = form.with_recomputed_age(now.date_naive());

    match service.submit(&form, now) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error @ SubmissionError::Ineligible { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Incomplete(fields)) => {
            let missing: Vec<&'static str> = fields.iter().map(|field| field.label()).collect();
            let payload = json!({
                "error": "registration is missing required fields",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::AlreadyInFlight) => {
            let payload = json!({
                "error": "a submission is already in flight",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Store(_)) => {
            // Generic notice; the entered data stays with the client so a
            // manual retry loses nothing.
            let payload = json!({
                "error": "failed to save registration, please try again",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Role, location, and event-date catalogues the presentation layer renders.
pub(crate) async fn catalogue_handler() -> axum::Json<CatalogueView> {
    let roles = [
        RoleCategory::FrontOfHouse,
        RoleCategory::GuestSupport,
        RoleCategory::Operations,
    ]
    .into_iter()
    .map(|category| RoleGroupView {
        category: category.label(),
        roles: VolunteerRole::catalogue()
            .into_iter()
            .filter(|role| role.category() == category)
            .map(VolunteerRole::label)
            .collect(),
    })
    .collect();

    let locations = EventLocation::catalogue()
        .into_iter()
        .map(EventLocation::label)
        .collect();

    axum::Json(CatalogueView {
        roles,
        locations,
        event_dates: event_dates(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogueView {
    pub(crate) roles: Vec<RoleGroupView>,
    pub(crate) locations: Vec<&'static str>,
    pub(crate) event_dates: [NaiveDate; 3],
}

#[derive(Debug, Serialize)]
pub(crate) struct RoleGroupView {
    pub(crate) category: &'static str,
    pub(crate) roles: Vec<&'static str>,
}
