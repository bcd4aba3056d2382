use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use serde_json::json;

use super::{Acknowledgement, ContactForm, DonationForm, OutreachError, VolunteerForm};

pub fn outreach_router() -> Router {
    Router::new()
        .route("/donate", post(donate_handler))
        .route("/volunteer", post(volunteer_handler))
        .route("/contact", post(contact_handler))
}

async fn donate_handler(Form(form): Form<DonationForm>) -> Response {
    respond(super::donate(form))
}

async fn volunteer_handler(Form(form): Form<VolunteerForm>) -> Response {
    respond(super::volunteer(form))
}

async fn contact_handler(Form(form): Form<ContactForm>) -> Response {
    respond(super::contact(form))
}

fn respond(result: Result<Acknowledgement, OutreachError>) -> Response {
    match result {
        Ok(ack) => (StatusCode::OK, axum::Json(ack)).into_response(),
        Err(error) => {
            let missing = match &error {
                OutreachError::MissingFields(fields) => fields.clone(),
                OutreachError::MissingName => vec!["name"],
            };
            let payload = json!({
                "error": error.to_string(),
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
