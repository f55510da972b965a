use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use mentoria_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};

use super::{error, internal_server_error};
use crate::models::{contact::ApiContactSubmission, ApiSendResponse};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/send-email", routing::post(send_email))
        .with_state(service)
}

async fn send_email(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    // A malformed body must still produce the structured error shape.
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error(StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text()),
    };

    match service.send_message(submission.into()).await {
        Ok(id) => Json(ApiSendResponse { ok: true, id }).into_response(),
        Err(err @ ContactSendMessageError::InvalidSubmission) => {
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(ContactSendMessageError::Delivery(err)) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, err)
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
