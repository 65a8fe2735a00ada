use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use landing_core_contact_contracts::{ContactRelayError, ContactService};
use landing_models::contact::CONTACT_PATH;
use tracing::{debug, error};

use crate::{
    errors::{
        self, internal_server_error, COULD_NOT_SEND_MESSAGE, MISSING_FIELDS,
        MISSING_MAIL_CONFIGURATION,
    },
    models::{contact::ApiContactSubmission, ApiOk},
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(CONTACT_PATH, routing::post(relay))
        .with_state(service)
}

async fn relay(service: State<Arc<impl ContactService>>, body: Bytes) -> Response {
    // The body is parsed as JSON regardless of its content type.
    let submission = match serde_json::from_slice::<ApiContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) => {
            debug!("rejected contact submission: {err}");
            return errors::error(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
    };

    match service.relay(submission.into()).await {
        Ok(()) => Json(ApiOk { ok: true }).into_response(),
        Err(ContactRelayError::MissingFields) => {
            errors::error(StatusCode::BAD_REQUEST, MISSING_FIELDS)
        }
        Err(ContactRelayError::Configuration(err)) => {
            error!("mail relay is not configured: {err}");
            errors::error(StatusCode::INTERNAL_SERVER_ERROR, MISSING_MAIL_CONFIGURATION)
        }
        Err(ContactRelayError::Send) => {
            errors::error(StatusCode::INTERNAL_SERVER_ERROR, COULD_NOT_SEND_MESSAGE)
        }
        Err(ContactRelayError::Other(err)) => internal_server_error(err),
    }
}
