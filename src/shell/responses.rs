// Response shapes shared by every inbound HTTP adapter.
//
// Failures always answer `{"error": "<message>"}`; simple acknowledgements
// answer `{"message": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStoreError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn json_message(message: impl Into<String>) -> Response {
    Json(MessageBody {
        message: message.into(),
    })
    .into_response()
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Maps a handler failure to a status and body. `subject` names the record
/// kind ("Event"), `failure` is the message used for storage faults.
pub fn application_error(error: ApplicationError, subject: &str, failure: &str) -> Response {
    match error {
        ApplicationError::NotFound => {
            json_error(StatusCode::NOT_FOUND, format!("{subject} not found"))
        }
        ApplicationError::Domain(message) => json_error(StatusCode::BAD_REQUEST, message),
        ApplicationError::Corrupt(message) => {
            tracing::error!(%message, "corrupt record");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        ApplicationError::Store(RecordStoreError::VersionMismatch { .. }) => json_error(
            StatusCode::CONFLICT,
            format!("{subject} was modified concurrently"),
        ),
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "{failure}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}
