//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers return it
//! directly. Internal errors are redacted before they reach clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError | ErrorCode::ServiceUnavailable) {
            error!(code = ?self.code(), message = self.message(), "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::{fixture, rstest};

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[fixture]
    fn internal_error() -> Error {
        Error::internal("directory query failed: connection reset by 10.0.0.4").with_trace_id(TRACE_ID)
    }

    async fn response_payload(error: &Error) -> (StatusCode, Option<String>, Error) {
        let response = ResponseError::error_response(error);
        let status = response.status();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .map(|value| value.to_str().expect("trace id is ASCII").to_owned());
        let bytes = to_bytes(response.into_body()).await.expect("read body");
        let payload = serde_json::from_slice(&bytes).expect("error JSON");
        (status, header, payload)
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("owner 99 not found"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("store offline"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted(internal_error: Error) {
        let (status, header, payload) = response_payload(&internal_error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(header.as_deref(), Some(TRACE_ID));
        assert_eq!(payload.message(), "Internal server error");
        assert_eq!(payload.trace_id(), Some(TRACE_ID));
    }

    #[rstest]
    #[actix_web::test]
    async fn not_found_keeps_its_message_and_omits_missing_trace_header() {
        let error = Error::not_found("owner 99 not found");
        let (status, header, payload) = response_payload(&error).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(header.is_none());
        assert_eq!(payload, error);
    }
}
