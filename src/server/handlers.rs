use super::types::ParseRequest;
use crate::{Error, parser::TransactionParser};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<TransactionParser>,
}

/// `POST` handler: body `{"text": "..."}` in, the model's JSON record out.
pub async fn parse_transaction(State(state): State<AppState>, body: Bytes) -> Response {
    let invocation_id = Uuid::new_v4();

    let request: ParseRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            let err = Error::bad_request(e.to_string());
            warn!(%invocation_id, "Rejected request body: {}", err);
            return err.into_response();
        }
    };

    info!(
        %invocation_id,
        text_len = request.text.chars().count(),
        "Received parse request"
    );

    match state.parser.parse(&request.text).await {
        Ok(json) => {
            info!(%invocation_id, "Successfully parsed transaction");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                json,
            )
                .into_response()
        }
        Err(e) => {
            match &e {
                Error::ContractViolation(_) => warn!(%invocation_id, "Parse failed: {}", e),
                _ => error!(%invocation_id, "Function execution error: {}", e),
            }
            e.into_response()
        }
    }
}

/// Every method other than `POST` on the parser route.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::ContractViolation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Error::BadRequest(_) | Error::Upstream { .. } | Error::ContractViolation(_) => {
                self.to_string()
            }
            other => format!("Internal Server Error: {}", other),
        };
        (status, body).into_response()
    }
}
