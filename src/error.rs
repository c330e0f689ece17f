use std::error::Error;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Error encountered parsing comment body as JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl RestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let status = self.status();
        let payload = Json(json!({"message": self.to_string()}));

        (status, payload).into_response()
    }
}
