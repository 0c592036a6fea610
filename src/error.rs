use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Isahc Error: {0}")]
    Isahc(#[from] isahc::Error),
    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),
    #[error("upstream response has no usable `ip` field: {0}")]
    MissingIpField(String),
    #[error("empty response body from upstream")]
    EmptyBody,
    #[error("failed to decode upstream response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("all ip lookup providers failed")]
    ChainExhausted,
    #[error("{0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorJson {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("{}", self);

        let status = self.status_code();
        let code = self.code().map(str::to_owned);
        (
            status,
            Json(ErrorJson {
                error: self.to_string(),
                code,
            }),
        )
            .into_response()
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Isahc(_)
            | Error::UpstreamStatus(_)
            | Error::MissingIpField(_)
            | Error::EmptyBody
            | Error::Json(_)
            | Error::ChainExhausted => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Error::Isahc(_) => Some("http_client_error"),
            Error::UpstreamStatus(_) => Some("bad_upstream_status"),
            Error::MissingIpField(_) => Some("missing_ip_field"),
            Error::EmptyBody => Some("empty_body"),
            Error::Json(_) => Some("invalid_upstream_body"),
            Error::ChainExhausted => Some("chain_exhausted"),
            Error::IOError(_) => Some("io_error"),
        }
    }
}
