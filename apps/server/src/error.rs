use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quoteboard_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MarketData(MarketDataError::Upstream { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::MarketData(MarketDataError::Configuration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::warn!("Request failed ({}): {}", status.as_u16(), self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let upstream: ApiError = MarketDataError::upstream("POLYGON", "HTTP 500").into();
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);

        let config: ApiError = MarketDataError::Configuration("missing key".to_string()).into();
        assert_eq!(config.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = ApiError::Internal("boom".to_string());
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
