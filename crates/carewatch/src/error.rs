use crate::config::ConfigError;
use crate::monitors::cognitive::FactorTableError;
use crate::monitors::feeds::FeedError;
use crate::monitors::warehouse::WarehouseError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Feed(FeedError),
    FactorTable(FactorTableError),
    Warehouse(WarehouseError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Feed(err) => write!(f, "feed error: {}", err),
            AppError::FactorTable(err) => write!(f, "factor table error: {}", err),
            AppError::Warehouse(err) => write!(f, "warehouse alerting error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Feed(err) => Some(err),
            AppError::FactorTable(err) => Some(err),
            AppError::Warehouse(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Feed(_)
            | AppError::FactorTable(_)
            | AppError::Warehouse(WarehouseError::Feed(_)) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Warehouse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<FeedError> for AppError {
    fn from(value: FeedError) -> Self {
        Self::Feed(value)
    }
}

impl From<FactorTableError> for AppError {
    fn from(value: FactorTableError) -> Self {
        Self::FactorTable(value)
    }
}

impl From<WarehouseError> for AppError {
    fn from(value: WarehouseError) -> Self {
        Self::Warehouse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_bad_request() {
        let response = AppError::from(FeedError::Empty).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(FactorTableError::Empty).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            AppError::from(WarehouseError::Feed(FeedError::UnexpectedShape("a number")))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_errors_map_to_internal_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let error = AppError::from(io);
        assert_eq!(error.to_string(), "io error: port taken");
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
