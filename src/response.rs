//! Uniform response envelope
//!
//! Every endpoint answers `{"status", "message", "data"}`. Handlers return
//! [`ApiResponse`], errors are wrapped by `AppError`'s `IntoResponse`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// The JSON body shared by every response
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Successful response with a status code and an enveloped payload
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status_code: StatusCode,
    pub envelope: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with a custom message
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            envelope: Envelope::success(message, data),
        }
    }

    /// 201 Created with a custom message
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            envelope: Envelope::success(message, data),
        }
    }
}

impl ApiResponse<()> {
    /// 200 OK with `data: null`
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(message, ())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, self.envelope).into_response()
    }
}

/// Handler result type
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::success("OK", json!({"id": 1}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"status": "success", "message": "OK", "data": {"id": 1}}));
    }

    #[test]
    fn test_unit_data_serializes_as_null() {
        let response = ApiResponse::message("Deleted");
        let value = serde_json::to_value(&response.envelope).unwrap();
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(response.status_code, StatusCode::OK);
    }

    #[test]
    fn test_created_status() {
        let response = ApiResponse::created("Created", 5);
        assert_eq!(response.status_code, StatusCode::CREATED);
        assert_eq!(response.envelope.status, STATUS_SUCCESS);
    }
}
