//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ApiResponse;
use crate::app::product::error::ProductError;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductError> for CoreError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(field) => CoreError::BadRequest(field.to_string()),
            ProductError::Format(_) => CoreError::BadRequest(err.to_string()),
            _ => {
                error!("Product store failure: {}", err);
                CoreError::InternalServerError("服务器内部错误".to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string())
                })
            })
            .collect();
        messages.sort();

        CoreError::BadRequest(messages.join(", "))
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            CoreError::BadRequest(msg)
            | CoreError::NotFound(msg)
            | CoreError::InternalServerError(msg) => msg,
        };

        (status, Json(ApiResponse::error(status.as_u16(), message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::error::InvalidField;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = CoreError::from(ProductError::Validation(InvalidField::PriceInvalid));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, CoreError::BadRequest(msg) if msg == "price invalid"));
    }

    #[test]
    fn test_store_constraint_maps_to_internal_error() {
        let err = CoreError::from(ProductError::StoreConstraint("name".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = CoreError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
