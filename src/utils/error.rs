// utils/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Erreurs d'authentification
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Erreurs de données
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    // Erreurs de ressources
    #[error("{0} not found")]
    NotFound(String),

    // Erreurs de chiffrement / signature
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    // Erreurs système
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Code applicatif renvoyé au client à côté du message
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InvalidCredentials | AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::SerializeError(_)
            | AppError::EncryptionError(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 400 - Bad Request
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 401 - Unauthorized
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,

            // 404 - Not Found
            AppError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 - Internal Server Error
            AppError::SerializeError(_)
            | AppError::EncryptionError(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Les détails des erreurs 500 restent dans les logs
        let message = if status.is_server_error() {
            tracing::error!("Internal server error: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(json!({
            "error": message,
            "code": self.code()
        }))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializeError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Internal(format!("token signing failed: {}", err))
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let error_messages: Vec<String> = errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                format!("{}: {}", field, error_messages.join(", "))
            })
            .collect();

        // L'ordre des champs n'est pas garanti par validator
        messages.sort();

        AppError::Validation(messages.join("; "))
    }
}

// Type de résultat standard
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound("Vehicle".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let resp = AppError::Internal("secret detail".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Internal server error");
        assert_eq!(value["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let resp = AppError::NotFound("Vehicle".into()).error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Vehicle not found");
        assert_eq!(value["code"], "NOT_FOUND");
    }
}
