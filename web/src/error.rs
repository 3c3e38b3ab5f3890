/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::types::BaseResponse;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
    Database(DbErr),
    Validation { field: String, message: String },
    JsonParsing(JsonRejection),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::Validation { field, message } => {
                write!(f, "Validation error: {}: {}", field, message)
            }
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            WebError::Validation { field, message } => {
                // Validation failures carry a field -> message mapping
                let body = Json(BaseResponse {
                    error: true,
                    message: HashMap::from([(field, message)]),
                });

                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
            }
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper functions for common error scenarios
impl WebError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        WebError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn invalid_credentials() -> Self {
        WebError::Unauthorized("Invalid credentials".to_string())
    }

    pub fn registration_disabled() -> Self {
        WebError::BadRequest("Registration is disabled".to_string())
    }
}
