// ABOUTME: Unified error handling for the Momentum coaching core
// ABOUTME: Defines standard error codes and the AppError type used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

//! # Unified Error Handling
//!
//! Centralized error types for the Momentum coaching core. Every fallible
//! operation returns [`AppError`] carrying a stable [`ErrorCode`], so callers
//! can tell transport failures apart from empty, malformed, or
//! schema-violating model payloads without matching on message strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,
    #[serde(rename = "EMPTY_RESPONSE")]
    EmptyResponse = 5004,
    #[serde(rename = "MALFORMED_RESPONSE")]
    MalformedResponse = 5005,
    #[serde(rename = "SCHEMA_VIOLATION")]
    SchemaViolation = 5006,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::EmptyResponse => "The model returned no payload",
            Self::MalformedResponse => "The model payload is not well-formed structured data",
            Self::SchemaViolation => "The model payload does not conform to the declared schema",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service rate limited
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalRateLimited, message)
    }

    /// Remote call returned no payload
    #[must_use]
    pub fn empty_response() -> Self {
        Self::new(ErrorCode::EmptyResponse, "No data returned")
    }

    /// Remote payload is not well-formed structured data
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedResponse, message)
    }

    /// Remote payload does not conform to the declared schema
    pub fn schema_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SchemaViolation, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from anyhow::Error to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_creation() {
        let error = AppError::external_service("gemini", "connection refused");
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert!(error.message.contains("gemini"));
        assert!(error.source.is_none());
    }

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::empty_response();
        let rendered = error.to_string();
        assert!(rendered.contains("The model returned no payload"));
        assert!(rendered.contains("No data returned"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::SchemaViolation).unwrap();
        assert_eq!(json, "\"SCHEMA_VIOLATION\"");

        let code: ErrorCode = serde_json::from_str("\"EMPTY_RESPONSE\"").unwrap();
        assert_eq!(code, ErrorCode::EmptyResponse);
    }

    #[test]
    fn test_error_source_chaining() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let error = AppError::internal("wrapper").with_source(io_error);
        assert!(std::error::Error::source(&error).is_some());
    }
}
