// ABOUTME: Unified error handling with standard error codes for the analytics engine
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias shared by every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! # Unified Error Handling System
//!
//! Errors here are reserved for genuine failures: malformed input batches,
//! invalid configuration, broken internal invariants. "Not enough data" is
//! never an error; every analysis has a well-defined empty result instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes shared by every crate in the workspace
///
/// Discriminants group codes by family: 3xxx for caller input, 6xxx for
/// configuration and 9xxx for failures inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed validation
    InvalidInput = 3000,
    /// A required field was empty or absent
    MissingRequiredField = 3001,
    /// A numeric value fell outside its accepted range
    ValueOutOfRange = 3003,
    /// Configuration failed validation
    ConfigInvalid = 6002,
    /// Broken internal invariant
    InternalError = 9000,
    /// Serialization of a result structure failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Short human-readable summary of the code
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::MissingRequiredField => "Missing required field",
            Self::ValueOutOfRange => "Value out of range",
            Self::ConfigInvalid => "Invalid configuration",
            Self::InternalError => "Internal engine error",
            Self::SerializationError => "Serialization failed",
        }
    }

    /// Whether the caller can fix this error by correcting its input
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange
        )
    }
}

/// Where an error came from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Id of the activity (or other record) that failed, if any
    pub resource_id: Option<String>,
    /// Structured extra fields, `Null` when absent
    pub details: serde_json::Value,
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// What went wrong, in words
    pub message: String,
    /// Offending record and extra fields
    pub context: ErrorContext,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the id of the offending record
    #[must_use]
    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.context.resource_id = Some(id.into());
        self
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(cause));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.resource_id {
            Some(id) => write!(f, "{} [{id}]: {}", self.code.summary(), self.message),
            None => write!(f, "{}: {}", self.code.summary(), self.message),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::invalid_input("distance must be non-negative");
        assert_eq!(error.to_string(), "Invalid input: distance must be non-negative");
    }

    #[test]
    fn test_error_context_carries_resource_id() {
        let error = AppError::out_of_range("negative moving time").with_resource_id("run-42");
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(
            error.to_string(),
            "Value out of range [run-42]: negative moving time"
        );
        assert_eq!(error.context.resource_id.as_deref(), Some("run-42"));
        assert!(error.code.is_client_error());
    }

    #[test]
    fn test_internal_errors_are_not_client_errors() {
        let error = AppError::internal("empty zone table");
        assert!(!error.code.is_client_error());
        assert!(error.context.details.is_null());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid);
        assert!(matches!(json.as_deref(), Ok("\"CONFIG_INVALID\"")));
    }
}
