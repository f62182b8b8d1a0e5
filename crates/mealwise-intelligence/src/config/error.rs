// ABOUTME: Configuration error types for nutrition config validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and bad proportions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Ordered values are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Proportions don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Parse(_) => Self::config(error.to_string()),
            _ => Self::new(ErrorCode::ConfigInvalid, error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_is_config_error() {
        let error = AppError::from(ConfigError::Parse("Invalid MEALWISE_SNACK".to_owned()));

        assert_eq!(error.code, ErrorCode::ConfigError);
        assert_eq!(error.http_status(), 500);
        assert!(error.message.contains("MEALWISE_SNACK"));
    }

    #[test]
    fn test_validation_failure_is_config_invalid() {
        let errors = [
            ConfigError::InvalidRange("activity factors must increase"),
            ConfigError::MissingField("min_safe_calories_kcal"),
            ConfigError::InvalidWeights("meal shares must sum to 1.0"),
            ConfigError::ValueOutOfRange("protein_g_per_kg"),
        ];

        for error in errors {
            assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
        }
    }
}
