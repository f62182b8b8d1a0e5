// ABOUTME: Domain error kinds for profile normalization, macro computation and recipe filtering
// ABOUTME: Provides PlannerError and its conversion into the platform-wide AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Planner Error Types
//!
//! Every domain computation fails with a [`PlannerError`]. These errors describe
//! invalid input, never transient failure, so callers must not retry them.

use serde_json::json;

use super::{AppError, ErrorCode};

/// Errors produced by the nutrition and recipe planning core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    /// A field required by the computation was not supplied
    #[error("Missing required input: {field}")]
    MissingInput {
        /// Name of the absent field
        field: &'static str,
    },

    /// A value falls outside its documented bounds
    #[error("Value for {field} is out of range: {reason}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description of the accepted range
        reason: String,
    },

    /// A unit tag is not one of the recognized set
    #[error("Unrecognized unit '{unit}' for {quantity} (expected one of: {expected})")]
    InvalidUnit {
        /// The tag that was supplied
        unit: String,
        /// Quantity being measured (height, weight)
        quantity: &'static str,
        /// Accepted tags
        expected: &'static str,
    },

    /// A recipe filter carries contradictory bounds
    #[error("Invalid filter for {field}: minimum {min} exceeds maximum {max}")]
    InvalidFilter {
        /// Nutrient or attribute the bounds apply to
        field: &'static str,
        /// Supplied lower bound
        min: u32,
        /// Supplied upper bound
        max: u32,
    },
}

impl PlannerError {
    /// Create a "missing input" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingInput { field }
    }

    /// Create an "out of range" error
    #[must_use]
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Create an "invalid unit" error
    #[must_use]
    pub fn invalid_unit(
        unit: impl Into<String>,
        quantity: &'static str,
        expected: &'static str,
    ) -> Self {
        Self::InvalidUnit {
            unit: unit.into(),
            quantity,
            expected,
        }
    }

    /// Create an "invalid filter" error
    #[must_use]
    pub const fn invalid_filter(field: &'static str, min: u32, max: u32) -> Self {
        Self::InvalidFilter { field, min, max }
    }

    /// Name of the field this error refers to
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingInput { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidFilter { field, .. } => field,
            Self::InvalidUnit { quantity, .. } => quantity,
        }
    }

    /// Stable error code used at the API boundary
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingInput { .. } => ErrorCode::MissingRequiredField,
            Self::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
            Self::InvalidUnit { .. } => ErrorCode::InvalidFormat,
            Self::InvalidFilter { .. } => ErrorCode::InvalidInput,
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(error: PlannerError) -> Self {
        let details = match &error {
            PlannerError::InvalidFilter { field, min, max } => {
                json!({ "field": field, "min": min, "max": max })
            }
            PlannerError::InvalidUnit { unit, expected, .. } => {
                json!({ "field": error.field(), "unit": unit, "expected": expected })
            }
            PlannerError::MissingInput { .. } | PlannerError::OutOfRange { .. } => {
                json!({ "field": error.field() })
            }
        };
        Self::new(error.error_code(), error.to_string()).with_details(details)
    }
}
