// ABOUTME: Unit normalizer converting user-entered height and weight into metric
// ABOUTME: Parses unit tags and returns centimeters and kilograms for the energy estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Unit Normalizer
//!
//! Heights arrive as `cm` or `in`, weights as `kg` or `lb`. Everything
//! downstream works in centimeters and kilograms.

use mealwise_core::constants::units::{CM_PER_INCH, KG_PER_POUND};
use mealwise_core::errors::PlannerError;
use mealwise_core::models::{Height, HeightUnit, Weight, WeightUnit};

const HEIGHT_UNITS: &str = "cm, in";
const WEIGHT_UNITS: &str = "kg, lb";

/// Parse a height unit tag (trimmed, case-insensitive)
///
/// # Errors
///
/// Returns `InvalidUnit` when the tag is neither `cm` nor `in`
pub fn parse_height_unit(tag: &str) -> Result<HeightUnit, PlannerError> {
    match tag.trim().to_ascii_lowercase().as_str() {
        "cm" => Ok(HeightUnit::Cm),
        "in" => Ok(HeightUnit::In),
        _ => Err(PlannerError::invalid_unit(tag, "height", HEIGHT_UNITS)),
    }
}

/// Parse a weight unit tag (trimmed, case-insensitive)
///
/// # Errors
///
/// Returns `InvalidUnit` when the tag is neither `kg` nor `lb`
pub fn parse_weight_unit(tag: &str) -> Result<WeightUnit, PlannerError> {
    match tag.trim().to_ascii_lowercase().as_str() {
        "kg" => Ok(WeightUnit::Kg),
        "lb" => Ok(WeightUnit::Lb),
        _ => Err(PlannerError::invalid_unit(tag, "weight", WEIGHT_UNITS)),
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, PlannerError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PlannerError::out_of_range(
            field,
            format!("must be a positive number, got {value}"),
        ))
    }
}

/// Height in centimeters
///
/// # Errors
///
/// Returns `OutOfRange` for a non-finite or non-positive value
pub fn height_to_cm(height: Height) -> Result<f64, PlannerError> {
    let value = ensure_positive("height", height.value)?;
    Ok(match height.unit {
        HeightUnit::Cm => value,
        HeightUnit::In => value * CM_PER_INCH,
    })
}

/// Weight in kilograms
///
/// # Errors
///
/// Returns `OutOfRange` for a non-finite or non-positive value
pub fn weight_to_kg(weight: Weight) -> Result<f64, PlannerError> {
    let value = ensure_positive("weight", weight.value)?;
    Ok(match weight.unit {
        WeightUnit::Kg => value,
        WeightUnit::Lb => value * KG_PER_POUND,
    })
}

/// Normalize a raw height and unit tag to centimeters
///
/// # Errors
///
/// Returns `InvalidUnit` for an unknown tag or `OutOfRange` for a bad value
pub fn normalize_height(value: f64, unit: &str) -> Result<f64, PlannerError> {
    let unit = parse_height_unit(unit)?;
    height_to_cm(Height { value, unit })
}

/// Normalize a raw weight and unit tag to kilograms
///
/// # Errors
///
/// Returns `InvalidUnit` for an unknown tag or `OutOfRange` for a bad value
pub fn normalize_weight(value: f64, unit: &str) -> Result<f64, PlannerError> {
    let unit = parse_weight_unit(unit)?;
    weight_to_kg(Weight { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_values_pass_through() {
        assert!((normalize_height(180.0, "cm").unwrap() - 180.0).abs() < f64::EPSILON);
        assert!((normalize_weight(80.0, "kg").unwrap() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_imperial_conversion() {
        assert!((normalize_height(70.0, "in").unwrap() - 177.8).abs() < 1e-9);
        assert!((normalize_weight(100.0, "lb").unwrap() - 45.359_237).abs() < 1e-9);
    }

    #[test]
    fn test_tags_are_trimmed_and_case_insensitive() {
        assert_eq!(parse_height_unit(" IN ").unwrap(), HeightUnit::In);
        assert_eq!(parse_weight_unit("Kg").unwrap(), WeightUnit::Kg);
    }

    #[test]
    fn test_unknown_tag_is_invalid_unit() {
        let error = normalize_weight(12.0, "stone").unwrap_err();
        assert!(matches!(
            error,
            PlannerError::InvalidUnit { quantity: "weight", .. }
        ));

        assert!(normalize_height(6.0, "ft").is_err());
    }

    #[test]
    fn test_non_positive_values_rejected() {
        assert!(matches!(
            height_to_cm(Height::cm(0.0)),
            Err(PlannerError::OutOfRange { field: "height", .. })
        ));
        assert!(weight_to_kg(Weight::kg(f64::NAN)).is_err());
        assert!(weight_to_kg(Weight::pounds(-5.0)).is_err());
    }
}
