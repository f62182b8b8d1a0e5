// ABOUTME: Unit conversion constants and body measurement bounds
// ABOUTME: Provides named constants to eliminate magic numbers in normalization and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Centimeters per inch (exact)
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per avoirdupois pound (exact)
pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Youngest accepted age in whole years
pub const MIN_AGE_YEARS: u32 = 1;

/// Oldest accepted age in whole years
pub const MAX_AGE_YEARS: u32 = 120;

/// Smallest accepted height in centimeters
pub const MIN_HEIGHT_CM: f64 = 50.0;

/// Largest accepted height in centimeters
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Smallest accepted weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 20.0;

/// Largest accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;
