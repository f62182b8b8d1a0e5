// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Mealwise platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Tests pin these values, so changing one is a behavior change.

/// Energy expenditure, goal adjustment and macro allocation constants
pub mod nutrition;
/// Unit conversion and body measurement bounds
pub mod units;

/// Recipe listing and source paging limits
pub mod limits {
    /// Recipes returned per page of search results
    pub const RECIPES_PAGE_SIZE: usize = 12;
    /// Default page size when streaming recipes from a paged source
    pub const DEFAULT_SOURCE_PAGE_SIZE: usize = 50;
    /// Minimum page size to prevent excessive source calls
    pub const MIN_SOURCE_PAGE_SIZE: usize = 10;
    /// Maximum page size to keep per-fetch memory bounded
    pub const MAX_SOURCE_PAGE_SIZE: usize = 200;
    /// Catalog size from which in-memory filtering runs in parallel
    pub const PARALLEL_FILTER_THRESHOLD: usize = 2048;
}

/// Service names for structured logging
pub mod service_names {
    /// Main service name
    pub const MEALWISE: &str = "mealwise";
}
