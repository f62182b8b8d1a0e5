// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, recipe catalogs, profiles and test recipe sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealwise`

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use async_trait::async_trait;
use chrono::NaiveDate;
use mealwise::errors::{AppError, AppResult};
use mealwise::models::{
    ActivityLevel, DietType, Goal, Height, NutritionFacts, ProfileData, ProfileUpdate, Recipe,
    Sex, Weight,
};
use mealwise::pagination::{Cursor, CursorPage, PaginationParams};
use mealwise::sources::RecipeSource;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Owner of most fixture recipes
pub const ALICE: Uuid = Uuid::from_u128(0xA11CE);
/// Owner of the remaining fixture recipes
pub const BOB: Uuid = Uuid::from_u128(0xB0B);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference "today" used across tests
pub fn today() -> NaiveDate {
    date(2024, 6, 1)
}

/// Male, 30 years old on `today()`, 180 cm, 80 kg, moderately active, losing weight
pub fn reference_profile() -> ProfileData {
    ProfileData::default().apply_all([
        ProfileUpdate::DietType(DietType::Standard),
        ProfileUpdate::Sex(Sex::Male),
        ProfileUpdate::BirthDate(date(1994, 3, 10)),
        ProfileUpdate::Height(Height::cm(180.0)),
        ProfileUpdate::Weight(Weight::kg(80.0)),
        ProfileUpdate::ActivityLevel(ActivityLevel::ModeratelyActive),
        ProfileUpdate::Goal(Goal::Lose),
    ])
}

fn recipe(
    name: &str,
    owner: Uuid,
    facts: (f64, f64, f64, f64),
    category: &str,
    cuisine: &str,
    prep_time: u32,
) -> Recipe {
    let (calories, protein, carbs, fat) = facts;
    Recipe::new(name, owner, NutritionFacts::new(calories, protein, carbs, fat))
        .with_category(category)
        .with_cuisine(cuisine)
        .with_prep_time(prep_time)
}

/// Five recipes, four with chicken; catalog order matters for stability tests
///
/// | # | name                  | kcal | protein | carbs | fat | category | cuisine       | mins | owner |
/// |---|-----------------------|------|---------|-------|-----|----------|---------------|------|-------|
/// | 0 | Grilled Chicken Salad | 350  | 35      | 12    | 15  | lunch    | mediterranean | 20   | Alice |
/// | 1 | Chicken Burrito Bowl  | 650  | 42      | 70    | 18  | dinner   | mexican       | 30   | Alice |
/// | 2 | Chicken Noodle Soup   | 280  | 18      | 30    | 6   | lunch    | american      | 45   | Bob   |
/// | 3 | Beef Tacos            | 520  | 30      | 40    | 25  | dinner   | mexican       | 25   | Alice |
/// | 4 | Chicken Stir Fry      | 480  | 38      | 35    | 16  | dinner   | chinese       | 25   | Bob   |
pub fn chicken_fixture() -> Vec<Recipe> {
    vec![
        recipe(
            "Grilled Chicken Salad",
            ALICE,
            (350.0, 35.0, 12.0, 15.0),
            "lunch",
            "mediterranean",
            20,
        ),
        recipe(
            "Chicken Burrito Bowl",
            ALICE,
            (650.0, 42.0, 70.0, 18.0),
            "dinner",
            "mexican",
            30,
        ),
        recipe(
            "Chicken Noodle Soup",
            BOB,
            (280.0, 18.0, 30.0, 6.0),
            "lunch",
            "american",
            45,
        ),
        recipe(
            "Beef Tacos",
            ALICE,
            (520.0, 30.0, 40.0, 25.0),
            "dinner",
            "mexican",
            25,
        ),
        recipe(
            "Chicken Stir Fry",
            BOB,
            (480.0, 38.0, 35.0, 16.0),
            "dinner",
            "chinese",
            25,
        ),
    ]
}

/// `count` numbered recipes with repeating calorie values
pub fn numbered_catalog(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let calories = f64::from(u32::try_from(i % 9).unwrap()) * 100.0 + 100.0;
            Recipe::new(
                format!("Recipe {i:04}"),
                if i % 2 == 0 { ALICE } else { BOB },
                NutritionFacts::new(calories, 20.0, 30.0, 10.0),
            )
        })
        .collect()
}

pub fn names(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.name.as_str()).collect()
}

/// Source that answers every other request with an empty page
pub struct SparseRecipeSource {
    recipes: Vec<Recipe>,
    calls: AtomicUsize,
}

impl SparseRecipeSource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeSource for SparseRecipeSource {
    fn name(&self) -> &'static str {
        "sparse"
    }

    async fn fetch_page(&self, params: &PaginationParams) -> AppResult<CursorPage<Recipe>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let offset = params
            .cursor
            .as_ref()
            .and_then(Cursor::decode)
            .map_or(0, |(offset, _)| offset);

        if call % 2 == 0 {
            return Ok(CursorPage::new(
                Vec::new(),
                Some(Cursor::new(offset, "empty")),
                true,
            ));
        }

        let end = (offset + params.limit).min(self.recipes.len());
        let items = self.recipes[offset..end].to_vec();
        let has_more = end < self.recipes.len();
        Ok(CursorPage::new(
            items,
            has_more.then(|| Cursor::new(end, "page")),
            has_more,
        ))
    }
}

/// Source whose backing store is unreachable
pub struct FailingRecipeSource;

#[async_trait]
impl RecipeSource for FailingRecipeSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_page(&self, _params: &PaginationParams) -> AppResult<CursorPage<Recipe>> {
        Err(AppError::internal("connection reset by peer"))
    }
}
