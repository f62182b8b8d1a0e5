// ABOUTME: Onboarding profile model with body stats, activity, goal and diet preferences
// ABOUTME: ProfileData is immutable; ProfileUpdate plus apply() form a pure reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::PlannerError;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job or training twice a day
    ExtremelyActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];
}

/// Body-composition goal driving the caloric offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

/// Diet type driving macro allocation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Protein first, remainder split between fat and carbs
    #[default]
    Standard,
    /// Hard carbohydrate cap, remainder to fat
    Keto,
}

/// Unit tag for a height measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    /// Centimeters (canonical)
    Cm,
    /// Inches
    In,
}

/// Unit tag for a weight measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms (canonical)
    Kg,
    /// Pounds
    Lb,
}

/// Height as entered by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Height {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: HeightUnit,
}

impl Height {
    /// Height in centimeters
    #[must_use]
    pub const fn cm(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::Cm,
        }
    }

    /// Height in inches
    #[must_use]
    pub const fn inches(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::In,
        }
    }
}

/// Weight as entered by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: WeightUnit,
}

impl Weight {
    /// Weight in kilograms
    #[must_use]
    pub const fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    /// Weight in pounds
    #[must_use]
    pub const fn pounds(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lb,
        }
    }
}

/// Onboarding answers collected by the profile wizard
///
/// Every field is optional while the wizard is in progress; macro computation
/// reports `MissingInput` for whichever required field is still absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileData {
    /// Biological sex
    pub sex: Option<Sex>,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Height with unit
    pub height: Option<Height>,
    /// Weight with unit
    pub weight: Option<Weight>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Body-composition goal
    pub goal: Option<Goal>,
    /// Diet type
    pub diet_type: Option<DietType>,
    /// Fat share of non-protein calories, 20-60 in steps of 5 (standard diet)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_carb_split: Option<u8>,
    /// Daily carbohydrate cap in grams, 5-100 (keto diet)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_carbs: Option<u16>,
}

/// A single change to a profile, as produced by one form interaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdate {
    /// Set biological sex
    Sex(Sex),
    /// Set date of birth
    BirthDate(NaiveDate),
    /// Set height
    Height(Height),
    /// Set weight
    Weight(Weight),
    /// Set activity level
    ActivityLevel(ActivityLevel),
    /// Set goal
    Goal(Goal),
    /// Set diet type
    DietType(DietType),
    /// Set or clear the fat/carb split
    FatCarbSplit(Option<u8>),
    /// Set or clear the keto carb cap
    MaxCarbs(Option<u16>),
}

impl ProfileData {
    /// Produce the next profile value with `update` applied
    #[must_use]
    pub fn apply(self, update: ProfileUpdate) -> Self {
        match update {
            ProfileUpdate::Sex(sex) => Self {
                sex: Some(sex),
                ..self
            },
            ProfileUpdate::BirthDate(birth_date) => Self {
                birth_date: Some(birth_date),
                ..self
            },
            ProfileUpdate::Height(height) => Self {
                height: Some(height),
                ..self
            },
            ProfileUpdate::Weight(weight) => Self {
                weight: Some(weight),
                ..self
            },
            ProfileUpdate::ActivityLevel(level) => Self {
                activity_level: Some(level),
                ..self
            },
            ProfileUpdate::Goal(goal) => Self {
                goal: Some(goal),
                ..self
            },
            ProfileUpdate::DietType(diet_type) => Self {
                diet_type: Some(diet_type),
                ..self
            },
            ProfileUpdate::FatCarbSplit(split) => Self {
                fat_carb_split: split,
                ..self
            },
            ProfileUpdate::MaxCarbs(max_carbs) => Self {
                max_carbs,
                ..self
            },
        }
    }

    /// Fold a sequence of updates into a profile
    #[must_use]
    pub fn apply_all<I>(self, updates: I) -> Self
    where
        I: IntoIterator<Item = ProfileUpdate>,
    {
        updates.into_iter().fold(self, Self::apply)
    }

    /// Age in whole years on `today`
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` when no birth date is set and `OutOfRange` when
    /// the birth date lies after `today`.
    pub fn age_on(&self, today: NaiveDate) -> Result<u32, PlannerError> {
        let birth_date = self.birth_date.ok_or(PlannerError::missing("birth_date"))?;
        today.years_since(birth_date).ok_or_else(|| {
            PlannerError::out_of_range("birth_date", format!("{birth_date} is after {today}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_apply_sets_single_field() {
        let before = ProfileData::default();
        let after = before.clone().apply(ProfileUpdate::Sex(Sex::Female));

        assert_eq!(after.sex, Some(Sex::Female));
        assert_eq!(before.sex, None);
        assert_eq!(after.birth_date, None);
    }

    #[test]
    fn test_apply_can_clear_optional_tuning() {
        let profile = ProfileData::default()
            .apply_all([ProfileUpdate::FatCarbSplit(Some(35)), ProfileUpdate::FatCarbSplit(None)]);

        assert_eq!(profile.fat_carb_split, None);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let profile = ProfileData::default().apply(ProfileUpdate::BirthDate(date(1994, 6, 15)));

        assert_eq!(profile.age_on(date(2024, 6, 14)).unwrap(), 29);
        assert_eq!(profile.age_on(date(2024, 6, 15)).unwrap(), 30);
    }

    #[test]
    fn test_age_requires_birth_date() {
        let error = ProfileData::default().age_on(date(2024, 1, 1)).unwrap_err();
        assert_eq!(error, PlannerError::missing("birth_date"));
    }

    #[test]
    fn test_future_birth_date_is_out_of_range() {
        let profile = ProfileData::default().apply(ProfileUpdate::BirthDate(date(2030, 1, 1)));
        assert!(matches!(
            profile.age_on(date(2024, 1, 1)),
            Err(PlannerError::OutOfRange { field: "birth_date", .. })
        ));
    }

    #[test]
    fn test_update_wire_format() {
        let json = serde_json::to_value(ProfileUpdate::Goal(Goal::Lose)).unwrap();
        assert_eq!(json, serde_json::json!({ "field": "goal", "value": "lose" }));
    }
}
