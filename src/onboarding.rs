// ABOUTME: Onboarding wizard with per-step required-field gates
// ABOUTME: Linear forward moves, free backward moves, macro computation on completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Onboarding
//!
//! The profile wizard walks through [`OnboardingStep::ALL`] in order. A step
//! can only be left forward once its required fields are present
//! ([`can_go_to_next_step`]); any earlier step can be revisited at any time.
//! Advancing past [`OnboardingStep::Advanced`] completes the wizard and the
//! collected [`ProfileData`] is ready for macro computation.

use std::fmt;

use chrono::NaiveDate;
use mealwise_core::errors::PlannerError;
use mealwise_core::models::{MacroTargets, ProfileData, ProfileUpdate};
use mealwise_intelligence::{compute_macro_targets, NutritionConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wizard steps in presentation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStep {
    /// Standard or keto
    DietType,
    /// Sex and birth date
    BasicInfo,
    /// Height and weight
    PhysicalStats,
    /// Activity level
    ActivityLevel,
    /// Lose, maintain or gain
    Goals,
    /// Optional fat/carb split or carb cap
    Advanced,
}

impl OnboardingStep {
    /// Every step, first to last
    pub const ALL: [Self; 6] = [
        Self::DietType,
        Self::BasicInfo,
        Self::PhysicalStats,
        Self::ActivityLevel,
        Self::Goals,
        Self::Advanced,
    ];

    /// The step after this one, `None` after `Advanced`
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::DietType => Some(Self::BasicInfo),
            Self::BasicInfo => Some(Self::PhysicalStats),
            Self::PhysicalStats => Some(Self::ActivityLevel),
            Self::ActivityLevel => Some(Self::Goals),
            Self::Goals => Some(Self::Advanced),
            Self::Advanced => None,
        }
    }

    /// Profile fields that must be set before leaving this step
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::DietType => &["diet_type"],
            Self::BasicInfo => &["sex", "birth_date"],
            Self::PhysicalStats => &["height", "weight"],
            Self::ActivityLevel => &["activity_level"],
            Self::Goals => &["goal"],
            Self::Advanced => &[],
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DietType => "DIET_TYPE",
            Self::BasicInfo => "BASIC_INFO",
            Self::PhysicalStats => "PHYSICAL_STATS",
            Self::ActivityLevel => "ACTIVITY_LEVEL",
            Self::Goals => "GOALS",
            Self::Advanced => "ADVANCED",
        };
        f.write_str(name)
    }
}

fn field_is_set(data: &ProfileData, field: &str) -> bool {
    match field {
        "diet_type" => data.diet_type.is_some(),
        "sex" => data.sex.is_some(),
        "birth_date" => data.birth_date.is_some(),
        "height" => data.height.is_some(),
        "weight" => data.weight.is_some(),
        "activity_level" => data.activity_level.is_some(),
        "goal" => data.goal.is_some(),
        _ => false,
    }
}

/// Required fields of `step` that `data` still lacks
#[must_use]
pub fn missing_fields(data: &ProfileData, step: OnboardingStep) -> Vec<&'static str> {
    step.required_fields()
        .iter()
        .copied()
        .filter(|field| !field_is_set(data, field))
        .collect()
}

/// Whether `data` holds every field `step` requires
#[must_use]
pub fn can_go_to_next_step(data: &ProfileData, step: OnboardingStep) -> bool {
    step.required_fields()
        .iter()
        .all(|field| field_is_set(data, field))
}

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "step", rename_all = "snake_case")]
pub enum WizardPosition {
    /// Showing a step
    Step(OnboardingStep),
    /// Past `Advanced`; the profile is ready to submit
    Complete,
}

/// Profile wizard state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingWizard {
    profile: ProfileData,
    position: WizardPosition,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Fresh wizard on the first step
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile: ProfileData::default(),
            position: WizardPosition::Step(OnboardingStep::DietType),
        }
    }

    /// Resume with saved answers on the first step that is not yet satisfied
    ///
    /// A profile that satisfies every gate resumes on `Advanced`.
    #[must_use]
    pub fn resume(profile: ProfileData) -> Self {
        let step = OnboardingStep::ALL
            .into_iter()
            .find(|step| !can_go_to_next_step(&profile, *step))
            .unwrap_or(OnboardingStep::Advanced);
        Self {
            profile,
            position: WizardPosition::Step(step),
        }
    }

    /// Answers collected so far
    #[must_use]
    pub const fn profile(&self) -> &ProfileData {
        &self.profile
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> WizardPosition {
        self.position
    }

    /// Current step, `None` once complete
    #[must_use]
    pub const fn current_step(&self) -> Option<OnboardingStep> {
        match self.position {
            WizardPosition::Step(step) => Some(step),
            WizardPosition::Complete => None,
        }
    }

    /// Whether the wizard has moved past `Advanced`
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.position, WizardPosition::Complete)
    }

    /// Record one form change
    pub fn update(&mut self, update: ProfileUpdate) {
        self.profile = self.profile.clone().apply(update);
    }

    /// Move to the next step
    ///
    /// Advancing a completed wizard is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` naming the first required field of the current
    /// step that is still absent
    pub fn advance(&mut self) -> Result<WizardPosition, PlannerError> {
        let WizardPosition::Step(step) = self.position else {
            return Ok(self.position);
        };

        if let Some(field) = missing_fields(&self.profile, step).first().copied() {
            return Err(PlannerError::missing(field));
        }

        self.position = step
            .next()
            .map_or(WizardPosition::Complete, WizardPosition::Step);
        debug!(from = %step, to = ?self.position, "Onboarding advanced");
        Ok(self.position)
    }

    /// Return to an earlier (or the current) step
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `step` lies ahead of the current step
    pub fn go_back(&mut self, step: OnboardingStep) -> Result<(), PlannerError> {
        if let WizardPosition::Step(current) = self.position {
            if step > current {
                return Err(PlannerError::out_of_range(
                    "step",
                    format!("cannot skip forward from {current} to {step}"),
                ));
            }
        }
        self.position = WizardPosition::Step(step);
        Ok(())
    }

    /// Submit the completed profile for macro computation
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the wizard is not complete, otherwise any error
    /// from [`compute_macro_targets`]
    pub fn submit(
        &self,
        today: NaiveDate,
        config: &NutritionConfig,
    ) -> Result<MacroTargets, PlannerError> {
        if let WizardPosition::Step(step) = self.position {
            return Err(PlannerError::out_of_range(
                "step",
                format!("onboarding is still on {step}"),
            ));
        }
        compute_macro_targets(&self.profile, today, config)
    }
}
