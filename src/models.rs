// ABOUTME: Core data models for workout plans and request parameters
// ABOUTME: Defines WorkoutPlan, Exercise, Intensity and their local schema re-validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

//! # Data Models
//!
//! Shared data structures for the Momentum coaching core.
//!
//! ## Design Principles
//!
//! - **Wire-exact**: serialization matches the structured-output schema
//!   byte-for-byte (`durationMinutes`, the four intensity strings)
//! - **Immutable plans**: a [`WorkoutPlan`] is created only as the result of
//!   one generation call and replaced wholesale, never mutated field-by-field
//! - **Locally re-validated**: the remote schema constrains types; the
//!   `validate` methods re-check the semantic constraints the schema cannot
//!   express before a plan reaches the caller

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Workout intensity rating produced by the model
///
/// Closed enumeration matching the structured-output schema's `intensity`
/// constraint. Serialization uses the exact wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    /// Recovery or technique work
    Low,
    /// Standard training session
    Medium,
    /// Hard session with limited rest
    High,
    /// Maximum-effort session
    Brutal,
}

impl Intensity {
    /// All allowed intensity values, in escalation order
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Brutal];

    /// Wire string for this intensity
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Brutal => "Brutal",
        }
    }
}

impl Display for Intensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Brutal" => Ok(Self::Brutal),
            other => Err(AppError::invalid_input(format!(
                "unknown intensity: {other}"
            ))),
        }
    }
}

/// A single exercise within a workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets (positive)
    pub sets: u32,
    /// Rep scheme as text; "AMRAP" and ranges like "8-12" are valid
    pub reps: String,
    /// Brief, direct cue on form or tempo; may be empty
    pub notes: String,
}

impl Exercise {
    /// Check the semantic constraints the schema cannot express
    ///
    /// # Errors
    ///
    /// Returns a schema-violation error for an empty name or zero sets.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::schema_violation("exercise name must not be empty"));
        }
        if self.sets == 0 {
            return Err(AppError::schema_violation(format!(
                "exercise '{}' must have at least one set",
                self.name
            )));
        }
        Ok(())
    }
}

/// A synthesized workout plan
///
/// Created only as the successful result of one generation call; owned
/// exclusively by the session that requested it until discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Punchy title for the workout
    pub title: String,
    /// Estimated total duration in minutes (positive)
    pub duration_minutes: u32,
    /// Overall intensity rating
    pub intensity: Intensity,
    /// Ordered exercise sequence; may be empty, practically at least one
    pub exercises: Vec<Exercise>,
}

impl WorkoutPlan {
    /// Re-validate the parsed payload against the declared schema's semantics
    ///
    /// serde already rejects wrong types; this re-checks non-emptiness and
    /// positivity locally instead of trusting the remote output blindly.
    /// An empty exercise list is schema-valid and passes.
    ///
    /// # Errors
    ///
    /// Returns a schema-violation error describing the first failed constraint.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::schema_violation("plan title must not be empty"));
        }
        if self.duration_minutes == 0 {
            return Err(AppError::schema_violation(
                "plan duration must be a positive number of minutes",
            ));
        }
        for exercise in &self.exercises {
            exercise.validate()?;
        }
        Ok(())
    }
}

/// User-selected workout parameters
///
/// Three free-text fields; no validation beyond non-emptiness happens before
/// submission — content constraints are delegated to the remote model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    /// Primary training objective
    pub goal: String,
    /// Available time budget
    pub time_budget: String,
    /// Available equipment, free text
    pub equipment: String,
}

impl RequestParameters {
    /// Create request parameters
    #[must_use]
    pub fn new(
        goal: impl Into<String>,
        time_budget: impl Into<String>,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            time_budget: time_budget.into(),
            equipment: equipment.into(),
        }
    }

    /// Non-emptiness is the only local check before submission
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the first empty field.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("goal", &self.goal),
            ("timeBudget", &self.time_budget),
            ("equipment", &self.equipment),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::invalid_input(format!(
                    "{field} must not be empty"
                )));
            }
        }
        Ok(())
    }
}
