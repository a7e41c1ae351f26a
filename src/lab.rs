// ABOUTME: Workout session state machine (Idle / Loading / Ready)
// ABOUTME: Guards against stale in-flight results with a generation token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

//! # Workout Lab
//!
//! Models the requesting view's lifecycle without any rendering concern.
//! States: `Idle` (no plan, not loading) → `Loading` (generation in flight)
//! → `Ready` (plan present) → back to `Idle` on discard, or `Loading` →
//! `Idle` on failure with a user-visible notification.
//!
//! Cancellation of the outbound call is not supported. Instead, every
//! generation issues an opaque [`GenerationToken`]; a result whose token no
//! longer matches the current generation is ignored, so a second generate
//! action racing an in-flight one can never write a stale plan into the
//! session.

use tracing::{debug, error};

use crate::errors::AppResult;
use crate::models::WorkoutPlan;

/// Fixed notification text shown when generation fails
pub const GENERATION_FAILURE_NOTICE: &str = "System Overload. Try again.";

/// Observable state of a workout lab session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabState {
    /// No plan present, no request in flight
    Idle,
    /// Generation request in flight
    Loading,
    /// Plan present
    Ready,
}

/// Opaque handle tying an in-flight request to the generation that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationToken(u64);

/// Single-owner session state for workout requests
///
/// The plan slot is owned exclusively by this session and replaced wholesale,
/// never merged.
#[derive(Debug, Default)]
pub struct WorkoutLab {
    plan: Option<WorkoutPlan>,
    loading: bool,
    generation: u64,
    notification: Option<String>,
}

impl WorkoutLab {
    /// Create an idle session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state
    #[must_use]
    pub const fn state(&self) -> LabState {
        if self.loading {
            LabState::Loading
        } else if self.plan.is_some() {
            LabState::Ready
        } else {
            LabState::Idle
        }
    }

    /// The current plan, if any
    #[must_use]
    pub const fn plan(&self) -> Option<&WorkoutPlan> {
        self.plan.as_ref()
    }

    /// User-visible failure notification from the last resolved request
    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Start a new generation
    ///
    /// Clears any existing plan immediately (optimistic clear) before the
    /// request resolves, drops a previous notification, and invalidates any
    /// previously issued token.
    pub fn begin_generation(&mut self) -> GenerationToken {
        self.plan = None;
        self.notification = None;
        self.loading = true;
        self.generation += 1;
        GenerationToken(self.generation)
    }

    /// Apply a finished request
    ///
    /// Returns `false` without touching the session when the token no longer
    /// matches the current generation, meaning a newer request superseded
    /// this one. On success the plan replaces the loading state; on failure
    /// the error is logged, the fixed notification is recorded, and the
    /// session falls back to `Idle`. The error is not retried.
    pub fn resolve(&mut self, token: GenerationToken, result: AppResult<WorkoutPlan>) -> bool {
        if token.0 != self.generation {
            debug!(
                token = token.0,
                current = self.generation,
                "Ignoring stale generation result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(plan) => {
                self.plan = Some(plan);
            }
            Err(e) => {
                error!(error = %e, "Workout generation failed");
                self.plan = None;
                self.notification = Some(GENERATION_FAILURE_NOTICE.to_owned());
            }
        }
        true
    }

    /// Discard the current plan
    ///
    /// No confirmation, idempotent: discarding when no plan is present is a
    /// no-op that leaves the session `Idle`.
    pub fn discard(&mut self) {
        self.plan = None;
        self.notification = None;
    }
}
