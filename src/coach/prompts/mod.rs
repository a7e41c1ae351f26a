// ABOUTME: Momentum persona system prompts loaded at compile time
// ABOUTME: Provides the system instructions for workout generation and coaching Q&A
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

//! # System Prompts
//!
//! Persona instructions for LLM interactions, loaded at compile time from
//! markdown files for easy maintenance.

/// Momentum workout-generation system instruction
pub const WORKOUT_SYSTEM_PROMPT: &str = include_str!("momentum_system.md");

/// Momentum coaching Q&A system instruction
///
/// Caps the answer at roughly 50 words. The cap is advisory to the model,
/// not locally enforced.
pub const COACH_SYSTEM_PROMPT: &str = include_str!("momentum_coach.md");

/// Get the system instruction for workout generation
#[must_use]
pub fn workout_system_prompt() -> &'static str {
    WORKOUT_SYSTEM_PROMPT.trim_end()
}

/// Get the system instruction for coaching questions
#[must_use]
pub fn coach_system_prompt() -> &'static str {
    COACH_SYSTEM_PROMPT.trim_end()
}
