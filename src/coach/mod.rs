// ABOUTME: Workout plan generation service and schema-free coaching query
// ABOUTME: Builds constrained-output requests and maps raw payloads into validated WorkoutPlans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

//! # Coach Service
//!
//! The plan generation service issues one outbound structured-generation
//! request per call and returns a validated [`WorkoutPlan`] or fails. The
//! coaching query shares the same transport but returns plain text with no
//! schema, and soft-fails to fixed fallback strings because the feature is
//! decorative and must never block the caller.
//!
//! Each call is a single best-effort attempt: no retry, no local timeout, no
//! caching. The service mutates no local state beyond the network call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use momentum_coach::coach::CoachService;
//! use momentum_coach::llm::GeminiProvider;
//! use momentum_coach::models::RequestParameters;
//!
//! # async fn example() -> momentum_coach::errors::AppResult<()> {
//! let coach = CoachService::new(Arc::new(GeminiProvider::from_env()?));
//! let params = RequestParameters::new("Strength (Powerlifting)", "60 mins", "Barbell only");
//! let plan = coach.generate_workout(&params).await?;
//! # Ok(())
//! # }
//! ```

pub mod prompts;

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, error, instrument, warn};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{RequestParameters, WorkoutPlan};

/// Fallback answer when the coaching transport fails
pub const COACH_TRANSPORT_FALLBACK: &str = "Connection severed.";

/// Fallback answer when the coaching call returns no text
pub const COACH_EMPTY_FALLBACK: &str = "System offline. Try again.";

/// Structured-output schema constraining workout generation
///
/// This is the bit-exact contract with the remote model: an object with
/// required string `title`, required integer `durationMinutes`, required
/// string `intensity` restricted to the four-value enumeration, and a
/// required `exercises` array of objects each requiring `name`, `sets`,
/// `reps`, and `notes`.
#[must_use]
pub fn workout_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A punchy, aggressive title for the workout."
            },
            "durationMinutes": {
                "type": "INTEGER",
                "description": "Estimated total duration."
            },
            "intensity": {
                "type": "STRING",
                "enum": ["Low", "Medium", "High", "Brutal"]
            },
            "exercises": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "sets": { "type": "INTEGER" },
                        "reps": { "type": "STRING" },
                        "notes": {
                            "type": "STRING",
                            "description": "Brief, direct cue on form or tempo."
                        }
                    },
                    "required": ["name", "sets", "reps", "notes"]
                }
            }
        },
        "required": ["title", "durationMinutes", "intensity", "exercises"]
    })
}

/// Coaching service over an injected LLM provider
///
/// The provider's lifecycle is owned by the composition root; the service
/// only borrows it through the `Arc`.
pub struct CoachService {
    provider: Arc<dyn LlmProvider>,
}

impl CoachService {
    /// Create a coach service with the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate a workout plan for the given parameters
    ///
    /// Interpolates the three user parameters into the fixed natural-language
    /// instruction, attaches the Momentum persona and the structured-output
    /// schema, and maps the raw payload into a locally re-validated
    /// [`WorkoutPlan`]. The failure is surfaced immediately to the caller;
    /// there is no retry.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, an empty payload, a payload
    /// that is not well-formed JSON, or a payload violating the schema.
    #[instrument(skip(self, params), fields(provider = %self.provider.name()))]
    pub async fn generate_workout(&self, params: &RequestParameters) -> AppResult<WorkoutPlan> {
        params.validate()?;

        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::workout_system_prompt()),
            ChatMessage::user(build_workout_prompt(params)),
        ])
        .with_response_schema(workout_plan_schema());

        let response = self.provider.complete(&request).await?;
        let plan = parse_plan(&response.content)?;

        debug!(
            title = %plan.title,
            duration_minutes = plan.duration_minutes,
            exercises = plan.exercises.len(),
            "Generated workout plan"
        );
        Ok(plan)
    }

    /// Ask the coach a free-text question
    ///
    /// Returns the model's answer verbatim. A transport failure or an empty
    /// payload degrades to a fixed fallback string instead of propagating an
    /// error.
    #[instrument(skip(self, question), fields(provider = %self.provider.name()))]
    pub async fn ask_coach(&self, question: &str) -> String {
        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::coach_system_prompt()),
            ChatMessage::user(question),
        ]);

        // The transport reports a zero-candidate response as an EmptyResponse
        // error, so the no-text fallback must cover both that and a blank part.
        match self.provider.complete(&request).await {
            Ok(response) if response.content.trim().is_empty() => {
                warn!("Coach query returned no text");
                COACH_EMPTY_FALLBACK.to_owned()
            }
            Ok(response) => response.content,
            Err(e) if e.code == ErrorCode::EmptyResponse => {
                warn!("Coach query returned no text");
                COACH_EMPTY_FALLBACK.to_owned()
            }
            Err(e) => {
                error!(error = %e, "Coach query failed");
                COACH_TRANSPORT_FALLBACK.to_owned()
            }
        }
    }
}

/// Interpolate the user parameters into the fixed generation instruction
fn build_workout_prompt(params: &RequestParameters) -> String {
    format!(
        "Create a workout plan.\n\
         Goal: {}\n\
         Time available: {}\n\
         Equipment: {}\n\
         \n\
         Tone: Aggressive, direct, elite coach. No fluff.",
        params.goal, params.time_budget, params.equipment
    )
}

/// Map a raw model payload into a validated plan
///
/// Staged: empty payload, then well-formedness, then shape, then the semantic
/// constraints serde cannot express. Non-conforming payloads are rejected,
/// never coerced.
fn parse_plan(raw: &str) -> AppResult<WorkoutPlan> {
    if raw.trim().is_empty() {
        return Err(AppError::empty_response());
    }

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::malformed_response(format!("payload is not valid JSON: {e}")))?;

    let plan: WorkoutPlan = serde_json::from_value(value).map_err(|e| {
        AppError::schema_violation(format!("payload does not match the workout schema: {e}"))
    })?;

    plan.validate()?;
    Ok(plan)
}
