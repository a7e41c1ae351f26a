// ABOUTME: Unit tests for the workout plan data model
// ABOUTME: Tests wire-exact serialization, the intensity enumeration, and local re-validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

#![allow(missing_docs)]

use std::str::FromStr;

use momentum_coach::errors::ErrorCode;
use momentum_coach::models::{Exercise, Intensity, RequestParameters, WorkoutPlan};
use serde_json::json;

fn sample_plan() -> WorkoutPlan {
    WorkoutPlan {
        title: "Iron Protocol".to_owned(),
        duration_minutes: 45,
        intensity: Intensity::High,
        exercises: vec![
            Exercise {
                name: "Back Squat".to_owned(),
                sets: 5,
                reps: "5".to_owned(),
                notes: "Brace hard. Sit between your hips.".to_owned(),
            },
            Exercise {
                name: "Push Press".to_owned(),
                sets: 4,
                reps: "AMRAP".to_owned(),
                notes: String::new(),
            },
        ],
    }
}

// ============================================================================
// Intensity Tests
// ============================================================================

#[test]
fn test_intensity_has_exactly_four_values() {
    assert_eq!(Intensity::ALL.len(), 4);
    let wire: Vec<&str> = Intensity::ALL.iter().map(Intensity::as_str).collect();
    assert_eq!(wire, vec!["Low", "Medium", "High", "Brutal"]);
}

#[test]
fn test_intensity_wire_serialization() {
    for intensity in Intensity::ALL {
        let value = serde_json::to_value(intensity).unwrap();
        assert_eq!(value, json!(intensity.as_str()));
    }
}

#[test]
fn test_intensity_from_str() {
    assert_eq!(Intensity::from_str("Brutal").unwrap(), Intensity::Brutal);
    let error = Intensity::from_str("Extreme").expect_err("not in the enumeration");
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// WorkoutPlan Serialization Tests
// ============================================================================

#[test]
fn test_plan_round_trip_reproduces_every_field() {
    let plan = sample_plan();
    let serialized = serde_json::to_string(&plan).unwrap();
    let parsed: WorkoutPlan = serde_json::from_str(&serialized).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn test_plan_uses_camel_case_wire_names() {
    let serialized = serde_json::to_string(&sample_plan()).unwrap();
    assert!(serialized.contains("\"durationMinutes\":45"));
    assert!(!serialized.contains("duration_minutes"));
}

#[test]
fn test_plan_preserves_exercise_order() {
    let payload = json!({
        "title": "Order Check",
        "durationMinutes": 30,
        "intensity": "Low",
        "exercises": [
            { "name": "A", "sets": 3, "reps": "10", "notes": "" },
            { "name": "B", "sets": 3, "reps": "10", "notes": "" },
            { "name": "C", "sets": 3, "reps": "10", "notes": "" }
        ]
    });
    let plan: WorkoutPlan = serde_json::from_value(payload).unwrap();
    let names: Vec<&str> = plan.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_plan_rejects_sets_as_text() {
    // Reject, never coerce: a textual `sets` fails at the type level
    let payload = json!({
        "title": "Bad Types",
        "durationMinutes": 30,
        "intensity": "Low",
        "exercises": [
            { "name": "Row", "sets": "3", "reps": "10", "notes": "" }
        ]
    });
    assert!(serde_json::from_value::<WorkoutPlan>(payload).is_err());
}

#[test]
fn test_plan_rejects_unknown_intensity() {
    let payload = json!({
        "title": "Bad Enum",
        "durationMinutes": 30,
        "intensity": "Savage",
        "exercises": []
    });
    assert!(serde_json::from_value::<WorkoutPlan>(payload).is_err());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_zero_exercises_is_valid() {
    let plan = WorkoutPlan {
        exercises: Vec::new(),
        ..sample_plan()
    };
    assert!(plan.validate().is_ok());
    assert!(plan.exercises.is_empty());
}

#[test]
fn test_validate_rejects_empty_title() {
    let plan = WorkoutPlan {
        title: "   ".to_owned(),
        ..sample_plan()
    };
    let error = plan.validate().expect_err("blank title");
    assert_eq!(error.code, ErrorCode::SchemaViolation);
}

#[test]
fn test_validate_rejects_zero_duration() {
    let plan = WorkoutPlan {
        duration_minutes: 0,
        ..sample_plan()
    };
    let error = plan.validate().expect_err("zero duration");
    assert_eq!(error.code, ErrorCode::SchemaViolation);
}

#[test]
fn test_validate_rejects_zero_sets() {
    let mut plan = sample_plan();
    plan.exercises[0].sets = 0;
    let error = plan.validate().expect_err("zero sets");
    assert_eq!(error.code, ErrorCode::SchemaViolation);
    assert!(error.message.contains("Back Squat"));
}

#[test]
fn test_validate_rejects_unnamed_exercise() {
    let mut plan = sample_plan();
    plan.exercises[1].name = String::new();
    let error = plan.validate().expect_err("empty exercise name");
    assert_eq!(error.code, ErrorCode::SchemaViolation);
}

// ============================================================================
// RequestParameters Tests
// ============================================================================

#[test]
fn test_request_parameters_accepts_free_text() {
    let params = RequestParameters::new("Fat Loss (Metabolic)", "30 mins", "Bodyweight only");
    assert!(params.validate().is_ok());
}

#[test]
fn test_request_parameters_rejects_empty_field() {
    let params = RequestParameters::new("Hypertrophy", "  ", "Full Gym");
    let error = params.validate().expect_err("blank time budget");
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("timeBudget"));
}
