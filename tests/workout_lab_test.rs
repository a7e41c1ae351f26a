// ABOUTME: Tests for the workout session state machine
// ABOUTME: Covers state transitions, idempotent discard, and the stale-token guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

#![allow(missing_docs)]

use momentum_coach::errors::AppError;
use momentum_coach::lab::{LabState, WorkoutLab, GENERATION_FAILURE_NOTICE};
use momentum_coach::models::{Intensity, WorkoutPlan};

fn sample_plan() -> WorkoutPlan {
    WorkoutPlan {
        title: "Engine Builder".to_owned(),
        duration_minutes: 30,
        intensity: Intensity::Medium,
        exercises: Vec::new(),
    }
}

// ============================================================================
// Transition Tests
// ============================================================================

#[test]
fn test_new_lab_starts_idle() {
    let lab = WorkoutLab::new();
    assert_eq!(lab.state(), LabState::Idle);
    assert!(lab.plan().is_none());
    assert!(lab.notification().is_none());
}

#[test]
fn test_begin_generation_enters_loading() {
    let mut lab = WorkoutLab::new();
    lab.begin_generation();
    assert_eq!(lab.state(), LabState::Loading);
    assert!(lab.plan().is_none());
}

#[test]
fn test_success_transitions_loading_to_ready() {
    let mut lab = WorkoutLab::new();
    let token = lab.begin_generation();

    assert!(lab.resolve(token, Ok(sample_plan())));
    assert_eq!(lab.state(), LabState::Ready);
    assert_eq!(lab.plan().unwrap().title, "Engine Builder");
    assert!(lab.notification().is_none());
}

#[test]
fn test_failure_transitions_loading_to_idle_with_notification() {
    let mut lab = WorkoutLab::new();
    let token = lab.begin_generation();

    assert!(lab.resolve(token, Err(AppError::empty_response())));
    assert_eq!(lab.state(), LabState::Idle);
    assert!(lab.plan().is_none());
    assert_eq!(lab.notification(), Some(GENERATION_FAILURE_NOTICE));
}

#[test]
fn test_regenerate_clears_plan_optimistically() {
    let mut lab = WorkoutLab::new();
    let token = lab.begin_generation();
    lab.resolve(token, Ok(sample_plan()));
    assert_eq!(lab.state(), LabState::Ready);

    // The existing plan is dropped before the new request resolves
    lab.begin_generation();
    assert_eq!(lab.state(), LabState::Loading);
    assert!(lab.plan().is_none());
}

#[test]
fn test_begin_generation_clears_previous_notification() {
    let mut lab = WorkoutLab::new();
    let token = lab.begin_generation();
    lab.resolve(token, Err(AppError::empty_response()));
    assert!(lab.notification().is_some());

    lab.begin_generation();
    assert!(lab.notification().is_none());
}

// ============================================================================
// Discard Tests
// ============================================================================

#[test]
fn test_discard_transitions_ready_to_idle() {
    let mut lab = WorkoutLab::new();
    let token = lab.begin_generation();
    lab.resolve(token, Ok(sample_plan()));

    lab.discard();
    assert_eq!(lab.state(), LabState::Idle);
    assert!(lab.plan().is_none());
}

#[test]
fn test_discard_is_idempotent() {
    let mut lab = WorkoutLab::new();
    lab.discard();
    assert_eq!(lab.state(), LabState::Idle);

    let token = lab.begin_generation();
    lab.resolve(token, Ok(sample_plan()));
    lab.discard();
    lab.discard();
    assert_eq!(lab.state(), LabState::Idle);
}

// ============================================================================
// Stale-Token Guard Tests
// ============================================================================

#[test]
fn test_stale_result_is_ignored() {
    let mut lab = WorkoutLab::new();
    let first = lab.begin_generation();
    let second = lab.begin_generation();

    // The first request resolved after being superseded: ignored entirely
    assert!(!lab.resolve(first, Ok(sample_plan())));
    assert_eq!(lab.state(), LabState::Loading);
    assert!(lab.plan().is_none());

    // The current request still applies normally
    assert!(lab.resolve(second, Ok(sample_plan())));
    assert_eq!(lab.state(), LabState::Ready);
}

#[test]
fn test_stale_failure_does_not_notify() {
    let mut lab = WorkoutLab::new();
    let first = lab.begin_generation();
    let second = lab.begin_generation();

    assert!(!lab.resolve(first, Err(AppError::empty_response())));
    assert!(lab.notification().is_none());
    assert_eq!(lab.state(), LabState::Loading);

    assert!(lab.resolve(second, Ok(sample_plan())));
    assert_eq!(lab.state(), LabState::Ready);
}
