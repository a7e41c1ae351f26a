// ABOUTME: Main library entry point for the Momentum coaching core
// ABOUTME: Exposes the plan generation service, coaching query, and session state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

#![deny(unsafe_code)]

//! # Momentum Coach
//!
//! Core library for Momentum, an AI strength and conditioning coach. It owns
//! the structured-generation request/response cycle against Google's
//! Generative Language API: the schema that constrains the model's output and
//! the mapping from raw model payloads into the application data model.
//!
//! ## Architecture
//!
//! - **`llm`**: provider abstraction and the Gemini transport
//! - **`coach`**: plan generation service and the schema-free coaching query
//! - **`models`**: workout plan data model with local schema re-validation
//! - **`lab`**: session state machine for the requesting view
//!
//! The remote client is never a module-level singleton: the composition root
//! (the `momentum` binary, or your own) constructs one provider and injects
//! it into the services.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use momentum_coach::coach::CoachService;
//! use momentum_coach::errors::AppResult;
//! use momentum_coach::llm::GeminiProvider;
//! use momentum_coach::models::RequestParameters;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let provider = Arc::new(GeminiProvider::from_env()?);
//!     let coach = CoachService::new(provider);
//!
//!     let params = RequestParameters::new("Hypertrophy", "45 mins", "Full Gym");
//!     let plan = coach.generate_workout(&params).await?;
//!     println!("{} ({} min)", plan.title, plan.duration_minutes);
//!     Ok(())
//! }
//! ```

/// Plan generation service and schema-free coaching query
pub mod coach;

/// Environment-driven configuration
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Workout session state machine
pub mod lab;

/// LLM provider abstraction and Gemini transport
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Core data models for workout plans and request parameters
pub mod models;
