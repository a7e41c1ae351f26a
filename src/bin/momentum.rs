// ABOUTME: Momentum CLI - command-line front end for the coaching core
// ABOUTME: Generates workout plans, answers coaching questions, and checks provider health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors
//!
//! Usage:
//! ```bash
//! # Generate a workout plan
//! momentum plan --goal "Hypertrophy (Muscle Growth)" --time "45 Minutes (Standard)" --equipment "Full Gym"
//!
//! # Ask the coach a question
//! momentum ask "How heavy should I go on day one?"
//!
//! # Verify the provider is reachable and the API key is valid
//! momentum check
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use momentum_coach::coach::CoachService;
use momentum_coach::lab::{LabState, WorkoutLab, GENERATION_FAILURE_NOTICE};
use momentum_coach::llm::{GeminiProvider, LlmProvider};
use momentum_coach::logging::LoggingConfig;
use momentum_coach::models::{RequestParameters, WorkoutPlan};

#[derive(Parser)]
#[command(
    name = "momentum",
    about = "Momentum - elite AI strength and conditioning coach",
    long_about = "Command-line front end for the Momentum coaching core: structured workout generation and direct coaching answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a workout plan
    Plan {
        /// Primary objective
        #[arg(long, default_value = "Hypertrophy (Muscle Growth)")]
        goal: String,

        /// Time constraints
        #[arg(long, default_value = "45 Minutes (Standard)")]
        time: String,

        /// Available gear
        #[arg(long, default_value = "Full Gym")]
        equipment: String,
    },

    /// Ask the coach a free-text question
    Ask {
        /// The question
        question: String,
    },

    /// Check that the provider is reachable and the API key is valid
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    // Composition root: the provider is constructed once and injected into
    // the services; nothing below this point owns remote client state.
    let provider = match GeminiProvider::from_env() {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Plan {
            goal,
            time,
            equipment,
        } => run_plan(provider, goal, time, equipment).await,
        Command::Ask { question } => {
            let coach = CoachService::new(provider);
            println!("{}", coach.ask_coach(&question).await);
            ExitCode::SUCCESS
        }
        Command::Check => run_check(provider.as_ref()).await,
    }
}

/// Drive a lab session through one generation and render the outcome
async fn run_plan(
    provider: Arc<GeminiProvider>,
    goal: String,
    time: String,
    equipment: String,
) -> ExitCode {
    let coach = CoachService::new(provider);
    let params = RequestParameters::new(goal, time, equipment);

    let mut lab = WorkoutLab::new();
    let token = lab.begin_generation();
    let result = coach.generate_workout(&params).await;
    lab.resolve(token, result);

    match lab.state() {
        LabState::Ready => {
            if let Some(plan) = lab.plan() {
                print_plan(plan);
            }
            ExitCode::SUCCESS
        }
        LabState::Idle | LabState::Loading => {
            eprintln!(
                "{}",
                lab.notification().unwrap_or(GENERATION_FAILURE_NOTICE)
            );
            ExitCode::FAILURE
        }
    }
}

async fn run_check(provider: &GeminiProvider) -> ExitCode {
    match provider.health_check().await {
        Ok(true) => {
            println!(
                "{} is reachable and the API key is valid",
                provider.display_name()
            );
            ExitCode::SUCCESS
        }
        Ok(false) => {
            eprintln!("{} rejected the API key", provider.display_name());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Render a plan the way the lab view does: title, stats line, numbered list
fn print_plan(plan: &WorkoutPlan) {
    println!("{}", plan.title.to_uppercase());
    println!(
        "{} MIN | {} INTENSITY",
        plan.duration_minutes,
        plan.intensity.as_str().to_uppercase()
    );
    println!();

    for (idx, exercise) in plan.exercises.iter().enumerate() {
        println!("{:02}  {}", idx + 1, exercise.name);
        println!("    {} SETS x {}", exercise.sets, exercise.reps);
        if !exercise.notes.is_empty() {
            println!("    {}", exercise.notes);
        }
    }
}
