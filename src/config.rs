// ABOUTME: Environment-driven configuration for model selection
// ABOUTME: Defines LlmModelConfig with a MOMENTUM_MODEL override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Coach Contributors

//! # Configuration
//!
//! Environment-only configuration. The single credential (`GEMINI_API_KEY`)
//! is read once when the provider is constructed; its absence is not
//! re-checked per request.

use std::env;

use serde::{Deserialize, Serialize};

/// Default Gemini model when no override is configured
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Model selection for the LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmModelConfig {
    /// Model used for all requests unless overridden per request
    pub default_model: String,
}

impl LlmModelConfig {
    /// Environment variable for model selection
    pub const MODEL_ENV_VAR: &'static str = "MOMENTUM_MODEL";

    /// Load the model configuration from the environment
    ///
    /// Reads `MOMENTUM_MODEL`; an unset or empty value falls back to
    /// [`DEFAULT_GEMINI_MODEL`].
    #[must_use]
    pub fn from_env() -> Self {
        let default_model = env::var(Self::MODEL_ENV_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_owned());
        Self { default_model }
    }
}

impl Default for LlmModelConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_GEMINI_MODEL.to_owned(),
        }
    }
}
