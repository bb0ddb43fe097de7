// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration assembly for the Sitewright build pipeline.
//!
//! Reads an environment snapshot (env TOML files plus a fixed set of process
//! variables), validates it, and assembles the site configuration the build
//! framework consumes: static site metadata plus an ordered plugin list with
//! zero or more environment-gated descriptors appended. Errors render as
//! Elm-style diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! let config = sitewright_config::load_and_assemble().expect("config errors");
//! println!("{} plugins configured", config.plugins.len());
//! ```

pub mod assembler;
pub mod catalog;
pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use chrono::Utc;
use sitewright_core::{SiteConfig, SitewrightError};

pub use assembler::{DEFAULT_NPM_SEARCH_KEYWORDS, REDUCED_NPM_SEARCH_KEYWORDS, assemble};
pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_env, load_env_from_path, load_env_from_str};
pub use model::BuildEnv;

/// Load the environment snapshot and assemble the site configuration.
///
/// This is the high-level entry point that:
/// 1. Loads the snapshot from env files + process vars via Figment
/// 2. On success: validates the snapshot and assembles against the current
///    UTC time
/// 3. On Figment error: converts to rich miette diagnostics with typo
///    suggestions
///
/// Returns either an assembled [`SiteConfig`] or a list of diagnostic errors.
pub fn load_and_assemble() -> Result<SiteConfig, Vec<ConfigError>> {
    match loader::load_env() {
        Ok(env) => assembler::assemble(&env, Utc::now()),
        Err(err) => {
            // Read env source files for error source span information.
            let env_sources = collect_env_sources();
            Err(diagnostic::figment_to_config_errors(err, &env_sources))
        }
    }
}

/// Assemble from a specific snapshot TOML string.
///
/// Useful for testing and explicit configuration.
pub fn load_and_assemble_str(toml_content: &str) -> Result<SiteConfig, Vec<ConfigError>> {
    match loader::load_env_from_str(toml_content) {
        Ok(env) => assembler::assemble(&env, Utc::now()),
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// The framework-facing entry point: assembled configuration as JSON.
///
/// Diagnostics are collapsed into the flat workspace error; callers that
/// want rendered reports should use [`load_and_assemble`] and
/// [`render_errors`] instead.
pub fn export_config_json() -> Result<String, SitewrightError> {
    let config = load_and_assemble().map_err(|errors| diagnostic::flatten_errors(&errors))?;
    config.to_framework_json()
}

/// Collect env source file contents for error span resolution.
fn collect_env_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    for name in loader::env_file_names() {
        if let Ok(content) = std::fs::read_to_string(&name) {
            let path = std::env::current_dir()
                .map(|d| d.join(&name).display().to_string())
                .unwrap_or_else(|_| name.clone());
            sources.push((path, content));
        }
    }

    sources
}
