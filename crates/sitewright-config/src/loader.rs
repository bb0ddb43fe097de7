// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment snapshot loader using Figment for layered merging.
//!
//! Merge order (later overrides earlier): compiled defaults, `env.toml`,
//! `env.<profile>.toml` where the profile is the value of `NODE_ENV`, then
//! the process environment restricted to the known keys. Missing files are
//! silently skipped.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::BuildEnv;

/// Environment variables the loader consumes, in figment key form.
///
/// Everything else in the process environment is ignored, so the snapshot
/// never sees unrelated variables.
pub const ENV_KEYS: &[&str] = &[
    "node_env",
    "analytics_service_account",
    "analytics_service_account_key",
    "airtable_api_key",
    "disable_source_docs",
    "disable_npm_search",
];

/// Load the environment snapshot from env files and process variables.
pub fn load_env() -> Result<BuildEnv, figment::Error> {
    build_env_figment().extract()
}

/// Load a snapshot from TOML content only (no files, no process env).
///
/// Useful for testing and explicit configuration.
pub fn load_env_from_str(toml_content: &str) -> Result<BuildEnv, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BuildEnv::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load a snapshot from a specific env file with process env overrides.
pub fn load_env_from_path(path: &Path) -> Result<BuildEnv, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BuildEnv::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for snapshot loading (exposed for
/// diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_env_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(BuildEnv::default()))
        .merge(Toml::file("env.toml"));

    // The profile variable selects an additional env file, generalizing the
    // original profile-suffixed environment file convention.
    if let Ok(profile) = std::env::var("NODE_ENV")
        && !profile.is_empty()
    {
        figment = figment.merge(Toml::file(format!("env.{profile}.toml")));
    }

    figment.merge(env_provider())
}

/// Names of the env files the current process would consult, in merge order.
pub fn env_file_names() -> Vec<String> {
    let mut names = vec!["env.toml".to_string()];
    if let Ok(profile) = std::env::var("NODE_ENV")
        && !profile.is_empty()
    {
        names.push(format!("env.{profile}.toml"));
    }
    names
}

/// Process environment provider restricted to the known keys.
///
/// Variable names are matched case-insensitively and lowercased to the
/// snapshot's field names, so `ANALYTICS_SERVICE_ACCOUNT` lands on
/// `analytics_service_account`.
fn env_provider() -> Env {
    Env::raw()
        .filter(|key| {
            ENV_KEYS
                .iter()
                .any(|known| key.as_str().eq_ignore_ascii_case(known))
        })
        .map(|key| key.as_str().to_ascii_lowercase().into())
}
