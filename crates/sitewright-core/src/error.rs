// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Sitewright configuration assembly.

use thiserror::Error;

/// The primary error type for core operations and coarse-grained callers.
///
/// The config crate carries its own diagnostic error type with source spans
/// and help text; `SitewrightError` is the flat form handed to callers that
/// only need a message, such as the build framework's config entry point.
#[derive(Debug, Error)]
pub enum SitewrightError {
    /// Configuration errors (invalid snapshot values, missing companion variables).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to serialize the assembled configuration for the build framework.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
