// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Sitewright site configuration assembly.
//!
//! This crate provides the data model shared across the workspace: plugin
//! descriptors, site metadata, the assembled [`SiteConfig`], and the flat
//! error type. The assembly logic itself lives in `sitewright-config`.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SitewrightError;
pub use types::{PluginDescriptor, SiteConfig, SiteMetadata};
