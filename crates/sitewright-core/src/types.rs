// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model for the assembled site configuration.
//!
//! A [`SiteConfig`] is what the build framework reads at startup: static
//! descriptive metadata plus an ordered plugin list. Descriptors are opaque
//! to the assembler; options bags are plugin-specific JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SitewrightError;

/// A named reference to a build-time plugin, optionally paired with options.
///
/// Serializes in the framework's wire convention: a bare descriptor is a
/// plain string, a configured one is `{"resolve": ..., "options": {...}}`.
/// Nested plugin lists inside options (remark sub-plugins and the like) are
/// plain JSON values, not recursive descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginDescriptor {
    /// Plugin referenced by name alone, no options.
    Bare(String),
    /// Plugin with an options bag.
    Configured {
        /// Mapping name the framework resolves to a plugin implementation.
        resolve: String,
        /// Plugin-specific options, untyped from the assembler's perspective.
        options: Value,
    },
}

impl PluginDescriptor {
    /// A descriptor with no options.
    pub fn bare(resolve: impl Into<String>) -> Self {
        PluginDescriptor::Bare(resolve.into())
    }

    /// A descriptor carrying an options value.
    pub fn with_options(resolve: impl Into<String>, options: Value) -> Self {
        PluginDescriptor::Configured {
            resolve: resolve.into(),
            options,
        }
    }

    /// The plugin identifier, regardless of form.
    pub fn resolve_name(&self) -> &str {
        match self {
            PluginDescriptor::Bare(name) => name,
            PluginDescriptor::Configured { resolve, .. } => resolve,
        }
    }

    /// The options value, if this descriptor carries one.
    pub fn options(&self) -> Option<&Value> {
        match self {
            PluginDescriptor::Bare(_) => None,
            PluginDescriptor::Configured { options, .. } => Some(options),
        }
    }
}

/// Static descriptive fields about the site, exposed to templates and feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    #[serde(rename = "siteUrl")]
    pub site_url: String,
    pub description: String,
    pub twitter: String,
}

/// The assembled configuration object consumed by the build framework.
///
/// Plugin order is significant: content-sourcing and transformation plugins
/// are applied in sequence, and later entries may depend on node types
/// created by earlier ones. The sequence is never reordered after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(rename = "siteMetadata")]
    pub site_metadata: SiteMetadata,
    pub plugins: Vec<PluginDescriptor>,
}

impl SiteConfig {
    /// Serialize to the pretty-printed JSON form the build framework reads.
    pub fn to_framework_json(&self) -> Result<String, SitewrightError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
