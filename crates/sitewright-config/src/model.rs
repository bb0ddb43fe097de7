// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment snapshot model for configuration assembly.
//!
//! `BuildEnv` uses `#[serde(deny_unknown_fields)]` so unrecognized keys in
//! environment TOML files are rejected at load time with actionable errors.
//! Process environment variables are filtered to the known keys before
//! merging, so stray variables never reach deserialization.

use serde::{Deserialize, Serialize};

/// Snapshot of the build-relevant environment, taken once at config load.
///
/// Every field is independently optional; absence of a variable silently
/// skips the feature it gates. Presence with an empty value counts as unset,
/// so `DISABLE_NPM_SEARCH=""` behaves the same as the variable missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BuildEnv {
    /// Deployment profile (`NODE_ENV`); selects which env file is merged.
    #[serde(default)]
    pub node_env: Option<String>,

    /// Analytics service account identifier (`ANALYTICS_SERVICE_ACCOUNT`).
    #[serde(default)]
    pub analytics_service_account: Option<String>,

    /// Analytics service account private key (`ANALYTICS_SERVICE_ACCOUNT_KEY`).
    /// May carry literal `\n` escape sequences in place of real newlines.
    #[serde(default)]
    pub analytics_service_account_key: Option<String>,

    /// API key for the tabular event source (`AIRTABLE_API_KEY`).
    #[serde(default)]
    pub airtable_api_key: Option<String>,

    /// Disable flag for the documentation filesystem sources
    /// (`DISABLE_SOURCE_DOCS`).
    #[serde(default)]
    pub disable_source_docs: Option<String>,

    /// Disable flag for the full package-search keyword set
    /// (`DISABLE_NPM_SEARCH`).
    #[serde(default)]
    pub disable_npm_search: Option<String>,
}

impl BuildEnv {
    /// The analytics service account, when set to a non-empty value.
    pub fn analytics_account(&self) -> Option<&str> {
        non_empty(&self.analytics_service_account)
    }

    /// The analytics private key, when set to a non-empty value.
    pub fn analytics_key(&self) -> Option<&str> {
        non_empty(&self.analytics_service_account_key)
    }

    /// The tabular source API key, when set to a non-empty value.
    pub fn airtable_key(&self) -> Option<&str> {
        non_empty(&self.airtable_api_key)
    }

    /// True when the analytics descriptor should be appended.
    pub fn analytics_enabled(&self) -> bool {
        self.analytics_account().is_some()
    }

    /// True when the tabular source descriptor should be appended.
    pub fn airtable_enabled(&self) -> bool {
        self.airtable_key().is_some()
    }

    /// True unless `DISABLE_SOURCE_DOCS` is set.
    pub fn source_docs_enabled(&self) -> bool {
        non_empty(&self.disable_source_docs).is_none()
    }

    /// True when `DISABLE_NPM_SEARCH` is set, selecting the reduced
    /// package-search keyword list.
    pub fn npm_search_reduced(&self) -> bool {
        non_empty(&self.disable_npm_search).is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_env_enables_nothing_optional() {
        let env = BuildEnv::default();
        assert!(!env.analytics_enabled());
        assert!(!env.airtable_enabled());
        assert!(env.source_docs_enabled());
        assert!(!env.npm_search_reduced());
    }

    #[test]
    fn empty_string_counts_as_unset() {
        let env = BuildEnv {
            airtable_api_key: Some(String::new()),
            disable_npm_search: Some(String::new()),
            disable_source_docs: Some(String::new()),
            ..BuildEnv::default()
        };
        assert!(!env.airtable_enabled());
        assert!(!env.npm_search_reduced());
        assert!(env.source_docs_enabled());
    }

    #[test]
    fn snapshot_rejects_unknown_keys() {
        let toml_str = r#"
node_env = "test"
airtable_key = "wrong name"
"#;
        let result = toml::from_str::<BuildEnv>(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn snapshot_parses_known_keys() {
        let toml_str = r#"
analytics_service_account = "deploy@project.iam"
analytics_service_account_key = "key"
"#;
        let env: BuildEnv = toml::from_str(toml_str).unwrap();
        assert!(env.analytics_enabled());
        assert_eq!(env.analytics_key(), Some("key"));
    }

    #[test]
    fn disable_flags_are_presence_based_not_boolean_parsed() {
        // Any non-empty value counts, including "false".
        let env = BuildEnv {
            disable_source_docs: Some("false".to_string()),
            disable_npm_search: Some("1".to_string()),
            ..BuildEnv::default()
        };
        assert!(!env.source_docs_enabled());
        assert!(env.npm_search_reduced());
    }
}
