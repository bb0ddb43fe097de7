// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration assembler.
//!
//! Produces a single [`SiteConfig`] from an environment snapshot: the static
//! catalog followed by zero or more environment-gated descriptors, appended
//! in a fixed evaluation order (analytics, tabular source, docs sources).
//! Assembly performs no I/O and is deterministic for a fixed `(env, now)`
//! pair; the clock only moves the analytics reporting window, never the
//! structural shape.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use sitewright_core::{PluginDescriptor, SiteConfig};
use tracing::debug;

use crate::catalog;
use crate::diagnostic::ConfigError;
use crate::model::BuildEnv;
use crate::validation;

/// Default keyword set for the package-search source.
pub const DEFAULT_NPM_SEARCH_KEYWORDS: &[&str] = &["gatsby-plugin", "gatsby-component"];

/// Reduced keyword set used when `DISABLE_NPM_SEARCH` is set; returns far
/// fewer packages, which keeps local builds fast.
pub const REDUCED_NPM_SEARCH_KEYWORDS: &[&str] = &["lekoarts"];

/// Identifiers for the community-events table in the tabular source.
const AIRTABLE_BASE_ID: &str = "app0q5U0xkEwZaT9c";
const AIRTABLE_TABLE_NAME: &str = "Community Events Submitted";
const AIRTABLE_QUERY_NAME: &str = "CommunityEvents";

/// Lookback for the analytics reporting window.
// TODO(aot): widen back to 3 months once the prefetch plugin runs ahead of
// time instead of inside every deploy.
const ANALYTICS_LOOKBACK_DAYS: i64 = 2;

/// Assemble the site configuration from an environment snapshot.
///
/// `now` is supplied by the caller so repeated assembly under a fixed clock
/// is idempotent. The snapshot is validated first; any errors abort assembly
/// before a descriptor is built.
pub fn assemble(env: &BuildEnv, now: DateTime<Utc>) -> Result<SiteConfig, Vec<ConfigError>> {
    validation::validate_env(env)?;

    let npm_keywords = if env.npm_search_reduced() {
        debug!("DISABLE_NPM_SEARCH is set; using reduced package-search keywords");
        REDUCED_NPM_SEARCH_KEYWORDS
    } else {
        DEFAULT_NPM_SEARCH_KEYWORDS
    };

    let mut plugins = catalog::static_plugins(npm_keywords);
    plugins.extend(dynamic_plugins(env, now));

    Ok(SiteConfig {
        site_metadata: catalog::site_metadata(),
        plugins,
    })
}

/// Build the environment-gated descriptors, in their fixed evaluation order.
fn dynamic_plugins(env: &BuildEnv, now: DateTime<Utc>) -> Vec<PluginDescriptor> {
    let mut dynamic = Vec::new();

    if let (Some(account), Some(key)) = (env.analytics_account(), env.analytics_key()) {
        debug!(account, "analytics credentials present; enabling prefetch plugin");
        let start_date = now - Duration::days(ANALYTICS_LOOKBACK_DAYS);
        dynamic.push(PluginDescriptor::with_options(
            "gatsby-plugin-guess-js",
            json!({
                "GAViewID": catalog::GA.view_id,
                "jwt": {
                    "client_email": account,
                    "private_key": restore_key_newlines(key),
                },
                "period": {
                    "startDate": start_date.to_rfc3339(),
                    "endDate": now.to_rfc3339(),
                },
            }),
        ));
    }

    if let Some(api_key) = env.airtable_key() {
        debug!("AIRTABLE_API_KEY present; enabling community events source");
        dynamic.push(PluginDescriptor::with_options(
            "gatsby-source-airtable",
            json!({
                "apiKey": api_key,
                "tables": [
                    {
                        "baseId": AIRTABLE_BASE_ID,
                        "tableName": AIRTABLE_TABLE_NAME,
                        "queryName": AIRTABLE_QUERY_NAME,
                    },
                ],
            }),
        ));
    }

    if env.source_docs_enabled() {
        dynamic.push(PluginDescriptor::with_options(
            "gatsby-source-filesystem",
            json!({
                "name": "docs",
                "path": "../docs",
            }),
        ));
        // The packages directory is only used for API definitions, which are
        // part of the docs.
        dynamic.push(PluginDescriptor::with_options(
            "gatsby-source-filesystem",
            json!({
                "name": "gatsby-core",
                "path": "../packages/gatsby",
                "ignore": ["**/dist/**"],
            }),
        ));
    } else {
        debug!("DISABLE_SOURCE_DOCS is set; skipping docs filesystem sources");
    }

    dynamic
}

/// Restore literal `\n` two-character sequences in a private key to real
/// newlines. CI systems store the key single-line; inputs without the escape
/// convention pass through unchanged.
fn restore_key_newlines(key: &str) -> String {
    key.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        "2020-03-01T12:00:00Z".parse().expect("valid timestamp")
    }

    fn analytics_env() -> BuildEnv {
        BuildEnv {
            analytics_service_account: Some("deploy@project.iam".to_string()),
            analytics_service_account_key: Some("line one\\nline two".to_string()),
            ..BuildEnv::default()
        }
    }

    #[test]
    fn default_snapshot_appends_only_the_docs_sources() {
        let config = assemble(&BuildEnv::default(), fixed_now()).expect("should assemble");
        let static_list = catalog::static_plugins(DEFAULT_NPM_SEARCH_KEYWORDS);
        assert_eq!(&config.plugins[..static_list.len()], &static_list[..]);
        let appended: Vec<&str> = config.plugins[static_list.len()..]
            .iter()
            .map(PluginDescriptor::resolve_name)
            .collect();
        assert_eq!(
            appended,
            vec!["gatsby-source-filesystem", "gatsby-source-filesystem"]
        );
    }

    #[test]
    fn fully_gated_snapshot_is_exactly_the_static_list() {
        let docs_disabled = BuildEnv {
            disable_source_docs: Some("1".to_string()),
            ..BuildEnv::default()
        };
        let config = assemble(&docs_disabled, fixed_now()).expect("should assemble");
        assert_eq!(
            config.plugins,
            catalog::static_plugins(DEFAULT_NPM_SEARCH_KEYWORDS)
        );
    }

    #[test]
    fn dynamic_entries_come_after_all_static_entries() {
        let env = BuildEnv {
            airtable_api_key: Some("key-abc".to_string()),
            ..BuildEnv::default()
        };
        let config = assemble(&env, fixed_now()).expect("should assemble");
        let static_len = catalog::static_plugins(DEFAULT_NPM_SEARCH_KEYWORDS).len();

        let dynamic: Vec<&str> = config.plugins[static_len..]
            .iter()
            .map(PluginDescriptor::resolve_name)
            .collect();
        assert_eq!(
            dynamic,
            vec![
                "gatsby-source-airtable",
                "gatsby-source-filesystem",
                "gatsby-source-filesystem",
            ]
        );
    }

    #[test]
    fn analytics_precedes_airtable_in_dynamic_order() {
        let env = BuildEnv {
            airtable_api_key: Some("key-abc".to_string()),
            ..analytics_env()
        };
        let dynamic = dynamic_plugins(&env, fixed_now());
        let names: Vec<&str> = dynamic.iter().map(PluginDescriptor::resolve_name).collect();
        assert_eq!(
            names,
            vec![
                "gatsby-plugin-guess-js",
                "gatsby-source-airtable",
                "gatsby-source-filesystem",
                "gatsby-source-filesystem",
            ]
        );
    }

    #[test]
    fn airtable_descriptor_carries_key_and_table() {
        let env = BuildEnv {
            airtable_api_key: Some("key-abc".to_string()),
            disable_source_docs: Some("1".to_string()),
            ..BuildEnv::default()
        };
        let dynamic = dynamic_plugins(&env, fixed_now());
        assert_eq!(dynamic.len(), 1);
        let options = dynamic[0].options().expect("has options");
        assert_eq!(options["apiKey"], "key-abc");
        assert_eq!(options["tables"][0]["baseId"], AIRTABLE_BASE_ID);
        assert_eq!(options["tables"][0]["tableName"], AIRTABLE_TABLE_NAME);
        assert_eq!(options["tables"][0]["queryName"], AIRTABLE_QUERY_NAME);
    }

    #[test]
    fn docs_sources_are_named_and_scoped() {
        let dynamic = dynamic_plugins(&BuildEnv::default(), fixed_now());
        assert_eq!(dynamic.len(), 2);
        let docs = dynamic[0].options().expect("has options");
        assert_eq!(docs["name"], "docs");
        assert_eq!(docs["path"], "../docs");
        let core = dynamic[1].options().expect("has options");
        assert_eq!(core["name"], "gatsby-core");
        assert_eq!(core["ignore"], serde_json::json!(["**/dist/**"]));
    }

    #[test]
    fn analytics_window_is_two_days_ending_now() {
        let dynamic = dynamic_plugins(&analytics_env(), fixed_now());
        let period = &dynamic[0].options().expect("has options")["period"];
        assert_eq!(period["startDate"], "2020-02-28T12:00:00+00:00");
        assert_eq!(period["endDate"], "2020-03-01T12:00:00+00:00");
    }

    #[test]
    fn private_key_newlines_are_restored() {
        let dynamic = dynamic_plugins(&analytics_env(), fixed_now());
        let jwt = &dynamic[0].options().expect("has options")["jwt"];
        assert_eq!(jwt["client_email"], "deploy@project.iam");
        assert_eq!(jwt["private_key"], "line one\nline two");
    }

    #[test]
    fn key_without_escapes_passes_through_unchanged() {
        assert_eq!(restore_key_newlines("already\nmultiline"), "already\nmultiline");
        assert_eq!(restore_key_newlines("no escapes at all"), "no escapes at all");
        assert_eq!(restore_key_newlines("a\\nb\\nc"), "a\nb\nc");
    }

    #[test]
    fn unpaired_analytics_account_aborts_assembly() {
        let env = BuildEnv {
            analytics_service_account: Some("deploy@project.iam".to_string()),
            ..BuildEnv::default()
        };
        let errors = assemble(&env, fixed_now()).unwrap_err();
        assert!(matches!(
            &errors[0],
            ConfigError::MissingCompanion { missing, .. }
                if missing == "ANALYTICS_SERVICE_ACCOUNT_KEY"
        ));
    }

    #[test]
    fn assembly_is_idempotent_under_a_fixed_clock() {
        let env = BuildEnv {
            airtable_api_key: Some("key-abc".to_string()),
            ..analytics_env()
        };
        let first = assemble(&env, fixed_now()).expect("should assemble");
        let second = assemble(&env, fixed_now()).expect("should assemble");
        assert_eq!(first, second);
    }

    #[test]
    fn npm_keyword_selection_follows_disable_flag() {
        let reduced_env = BuildEnv {
            disable_npm_search: Some("true".to_string()),
            ..BuildEnv::default()
        };
        for (env, expected) in [
            (BuildEnv::default(), serde_json::json!(["gatsby-plugin", "gatsby-component"])),
            (reduced_env, serde_json::json!(["lekoarts"])),
        ] {
            let config = assemble(&env, fixed_now()).expect("should assemble");
            let search = config
                .plugins
                .iter()
                .find(|p| p.resolve_name() == "gatsby-source-npm-package-search")
                .expect("package search descriptor present");
            assert_eq!(search.options().expect("has options")["keywords"], expected);
        }
    }
}
