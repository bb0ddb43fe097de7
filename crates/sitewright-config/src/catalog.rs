// SPDX-FileCopyrightText: 2026 Sitewright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static plugin catalog for the site.
//!
//! Returns the hand-written, ordered descriptor list and site metadata.
//! Everything here is pure data; the environment-gated descriptors are
//! appended by the assembler. Paths are site-root-relative strings, resolved
//! by the build framework.

use serde_json::json;
use sitewright_core::{PluginDescriptor, SiteMetadata};

/// Google Analytics identifiers shared by the tracking plugin and the
/// analytics-driven prefetch plugin.
#[derive(Debug, Clone, Copy)]
pub struct GoogleAnalytics {
    /// Tracking property identifier.
    pub identifier: &'static str,
    /// Reporting view used for historical page-view queries.
    pub view_id: &'static str,
}

/// The site's Google Analytics property.
pub const GA: GoogleAnalytics = GoogleAnalytics {
    identifier: "UA-93349937-5",
    view_id: "176383508",
};

/// Blog RSS feed query, evaluated by the feed plugin at build time.
const BLOG_FEED_QUERY: &str = r#"
{
  allMdx(
    sort: { order: DESC, fields: [frontmatter___date] }
    limit: 10,
    filter: {
      fields: { section: { eq: "blog" }, released: { eq: true } }
    }
  ) {
    nodes {
      html
      frontmatter {
        title
        date
        author {
          id
        }
      }
      fields {
        excerpt
        slug
      }
    }
  }
}
"#;

/// Static descriptive fields exposed to templates and feed generators.
pub fn site_metadata() -> SiteMetadata {
    SiteMetadata {
        title: "GatsbyJS".to_string(),
        site_url: "https://www.gatsbyjs.org".to_string(),
        description: "Blazing fast modern site generator for React".to_string(),
        twitter: "@gatsbyjs".to_string(),
    }
}

/// The ordered static plugin list.
///
/// `npm_keywords` parameterizes the package-search source; the assembler
/// picks the reduced or default keyword set from the environment snapshot.
/// Order matters: transformation plugins later in the list consume node
/// types created by sources earlier in it.
pub fn static_plugins(npm_keywords: &[&str]) -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor::bare("gatsby-plugin-theme-ui"),
        PluginDescriptor::with_options(
            "gatsby-alias-imports",
            json!({
                // Relative imports from MDX break translated docs; components
                // are addressed through an alias instead.
                "aliases": {
                    "@components": "src/components",
                },
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-source-npm-package-search",
            json!({ "keywords": npm_keywords }),
        ),
        PluginDescriptor::with_options(
            "gatsby-source-filesystem",
            json!({
                "name": "guidelines",
                "path": "src/data/guidelines",
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-plugin-typography",
            json!({ "pathToConfigModule": "src/utils/typography" }),
        ),
        PluginDescriptor::bare("gatsby-transformer-documentationjs"),
        PluginDescriptor::bare("gatsby-transformer-yaml"),
        PluginDescriptor::with_options(
            "gatsby-source-filesystem",
            json!({ "path": "src/data/diagram" }),
        ),
        PluginDescriptor::with_options(
            "gatsby-source-filesystem",
            json!({ "path": "src/assets" }),
        ),
        PluginDescriptor::with_options(
            "gatsby-plugin-mdx",
            json!({
                "extensions": [".md", ".mdx"],
                "gatsbyRemarkPlugins": [
                    "gatsby-remark-embedder",
                    "gatsby-remark-graphviz",
                    {
                        "resolve": "gatsby-remark-images",
                        "options": {
                            "maxWidth": 786,
                            "backgroundColor": "#ffffff",
                        },
                    },
                    {
                        "resolve": "gatsby-remark-responsive-iframe",
                        "options": {
                            "wrapperStyle": "margin-bottom: 1.5rem",
                        },
                    },
                    {
                        "resolve": "gatsby-remark-autolink-headers",
                        "options": {
                            "offsetY": 104,
                        },
                    },
                    "gatsby-remark-copy-linked-files",
                    "gatsby-remark-smartypants",
                ],
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-transformer-remark",
            json!({
                "plugins": [
                    "gatsby-remark-embedder",
                    "gatsby-remark-graphviz",
                    "gatsby-remark-code-titles",
                    {
                        "resolve": "gatsby-remark-images",
                        "options": {
                            "maxWidth": 786,
                            "backgroundColor": "#ffffff",
                        },
                    },
                    {
                        "resolve": "gatsby-remark-responsive-iframe",
                        "options": {
                            "wrapperStyle": "margin-bottom: 1.5rem",
                        },
                    },
                    {
                        "resolve": "gatsby-remark-autolink-headers",
                        "options": {
                            "offsetY": 104,
                        },
                    },
                    {
                        "resolve": "gatsby-remark-prismjs",
                        "options": {
                            "aliases": {
                                "dosini": "ini",
                                "env": "bash",
                                "es6": "js",
                                "flowchart": "none",
                                "gitignore": "none",
                                "gql": "graphql",
                                "htaccess": "apacheconf",
                                "mdx": "markdown",
                                "ml": "fsharp",
                                "styl": "stylus",
                            },
                        },
                    },
                    "gatsby-remark-copy-linked-files",
                    "gatsby-remark-smartypants",
                    // Package library READMEs still link http images.
                    "gatsby-remark-http-to-https",
                ],
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-plugin-nprogress",
            json!({
                "color": "#9D7CBF",
                "showSpinner": false,
            }),
        ),
        PluginDescriptor::bare("gatsby-plugin-emotion"),
        PluginDescriptor::bare("gatsby-transformer-sharp"),
        PluginDescriptor::bare("gatsby-plugin-sharp"),
        PluginDescriptor::bare("gatsby-plugin-catch-links"),
        PluginDescriptor::bare("gatsby-plugin-layout"),
        PluginDescriptor::with_options(
            "gatsby-plugin-manifest",
            json!({
                "name": "GatsbyJS",
                "short_name": "GatsbyJS",
                "start_url": "/",
                "background_color": "#ffffff",
                "theme_color": "#663399",
                "display": "minimal-ui",
                "icon": "src/assets/gatsby-icon.png",
            }),
        ),
        PluginDescriptor::bare("gatsby-plugin-remove-serviceworker"),
        PluginDescriptor::bare("gatsby-transformer-csv"),
        PluginDescriptor::bare("gatsby-plugin-twitter"),
        PluginDescriptor::bare("gatsby-plugin-react-helmet"),
        PluginDescriptor::bare("gatsby-plugin-sitemap"),
        PluginDescriptor::with_options(
            "gatsby-plugin-react-svg",
            json!({
                "rule": {
                    "include": "assets/(guidelines|icons|ornaments)/.*\\.svg$",
                },
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-plugin-google-analytics",
            json!({
                "trackingId": GA.identifier,
                "anonymize": true,
                "allowLinker": true,
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-plugin-feed",
            json!({
                "feeds": [
                    {
                        "title": "GatsbyJS",
                        "query": BLOG_FEED_QUERY,
                        "output": "/blog/rss.xml",
                    },
                ],
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-plugin-netlify",
            json!({
                "headers": {
                    "/*": [
                        "Referrer-Policy: strict-origin-when-cross-origin",
                        "Clear-Site-Data: \"cache\", \"storage\"",
                    ],
                    "/sw.js": [
                        "Cache-Control: max-age=0,no-cache,no-store,must-revalidate",
                    ],
                },
            }),
        ),
        PluginDescriptor::bare("gatsby-plugin-netlify-cache"),
        PluginDescriptor::with_options(
            "gatsby-plugin-mailchimp",
            json!({
                "endpoint": "https://gatsbyjs.us17.list-manage.com/subscribe/post?u=1dc33f19eb115f7ebe4afe5ee&amp;id=f366064ba7",
            }),
        ),
        PluginDescriptor::with_options(
            "gatsby-transformer-screenshot",
            json!({ "nodeTypes": ["StartersYaml"] }),
        ),
    ]
}
