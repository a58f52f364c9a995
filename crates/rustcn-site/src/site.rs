//! Root site configuration and its assembler.
//!
//! [`build_config`] returns a fresh [`SiteConfig`] on every call. Apart from
//! the section providers it only uses literal values, so two calls produce
//! equal configurations.
//!
//! # Example
//!
//! ```
//! let config = rustcn_site::build_config()?;
//! assert_eq!(config.title, "Rust中文");
//! assert_eq!(config.theme_config.sidebar.len(), 15);
//! # Ok::<(), rustcn_site::SectionError>(())
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::head::{HeadTag, default_head};
use crate::nav::{NavItem, default_nav};
use crate::section::{SectionError, SectionTable};
use crate::sidebar::SidebarRegistry;

/// Parent theme the site extends.
pub const DEFAULT_THEME: &str = "@vuepress/theme-default";

/// Complete configuration handed to the site generator.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Theme identifier.
    pub extend: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Extra `<head>` elements in render order.
    pub head: Vec<HeadTag>,
    /// Enabled plugins and their options.
    pub plugins: Plugins,
    /// Theme settings, navigation and sidebars.
    pub theme_config: ThemeConfig,
}

/// Theme settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// GitHub repository (`owner/name`).
    pub repo: String,
    /// Docs directory inside the repository, used for edit links.
    pub docs_dir: String,
    /// Logo path.
    pub logo: String,
    /// Show headers of every page in the sidebar.
    pub display_all_headers: bool,
    /// Show "edit this page" links.
    pub edit_links: bool,
    /// Label of the edit link.
    pub edit_link_text: String,
    /// Label shown before the last-updated timestamp.
    pub last_updated: String,
    /// Header depth extracted into the sidebar.
    pub sidebar_depth: u8,
    /// Built-in search box.
    pub search: bool,
    /// Service worker behavior.
    pub service_worker: ServiceWorkerOptions,
    /// Maximum number of search suggestions.
    pub search_max_suggestions: u32,
    /// Top navigation menu.
    pub nav: Vec<NavItem>,
    /// Route prefix to sidebar mapping.
    pub sidebar: SidebarRegistry,
}

/// Service worker behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWorkerOptions {
    /// Show a popup when new content is available.
    pub update_popup: bool,
}

/// Plugin name to options mapping, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plugins {
    entries: Vec<(String, Map<String, Value>)>,
}

impl Plugins {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a plugin with default options.
    #[must_use]
    pub fn with(mut self, name: &str) -> Self {
        self.enable(name, Map::new());
        self
    }

    /// Enable a plugin, replacing the options of an already enabled one.
    pub fn enable(&mut self, name: &str, options: Map<String, Value>) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            *existing = options;
        } else {
            self.entries.push((name.to_owned(), options));
        }
    }

    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    #[must_use]
    pub fn options(&self, name: &str) -> Option<&Map<String, Value>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| o)
    }

    /// Plugin names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Plugins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, options) in &self.entries {
            map.serialize_entry(name, options)?;
        }
        map.end()
    }
}

/// Assemble the portal configuration from the built-in section table.
///
/// # Errors
///
/// Returns the first `SectionError` raised by a section provider.
pub fn build_config() -> Result<SiteConfig, SectionError> {
    build_config_with(&SectionTable::builtin())
}

/// Assemble the portal configuration using the given section table.
///
/// # Errors
///
/// Returns the first `SectionError` raised by a section provider.
pub fn build_config_with(sections: &SectionTable) -> Result<SiteConfig, SectionError> {
    let sidebar = sections.build_sidebars()?;

    let config = SiteConfig {
        extend: DEFAULT_THEME.to_owned(),
        title: "Rust中文".to_owned(),
        description: "互助Rust爱好者,致力于Rust语言中文生态网络".to_owned(),
        head: default_head(),
        plugins: Plugins::new()
            .with("@vuepress/back-to-top")
            .with("@vuepress/pwa")
            .with("vuepress-plugin-baidu-autopush"),
        theme_config: ThemeConfig {
            repo: "rustlang-cn/rustlang-cn".to_owned(),
            docs_dir: "docs".to_owned(),
            logo: "/imgs/rust.png".to_owned(),
            display_all_headers: true,
            edit_links: true,
            edit_link_text: "在 GitHub 上编辑此页".to_owned(),
            last_updated: "上次更新".to_owned(),
            sidebar_depth: 0,
            search: true,
            service_worker: ServiceWorkerOptions { update_popup: true },
            search_max_suggestions: 11,
            nav: default_nav(),
            sidebar,
        },
    };

    tracing::info!(
        title = %config.title,
        nav = config.theme_config.nav.len(),
        sidebars = config.theme_config.sidebar.len(),
        "Assembled site configuration"
    );

    Ok(config)
}
