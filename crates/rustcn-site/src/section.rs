//! Documentation section providers and the section table.
//!
//! Every documentation section (a book, a crate guide, a blog archive) is a
//! [`SidebarSectionProvider`]. The [`SectionTable`] lists which provider
//! serves which route prefix and with which display label. Building the
//! sidebars calls every provider exactly once, in table order.

use crate::sections;
use crate::sidebar::{Sidebar, SidebarRegistry};

/// Produces the sidebar for one documentation section.
pub trait SidebarSectionProvider {
    /// Stable provider name (e.g., "book", "`tokio_blog`").
    fn name(&self) -> &str;

    /// Build the sidebar, using `label` as the display label for the section.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::Provider` if the sidebar cannot be produced.
    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError>;
}

/// Error raised while building section sidebars.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    /// A provider failed to produce its sidebar.
    #[error("Section '{section}' failed: {message}")]
    Provider {
        /// Provider name.
        section: String,
        /// Failure description.
        message: String,
    },
    /// Two table entries claim the same route prefix.
    #[error("Route prefix registered twice: {0}")]
    DuplicatePrefix(String),
}

/// One row of the section table.
pub struct SectionEntry {
    /// Route prefix the sidebar is shown under (leading and trailing slash).
    pub route_prefix: String,
    /// Display label passed to the provider.
    pub label: String,
    /// Provider that builds the sidebar.
    pub provider: Box<dyn SidebarSectionProvider>,
}

impl std::fmt::Debug for SectionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionEntry")
            .field("route_prefix", &self.route_prefix)
            .field("label", &self.label)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Explicit, ordered table of documentation sections.
#[derive(Debug, Default)]
pub struct SectionTable {
    entries: Vec<SectionEntry>,
}

impl SectionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every section of the portal, in sidebar declaration order.
    #[must_use]
    pub fn builtin() -> Self {
        let rows: Vec<(&str, &str, Box<dyn SidebarSectionProvider>)> = vec![
            ("/office/rust/book/", "Rust", Box::new(sections::Book)),
            ("/office/rust/advrust/", "AdvRust", Box::new(sections::AdvRust)),
            ("/office/rust/async-rust/", "Async-Rust", Box::new(sections::AsyncRust)),
            ("/office/rust/reference/", "Reference", Box::new(sections::Reference)),
            ("/office/rust/cargo/", "Cargo", Box::new(sections::Cargo)),
            ("/office/iot/discovery/", "Discovery", Box::new(sections::Discovery)),
            ("/crates/tokio/docs/", "Tokio", Box::new(sections::Tokio)),
            ("/crates/actix/actix/", "Actix", Box::new(sections::Actix)),
            ("/crates/actix/actix-web/", "Actix-Web", Box::new(sections::ActixWeb)),
            ("/crates/diesel/", "Diesel", Box::new(sections::Diesel)),
            ("/crates/riker/", "Riker", Box::new(sections::Riker)),
            ("/crates/serde/", "Serde", Box::new(sections::Serde)),
            ("/www/", "www", Box::new(sections::Www)),
            ("/crates/tokio/blog/", "tokio_blog", Box::new(sections::TokioBlog)),
            ("/users/book-exp/", "book_exp", Box::new(sections::BookExp)),
        ];

        Self {
            entries: rows
                .into_iter()
                .map(|(route_prefix, label, provider)| SectionEntry {
                    route_prefix: route_prefix.to_owned(),
                    label: label.to_owned(),
                    provider,
                })
                .collect(),
        }
    }

    /// Append a section.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::DuplicatePrefix` if the prefix is already taken.
    pub fn register(
        &mut self,
        route_prefix: &str,
        label: &str,
        provider: Box<dyn SidebarSectionProvider>,
    ) -> Result<(), SectionError> {
        if self.get(route_prefix).is_some() {
            return Err(SectionError::DuplicatePrefix(route_prefix.to_owned()));
        }
        self.entries.push(SectionEntry {
            route_prefix: route_prefix.to_owned(),
            label: label.to_owned(),
            provider,
        });
        Ok(())
    }

    /// Remove the section registered under a route prefix.
    pub fn unregister(&mut self, route_prefix: &str) -> Option<SectionEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.route_prefix == route_prefix)?;
        Some(self.entries.remove(idx))
    }

    #[must_use]
    pub fn get(&self, route_prefix: &str) -> Option<&SectionEntry> {
        self.entries.iter().find(|e| e.route_prefix == route_prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionEntry> {
        self.entries.iter()
    }

    /// Route prefixes in table order.
    pub fn route_prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.route_prefix.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the sidebar registry by calling every provider once.
    ///
    /// Providers run in table order. The first failure aborts the build and
    /// no partial registry is returned.
    ///
    /// # Errors
    ///
    /// Returns the first provider's `SectionError`.
    pub fn build_sidebars(&self) -> Result<SidebarRegistry, SectionError> {
        let mut registry = SidebarRegistry::new();

        for entry in &self.entries {
            let sidebar = entry.provider.sidebar(&entry.label)?;
            tracing::debug!(
                section = entry.provider.name(),
                prefix = %entry.route_prefix,
                groups = sidebar.groups().len(),
                pages = sidebar.page_count(),
                "Built section sidebar"
            );
            if registry.insert(entry.route_prefix.clone(), sidebar).is_some() {
                return Err(SectionError::DuplicatePrefix(entry.route_prefix.clone()));
            }
        }

        Ok(registry)
    }
}
