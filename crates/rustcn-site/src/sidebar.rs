//! Sidebar structures and the route-prefix registry.
//!
//! A [`Sidebar`] is the ordered list of groups shown for one documentation
//! section. The [`SidebarRegistry`] maps route prefixes to sidebars and keeps
//! insertion order, because the theme picks the first prefix that matches a
//! page URL.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Titled group of page links inside a sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Whether the theme may collapse the group.
    pub collapsable: bool,
    /// Page links relative to the route prefix (`""` is the section index).
    pub children: Vec<String>,
}

impl SidebarGroup {
    /// Create a non-collapsable group.
    #[must_use]
    pub fn new(title: &str, children: &[&str]) -> Self {
        Self {
            title: title.to_owned(),
            collapsable: false,
            children: children.iter().map(|&c| c.to_owned()).collect(),
        }
    }

    /// Mark the group as collapsable.
    #[must_use]
    pub fn collapsable(mut self) -> Self {
        self.collapsable = true;
        self
    }
}

/// Ordered sidebar definition for one route prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar(pub Vec<SidebarGroup>);

impl Sidebar {
    /// Groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[SidebarGroup] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of page links across all groups.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.0.iter().map(|g| g.children.len()).sum()
    }
}

impl From<Vec<SidebarGroup>> for Sidebar {
    fn from(groups: Vec<SidebarGroup>) -> Self {
        Self(groups)
    }
}

/// Route prefix to sidebar mapping, in declaration order.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarRegistry {
    entries: Vec<(String, Sidebar)>,
}

impl SidebarRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sidebar for a route prefix.
    ///
    /// An existing prefix keeps its position and gets the new sidebar;
    /// the previous one is returned.
    pub fn insert(&mut self, prefix: impl Into<String>, sidebar: Sidebar) -> Option<Sidebar> {
        let prefix = prefix.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            return Some(std::mem::replace(existing, sidebar));
        }
        self.entries.push((prefix, sidebar));
        None
    }

    /// Remove a route prefix, returning its sidebar.
    pub fn remove(&mut self, prefix: &str) -> Option<Sidebar> {
        let idx = self.entries.iter().position(|(p, _)| p == prefix)?;
        Some(self.entries.remove(idx).1)
    }

    /// Sidebar registered for an exact route prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&Sidebar> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, s)| s)
    }

    /// Route prefixes in declaration order.
    pub fn route_prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Prefix and sidebar pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sidebar)> {
        self.entries.iter().map(|(p, s)| (p.as_str(), s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First registered prefix that `path` starts with.
    ///
    /// Mirrors how the theme picks a sidebar: prefixes are tried in
    /// declaration order and the first hit wins.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.route_prefixes().find(|prefix| path.starts_with(prefix))
    }
}

impl Serialize for SidebarRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, sidebar) in &self.entries {
            map.serialize_entry(prefix, sidebar)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sidebar(title: &str) -> Sidebar {
        Sidebar(vec![SidebarGroup::new(title, &["", "intro"])])
    }

    #[test]
    fn test_group_serialization() {
        let group = SidebarGroup::new("Serde", &["", "derive"]);
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Serde","collapsable":false,"children":["","derive"]}"#
        );
    }

    #[test]
    fn test_collapsable() {
        let group = SidebarGroup::new("Blog", &[]).collapsable();
        assert!(group.collapsable);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut registry = SidebarRegistry::new();
        registry.insert("/b/", sidebar("B"));
        registry.insert("/a/", sidebar("A"));
        let prefixes: Vec<&str> = registry.route_prefixes().collect();
        assert_eq!(prefixes, vec!["/b/", "/a/"]);
    }

    #[test]
    fn test_insert_existing_replaces_in_place() {
        let mut registry = SidebarRegistry::new();
        registry.insert("/a/", sidebar("A"));
        registry.insert("/b/", sidebar("B"));
        let previous = registry.insert("/a/", sidebar("A2"));

        assert_eq!(previous, Some(sidebar("A")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.route_prefixes().next(), Some("/a/"));
        assert_eq!(registry.get("/a/"), Some(&sidebar("A2")));
    }

    #[test]
    fn test_remove() {
        let mut registry = SidebarRegistry::new();
        registry.insert("/a/", sidebar("A"));
        assert_eq!(registry.remove("/a/"), Some(sidebar("A")));
        assert!(registry.is_empty());
        assert_eq!(registry.remove("/a/"), None);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut registry = SidebarRegistry::new();
        registry.insert("/z/", Sidebar::default());
        registry.insert("/a/", Sidebar::default());
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"{"/z/":[],"/a/":[]}"#);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let mut registry = SidebarRegistry::new();
        registry.insert("/crates/", sidebar("Crates"));
        registry.insert("/crates/serde/", sidebar("Serde"));

        assert_eq!(registry.resolve("/crates/serde/derive.html"), Some("/crates/"));
        assert_eq!(registry.resolve("/www/"), None);
    }

    #[test]
    fn test_page_count() {
        let sidebar = Sidebar(vec![
            SidebarGroup::new("A", &["", "one"]),
            SidebarGroup::new("B", &["two"]),
        ]);
        assert_eq!(sidebar.page_count(), 3);
    }
}
