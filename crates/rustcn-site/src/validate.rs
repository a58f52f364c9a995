//! Consistency checks for an assembled [`SiteConfig`].
//!
//! The site generator accepts any structure and renders broken entries
//! silently, so this pass collects every problem it can see into a
//! [`ValidationReport`] instead of stopping at the first one.

use std::fmt;

use crate::nav::{NavItem, is_external_link};
use crate::section::SectionTable;
use crate::site::SiteConfig;

/// How serious an issue is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The configuration is broken.
    Error,
    /// The configuration works but something is likely unintended.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// One finding of the validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// Whether the issue fails the check.
    pub severity: Severity,
    /// Where the issue is (e.g., "nav > 官方 > Rustlang", "sidebar./www/").
    pub location: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Validation failed.
#[derive(Debug, thiserror::Error)]
#[error("Configuration has {} problem(s):\n{}", .issues.len(), format_issues(.issues))]
pub struct ValidationError {
    /// Issues that caused the failure.
    pub issues: Vec<Issue>,
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collected validation findings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    fn error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        });
    }

    /// All issues in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// True when there are no errors. Warnings are allowed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Convert into a result. With `strict`, warnings fail as well.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with every failing issue.
    pub fn into_result(self, strict: bool) -> Result<(), ValidationError> {
        let failing: Vec<Issue> = self
            .issues
            .into_iter()
            .filter(|i| strict || i.severity == Severity::Error)
            .collect();

        if failing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues: failing })
        }
    }
}

/// Validate a configuration against the section table it was built from.
#[must_use]
pub fn validate(config: &SiteConfig, sections: &SectionTable) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.title.trim().is_empty() {
        report.error("title", "title cannot be empty");
    }

    check_head(config, &mut report);
    for item in &config.theme_config.nav {
        check_nav_item(item, "nav", &mut report);
    }
    check_sidebars(config, sections, &mut report);
    check_nav_coverage(config, &mut report);

    for issue in report.warnings() {
        tracing::warn!(location = %issue.location, "{}", issue.message);
    }

    report
}

fn check_head(config: &SiteConfig, report: &mut ValidationReport) {
    for (idx, tag) in config.head.iter().enumerate() {
        let location = format!("head[{idx}]");
        if tag.tag.trim().is_empty() {
            report.error(&location, "tag name cannot be empty");
        }
        if config.head[..idx].contains(tag) {
            report.warning(&location, format!("duplicate <{}> tag", tag.tag));
        }
    }
}

fn check_nav_item(item: &NavItem, parent: &str, report: &mut ValidationReport) {
    let location = format!("{parent} > {}", item.text());

    if item.text().trim().is_empty() {
        report.error(&location, "entry text cannot be empty");
    }

    match item {
        NavItem::Link { link, .. } => {
            if link.is_empty() {
                report.error(&location, "link cannot be empty");
            } else if !link.starts_with('/') && !is_external_link(link) {
                report.error(
                    &location,
                    format!("link '{link}' must start with '/' or a URL scheme"),
                );
            }
        }
        NavItem::Group { items, .. } => {
            if items.is_empty() {
                report.error(&location, "group must contain at least one entry");
            }
            for child in items {
                check_nav_item(child, &location, report);
            }
        }
    }
}

fn check_sidebars(config: &SiteConfig, sections: &SectionTable, report: &mut ValidationReport) {
    let registry = &config.theme_config.sidebar;

    for prefix in registry.route_prefixes() {
        if sections.get(prefix).is_none() {
            report.error(
                format!("sidebar.{prefix}"),
                "no section provider is registered for this route prefix",
            );
        }
    }
    for prefix in sections.route_prefixes() {
        if registry.get(prefix).is_none() {
            report.error(
                format!("sidebar.{prefix}"),
                "section provider is registered but the sidebar entry is missing",
            );
        }
    }

    for (idx, (prefix, sidebar)) in registry.iter().enumerate() {
        let location = format!("sidebar.{prefix}");

        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            report.error(&location, "route prefix must start and end with '/'");
        }

        if let Some(earlier) = registry
            .route_prefixes()
            .take(idx)
            .find(|earlier| prefix.starts_with(earlier))
        {
            report.warning(
                &location,
                format!("shadowed by earlier prefix '{earlier}' and never matched"),
            );
        }

        if sidebar.is_empty() {
            report.error(&location, "sidebar has no groups");
        }
        for (gidx, group) in sidebar.groups().iter().enumerate() {
            if group.title.trim().is_empty() {
                report.error(format!("{location}[{gidx}]"), "group title cannot be empty");
            }
        }
    }
}

/// Internal nav links should land on a section index, an HTML page, or a
/// route with a sidebar.
fn check_nav_coverage(config: &SiteConfig, report: &mut ValidationReport) {
    let registry = &config.theme_config.sidebar;

    for item in &config.theme_config.nav {
        for leaf in item.leaves() {
            let Some(link) = leaf.target() else { continue };
            if link.is_empty() || is_external_link(link) {
                continue;
            }
            if link.ends_with('/') || link.ends_with(".html") {
                continue;
            }
            if registry.resolve(link).is_none() {
                report.warning(
                    format!("nav > {}", leaf.text()),
                    format!("link '{link}' is neither a page nor covered by a sidebar"),
                );
            }
        }
    }
}
