//! Ecosystem crate guides and the Tokio blog archive.

use crate::section::{SectionError, SidebarSectionProvider};
use crate::sidebar::{Sidebar, SidebarGroup};

/// Tokio documentation.
pub struct Tokio;

impl SidebarSectionProvider for Tokio {
    fn name(&self) -> &str {
        "tokio"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![
            SidebarGroup::new(label, &["", "overview"]),
            SidebarGroup::new(
                "Getting Started",
                &[
                    "getting-started/hello-world",
                    "getting-started/runtime-model",
                    "getting-started/futures",
                    "getting-started/tasks",
                ],
            ),
            SidebarGroup::new(
                "Going Deeper",
                &[
                    "going-deeper/futures",
                    "going-deeper/runtime-model",
                    "going-deeper/returning",
                    "going-deeper/timers",
                    "going-deeper/io",
                ],
            )
            .collapsable(),
        ]))
    }
}

/// Actix actor framework.
pub struct Actix;

impl SidebarSectionProvider for Actix {
    fn name(&self) -> &str {
        "actix"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "getting-started",
                "actor",
                "address",
                "context",
                "arbiter",
                "sync-arbiter",
            ],
        )]))
    }
}

/// Actix Web.
pub struct ActixWeb;

impl SidebarSectionProvider for ActixWeb {
    fn name(&self) -> &str {
        "actixweb"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![
            SidebarGroup::new(
                label,
                &["", "getting-started", "application", "server", "handlers", "extractors"],
            ),
            SidebarGroup::new(
                "Advanced",
                &[
                    "errors",
                    "url-dispatch",
                    "request",
                    "response",
                    "testing",
                    "middleware",
                    "static-files",
                    "websockets",
                ],
            )
            .collapsable(),
        ]))
    }
}

/// Diesel ORM guides.
pub struct Diesel;

impl SidebarSectionProvider for Diesel {
    fn name(&self) -> &str {
        "diesel"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "getting-started",
                "all-about-updates",
                "all-about-inserts",
                "composing-applications",
                "extending-diesel",
                "configuring-diesel-cli",
            ],
        )]))
    }
}

/// Riker actor framework.
pub struct Riker;

impl SidebarSectionProvider for Riker {
    fn name(&self) -> &str {
        "riker"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "actors",
                "hierarchy",
                "selection",
                "messaging",
                "patterns",
                "channels",
                "scheduling",
                "config",
            ],
        )]))
    }
}

/// Serde guide.
pub struct Serde;

impl SidebarSectionProvider for Serde {
    fn name(&self) -> &str {
        "serde"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![
            SidebarGroup::new(
                label,
                &["", "data-model", "derive", "attributes", "custom-serialization"],
            ),
            SidebarGroup::new(
                "Examples",
                &[
                    "examples/json",
                    "examples/enum-str",
                    "examples/remote-derive",
                    "examples/stream-array",
                ],
            )
            .collapsable(),
        ]))
    }
}

/// Tokio blog archive.
pub struct TokioBlog;

impl SidebarSectionProvider for TokioBlog {
    fn name(&self) -> &str {
        "tokio_blog"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "2018-03-tokio-runtime",
                "2018-08-async-await",
                "2018-10-tokio-trace",
                "2019-03-loom",
            ],
        )
        .collapsable()]))
    }
}
