//! Site configuration for the Rust中文 documentation portal.
//!
//! This crate provides:
//! - [`SiteConfig`]: the configuration object consumed by the site generator
//! - [`SidebarSectionProvider`] and [`SectionTable`]: one sidebar provider per
//!   documentation section, registered in a single explicit table
//! - [`validate`]: consistency checks over an assembled configuration
//! - [`to_json`] / [`to_module`]: output for the site generator
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rustcn_site::{SectionTable, build_config_with, to_module, validate};
//!
//! let sections = SectionTable::builtin();
//! let config = build_config_with(&sections)?;
//!
//! validate(&config, &sections).into_result(false)?;
//! let module = to_module(&config, true)?;
//! assert!(module.contains("module.exports"));
//! # Ok(())
//! # }
//! ```

pub mod changelog;
mod head;
mod nav;
mod render;
mod section;
pub mod sections;
mod sidebar;
mod site;
mod validate;

pub use head::{HeadTag, default_head};
pub use nav::{NavItem, default_nav, is_external_link};
pub use render::{RenderError, to_json, to_module};
pub use section::{SectionEntry, SectionError, SectionTable, SidebarSectionProvider};
pub use sidebar::{Sidebar, SidebarGroup, SidebarRegistry};
pub use site::{
    DEFAULT_THEME, Plugins, ServiceWorkerOptions, SiteConfig, ThemeConfig, build_config,
    build_config_with,
};
pub use validate::{Issue, Severity, ValidationError, ValidationReport, validate};
