//! Community-maintained sections.

use crate::section::{SectionError, SidebarSectionProvider};
use crate::sidebar::{Sidebar, SidebarGroup};

/// Web resources collection.
pub struct Www;

impl SidebarSectionProvider for Www {
    fn name(&self) -> &str {
        "www"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &["resource", "community", "learning"],
        )]))
    }
}

/// Reading notes on the Rust book, written by users.
pub struct BookExp;

impl SidebarSectionProvider for BookExp {
    fn name(&self) -> &str {
        "book_exp"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &["", "ownership", "lifetimes", "traits", "closures"],
        )]))
    }
}
