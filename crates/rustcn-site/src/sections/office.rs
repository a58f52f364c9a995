//! Official books: the Rust book, the Rustonomicon, the async book, the
//! reference, the Cargo book and the Discovery embedded book.

use crate::section::{SectionError, SidebarSectionProvider};
use crate::sidebar::{Sidebar, SidebarGroup};

/// "The Rust Programming Language".
pub struct Book;

impl SidebarSectionProvider for Book {
    fn name(&self) -> &str {
        "book"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![
            SidebarGroup::new(
                label,
                &[
                    "",
                    "ch00-00-introduction",
                    "ch01-00-getting-started",
                    "ch02-00-guessing-game-tutorial",
                    "ch03-00-common-programming-concepts",
                    "ch04-00-understanding-ownership",
                    "ch05-00-structs",
                    "ch06-00-enums",
                    "ch07-00-packages-crates-and-modules",
                    "ch08-00-common-collections",
                    "ch09-00-error-handling",
                    "ch10-00-generics",
                ],
            ),
            SidebarGroup::new(
                "进阶",
                &[
                    "ch11-00-testing",
                    "ch12-00-an-io-project",
                    "ch13-00-functional-features",
                    "ch14-00-more-about-cargo",
                    "ch15-00-smart-pointers",
                    "ch16-00-concurrency",
                    "ch17-00-oop",
                    "ch18-00-patterns",
                    "ch19-00-advanced-features",
                    "ch20-00-final-project-a-web-server",
                ],
            ),
            SidebarGroup::new("附录", &["appendix-00"]).collapsable(),
        ]))
    }
}

/// The Rustonomicon.
pub struct AdvRust;

impl SidebarSectionProvider for AdvRust {
    fn name(&self) -> &str {
        "advrust"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "meet-safe-and-unsafe",
                "data",
                "ownership",
                "conversions",
                "uninitialized",
                "obrm",
                "unwinding",
                "concurrency",
                "vec",
                "arc-and-mutex",
                "ffi",
            ],
        )]))
    }
}

/// Asynchronous Programming in Rust.
pub struct AsyncRust;

impl SidebarSectionProvider for AsyncRust {
    fn name(&self) -> &str {
        "asyncrust"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "getting-started",
                "execution",
                "async-await",
                "pinning",
                "streams",
                "multiple-futures",
                "workarounds",
            ],
        )]))
    }
}

/// The Rust Reference.
pub struct Reference;

impl SidebarSectionProvider for Reference {
    fn name(&self) -> &str {
        "reference"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![
            SidebarGroup::new(
                label,
                &[
                    "",
                    "notation",
                    "lexical-structure",
                    "macros",
                    "crates-and-source-files",
                    "conditional-compilation",
                    "items",
                    "attributes",
                    "statements-and-expressions",
                    "patterns",
                    "type-system",
                ],
            ),
            SidebarGroup::new(
                "运行时",
                &[
                    "special-types-and-traits",
                    "names",
                    "memory-model",
                    "linkage",
                    "unsafety",
                    "const_eval",
                    "abi",
                    "runtime",
                ],
            )
            .collapsable(),
        ]))
    }
}

/// The Cargo Book.
pub struct Cargo;

impl SidebarSectionProvider for Cargo {
    fn name(&self) -> &str {
        "cargo"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![
            SidebarGroup::new(label, &["", "getting-started", "guide"]),
            SidebarGroup::new(
                "参考",
                &[
                    "reference/manifest",
                    "reference/specifying-dependencies",
                    "reference/config",
                    "reference/environment-variables",
                    "reference/build-scripts",
                    "reference/publishing",
                    "reference/workspaces",
                ],
            ),
            SidebarGroup::new("FAQ", &["faq"]),
        ]))
    }
}

/// Discovery, the microcontroller book.
pub struct Discovery;

impl SidebarSectionProvider for Discovery {
    fn name(&self) -> &str {
        "discovery"
    }

    fn sidebar(&self, label: &str) -> Result<Sidebar, SectionError> {
        Ok(Sidebar(vec![SidebarGroup::new(
            label,
            &[
                "",
                "01-background",
                "02-requirements",
                "03-setup",
                "04-meet-your-hardware",
                "05-led-roulette",
                "06-hello-world",
                "07-registers",
                "08-leds-again",
                "09-clocks-and-timers",
                "10-serial-communication",
                "11-usart",
                "12-i2c",
                "13-led-compass",
                "14-punch-o-meter",
                "explore",
            ],
        )]))
    }
}
