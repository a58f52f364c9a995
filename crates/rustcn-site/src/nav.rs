//! Top navigation menu.
//!
//! The menu is an ordered tree of [`NavItem`]s. Display order equals
//! declaration order; nothing is sorted or de-duplicated.

use serde::Serialize;

/// Navigation menu entry.
///
/// Serializes untagged, as `{text, link}` for leaves and `{text, items}` for groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Direct link.
    Link {
        /// Display label.
        text: String,
        /// Site-relative path (leading slash) or absolute URL.
        link: String,
    },
    /// Labeled group of further entries.
    Group {
        /// Display label.
        text: String,
        /// Child entries in display order.
        items: Vec<NavItem>,
    },
}

impl NavItem {
    /// Create a leaf entry.
    #[must_use]
    pub fn link(text: &str, link: &str) -> Self {
        Self::Link {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }

    /// Create a group entry.
    #[must_use]
    pub fn group(text: &str, items: Vec<NavItem>) -> Self {
        Self::Group {
            text: text.to_owned(),
            items,
        }
    }

    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Link target for leaves, `None` for groups.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Children for groups, empty for leaves.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        match self {
            Self::Link { .. } => &[],
            Self::Group { items, .. } => items,
        }
    }

    /// True for groups, false for leaf links.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Nesting depth of this entry. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.items().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// All leaf entries under this one, depth-first in declaration order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&NavItem> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a NavItem>) {
        match self {
            Self::Link { .. } => out.push(self),
            Self::Group { items, .. } => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
        }
    }
}

/// Check whether a link points outside the site.
///
/// A link is external when it starts with a URI scheme: a letter, then
/// letters, digits, `+`, `-` or `.`, then `:` (`https:`, `ftp:`, `tel:`).
#[must_use]
pub fn is_external_link(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Top navigation for the portal.
#[must_use]
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::group(
            "官方",
            vec![
                NavItem::link("官方Rust书录", "/office/rust/"),
                NavItem::group(
                    "Rustlang",
                    vec![
                        NavItem::link("Rust编程语言", "/office/rust/book/"),
                        NavItem::link("Rust高级编程", "/office/rust/advrust/"),
                        NavItem::link("Rust异步编程", "/office/rust/async-rust/"),
                        NavItem::link("Rust语言参考", "/office/rust/reference/"),
                        NavItem::link("Cargo教程", "/office/rust/cargo/"),
                    ],
                ),
                NavItem::group(
                    "IOT",
                    vec![NavItem::link("Discovery", "/office/iot/discovery/")],
                ),
            ],
        ),
        NavItem::group(
            "生态",
            vec![
                NavItem::link("Rust生态库书录", "/crates/"),
                NavItem::link("Actix", "/crates/actix/"),
                NavItem::link("Diesel", "/crates/diesel/"),
                NavItem::link("Riker", "/crates/riker/"),
                NavItem::link("Serde", "/crates/serde/"),
                NavItem::link("Tokio", "/crates/tokio/"),
            ],
        ),
        NavItem::group(
            "Rust中文",
            vec![
                NavItem::link("Rust中文用户书录", "/users/"),
                NavItem::link("The Book-学习心得", "/users/book-exp/"),
            ],
        ),
        NavItem::link("网络", "/www/resource.html"),
        NavItem::link("微博", "https://weibo.com/kriry?is_all=1"),
        NavItem::link("论坛", "http://kriry.com/a/community/rust"),
        NavItem::link(
            "聊天室",
            "https://riot.im/app/#/room/#rustlang-cn:matrix.org",
        ),
        NavItem::link("知乎", "https://zhuanlan.zhihu.com/rustlang-cn"),
    ]
}
