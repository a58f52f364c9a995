//! HTML `<head>` tag descriptors.
//!
//! Each [`HeadTag`] becomes one element in the rendered document head.
//! Tags serialize as `[tag, { attr: value, ... }]`, which is the shape the
//! theme expects, and render in declaration order.

use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

/// A single `<head>` element: tag name plus ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    /// Element name (e.g., "link", "meta").
    pub tag: String,
    /// Attributes in render order.
    pub attrs: Vec<(String, String)>,
}

impl HeadTag {
    /// Create a tag with the given attributes.
    #[must_use]
    pub fn new(tag: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_owned(),
            attrs: attrs
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
        }
    }

    /// Create a `<link>` tag.
    #[must_use]
    pub fn link(attrs: &[(&str, &str)]) -> Self {
        Self::new("link", attrs)
    }

    /// Create a `<meta>` tag.
    #[must_use]
    pub fn meta(attrs: &[(&str, &str)]) -> Self {
        Self::new("meta", attrs)
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.tag)?;
        tuple.serialize_element(&Attrs(&self.attrs))?;
        tuple.end()
    }
}

/// Attribute list serialized as an ordered map.
struct Attrs<'a>(&'a [(String, String)]);

impl Serialize for Attrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Head tags for the portal: favicon, PWA manifest and mobile/tile metadata.
#[must_use]
pub fn default_head() -> Vec<HeadTag> {
    vec![
        HeadTag::link(&[("rel", "icon"), ("href", "/favicon.ico")]),
        HeadTag::link(&[("rel", "manifest"), ("href", "/manifest.json")]),
        HeadTag::meta(&[("name", "theme-color"), ("content", "#3eaf7c")]),
        HeadTag::meta(&[("name", "apple-mobile-web-app-capable"), ("content", "yes")]),
        HeadTag::meta(&[
            ("name", "apple-mobile-web-app-status-bar-style"),
            ("content", "black"),
        ]),
        HeadTag::link(&[
            ("rel", "apple-touch-icon"),
            ("href", "/icons/apple-touch-icon-152x152.png"),
        ]),
        HeadTag::meta(&[
            ("name", "msapplication-TileImage"),
            ("content", "/icons/msapplication-icon-144x144.png"),
        ]),
        HeadTag::meta(&[("name", "msapplication-TileColor"), ("content", "#000000")]),
    ]
}
