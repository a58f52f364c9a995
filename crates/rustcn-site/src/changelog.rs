//! Revision history of the portal configuration.
//!
//! There is one canonical configuration, built by
//! [`build_config`](crate::build_config). Earlier snapshots are kept here as
//! history rather than as parallel configurations.

/// Revision of the configuration produced by this crate.
pub const CONFIG_REVISION: u32 = 2;

/// One revision of the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revision {
    pub revision: u32,
    pub summary: &'static str,
    /// Notable differences from the previous revision.
    pub changes: &'static [&'static str],
}

/// All revisions, oldest first. The last one is [`CONFIG_REVISION`].
pub const REVISIONS: &[Revision] = &[
    Revision {
        revision: 1,
        summary: "Alternate snapshot with a reading section",
        changes: &[
            "Top navigation carried an extra entry for the reading section",
            "Forum link pointed to a different community URL",
            "Edit links were disabled",
            "Several navigation labels differed from the current wording",
        ],
    },
    Revision {
        revision: 2,
        summary: "Canonical configuration",
        changes: &[
            "Edit links enabled with the label 在 GitHub 上编辑此页",
            "Reading entry removed from the top navigation",
            "Forum link set to http://kriry.com/a/community/rust",
            "Sidebars for fifteen sections, including the Tokio blog and book notes",
        ],
    },
];

/// The revision matching [`CONFIG_REVISION`].
#[must_use]
pub fn current() -> Option<&'static Revision> {
    REVISIONS.iter().find(|r| r.revision == CONFIG_REVISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revisions_ascending() {
        assert!(REVISIONS.windows(2).all(|w| w[0].revision < w[1].revision));
    }

    #[test]
    fn test_latest_is_current() {
        assert_eq!(REVISIONS.last().map(|r| r.revision), Some(CONFIG_REVISION));
        assert_eq!(current().unwrap().summary, "Canonical configuration");
    }

    #[test]
    fn test_current_matches_built_config() {
        let config = crate::build_config().unwrap();
        assert!(config.theme_config.edit_links);
        assert!(
            config
                .theme_config
                .nav
                .iter()
                .any(|item| item.target() == Some("http://kriry.com/a/community/rust"))
        );
    }
}
