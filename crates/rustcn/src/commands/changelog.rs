//! `rustcn changelog` command implementation.

use clap::Args;
use rustcn_site::changelog::{CONFIG_REVISION, REVISIONS};

use crate::output::Output;

/// Arguments for the changelog command.
#[derive(Args)]
pub(crate) struct ChangelogArgs {
    /// Show only the current revision.
    #[arg(long)]
    current: bool,
}

impl ChangelogArgs {
    /// Execute the changelog command.
    pub(crate) fn execute(self) {
        let output = Output::new();

        for revision in REVISIONS
            .iter()
            .filter(|r| !self.current || r.revision == CONFIG_REVISION)
        {
            let title = format!("Revision {}: {}", revision.revision, revision.summary);
            if revision.revision == CONFIG_REVISION {
                output.highlight(&format!("{title} (current)"));
            } else {
                output.info(&title);
            }
            for change in revision.changes {
                output.info(&format!("  - {change}"));
            }
        }
    }
}
