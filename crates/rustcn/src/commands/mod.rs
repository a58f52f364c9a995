//! CLI command implementations.

mod build;
mod changelog;
mod check;

pub(crate) use build::BuildArgs;
pub(crate) use changelog::ChangelogArgs;
pub(crate) use check::CheckArgs;

use rustcn_site::{SectionTable, SiteConfig, ValidationReport, build_config_with, validate};

use crate::error::CliError;
use crate::output::Output;

/// Assemble the site configuration from the built-in sections and validate it.
///
/// Every issue is printed; the caller decides whether the report fails.
fn assemble(output: &Output) -> Result<(SiteConfig, ValidationReport), CliError> {
    let sections = SectionTable::builtin();
    let config = build_config_with(&sections)?;
    let report = validate(&config, &sections);

    for issue in report.issues() {
        output.issue(issue);
    }

    Ok((config, report))
}
