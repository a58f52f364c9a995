//! `rustcn check` command implementation.

use std::path::PathBuf;

use clap::Args;
use rustcn_config::{CliSettings, Config};

use super::assemble;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover rustcn.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail on validation warnings.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if section assembly fails or validation finds
    /// errors (or warnings in strict mode).
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            strict: self.strict.then_some(true),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let (site, report) = assemble(&output)?;
        let errors = report.errors().count();
        let warnings = report.warnings().count();
        let leaves: usize = site.theme_config.nav.iter().map(|i| i.leaves().len()).sum();

        let sidebars = site.theme_config.sidebar.len();

        output.info(&format!(
            "Checked {leaves} nav links and {sidebars} sidebars: {errors} error(s), {warnings} warning(s)"
        ));

        report.into_result(config.check.strict)?;
        output.success("Configuration is consistent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ignores_output_section() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("rustcn.toml");
        std::fs::write(
            &config,
            "[output]\npath = \"site/config.json\"\nformat = \"module\"\n",
        )
        .unwrap();

        let args = CheckArgs {
            config: Some(config),
            strict: false,
            verbose: false,
        };

        args.execute().unwrap();
    }
}
