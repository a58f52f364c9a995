//! `rustcn build` command implementation.

use std::path::PathBuf;

use clap::Args;
use rustcn_config::{CliSettings, Config, OutputConfig, OutputFormat};
use rustcn_site::{SiteConfig, to_json, to_module};

use super::assemble;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover rustcn.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: module or json (overrides config).
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Print the configuration to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Fail on validation warnings.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, section assembly,
    /// validation, rendering or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_path: self.output,
            format: self.format,
            strict: self.strict.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let target = if self.stdout {
            None
        } else {
            Some(config.require_output()?)
        };

        let (site, report) = assemble(&output)?;
        report.into_result(config.check.strict)?;

        let rendered = render(&site, &config.output_resolved)?;

        let Some(target) = target else {
            output.document(&rendered);
            return Ok(());
        };

        write_output(&rendered, target)?;
        output.success(&format!(
            "Wrote {} sidebars and {} nav entries to {}",
            site.theme_config.sidebar.len(),
            site.theme_config.nav.len(),
            target.path.display()
        ));

        Ok(())
    }
}

/// Render the site configuration in the configured format.
fn render(site: &SiteConfig, output: &OutputConfig) -> Result<String, CliError> {
    let rendered = match output.format {
        OutputFormat::Module => to_module(site, output.pretty)?,
        OutputFormat::Json => to_json(site, output.pretty)?,
    };
    Ok(rendered)
}

/// Write rendered output, creating parent directories as needed.
fn write_output(rendered: &str, output: &OutputConfig) -> Result<(), CliError> {
    if let Some(parent) = output.path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output.path, rendered)?;
    tracing::info!(path = %output.path.display(), bytes = rendered.len(), "Wrote site configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustcn_site::build_config;

    fn output_config(path: PathBuf, format: OutputFormat) -> OutputConfig {
        OutputConfig {
            path,
            format,
            pretty: false,
        }
    }

    #[test]
    fn test_render_module() {
        let site = build_config().unwrap();
        let out = output_config(PathBuf::from("config.js"), OutputFormat::Module);
        let rendered = render(&site, &out).unwrap();
        assert!(rendered.contains("module.exports = {"));
    }

    #[test]
    fn test_render_json() {
        let site = build_config().unwrap();
        let out = output_config(PathBuf::from("config.json"), OutputFormat::Json);
        let rendered = render(&site, &out).unwrap();
        assert!(rendered.starts_with('{'));
        assert!(rendered.contains("\"title\":\"Rust中文\""));
    }

    fn build_args(config: PathBuf, format: Option<OutputFormat>, stdout: bool) -> BuildArgs {
        BuildArgs {
            config: Some(config),
            output: None,
            format,
            stdout,
            strict: false,
            verbose: false,
        }
    }

    #[test]
    fn test_stdout_json_ignores_default_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("rustcn.toml");
        std::fs::write(&config, "").unwrap();

        build_args(config, Some(OutputFormat::Json), true)
            .execute()
            .unwrap();

        assert!(!dir.path().join("docs").exists());
    }

    #[test]
    fn test_file_output_rejects_mismatched_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("rustcn.toml");
        std::fs::write(&config, "").unwrap();

        let err = build_args(config, Some(OutputFormat::Json), false)
            .execute()
            .unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains(".json"));
        assert!(!dir.path().join("docs").exists());
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/.vuepress/config.js");
        let out = output_config(path.clone(), OutputFormat::Module);

        write_output("module.exports = {}\n", &out).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "module.exports = {}\n"
        );
    }
}
