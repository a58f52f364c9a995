//! Generator settings for rustcn.
//!
//! Parses `rustcn.toml` with serde and provides auto-discovery of the file
//! in parent directories. The settings only control where and how the site
//! configuration is written; the site configuration itself is built from
//! code and does not read this file.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `output.path` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output file path.
    pub output_path: Option<PathBuf>,
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override strict validation flag.
    pub strict: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rustcn.toml";

/// Default output path, relative to the config directory.
const DEFAULT_OUTPUT_PATH: &str = "docs/.vuepress/config.js";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration (path is a relative string from TOML).
    output: OutputConfigRaw,
    /// Validation configuration.
    pub check: CheckConfig,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Format of the written site configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `CommonJS` module (`module.exports = {...}`).
    #[default]
    Module,
    /// Plain JSON document.
    Json,
}

impl OutputFormat {
    /// File extensions accepted for this format.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Module => &["js", "cjs"],
            Self::Json => &["json"],
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown output format '{other}' (expected 'module' or 'json')"
            ))),
        }
    }
}

/// Raw output configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    format: Option<OutputFormat>,
    pretty: Option<bool>,
}

/// Resolved output configuration with an absolute path.
#[derive(Debug)]
pub struct OutputConfig {
    /// File the site configuration is written to.
    pub path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: OutputFormat::Module,
            pretty: true,
        }
    }
}

/// Validation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Treat validation warnings as errors.
    pub strict: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rustcn.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// The output section is not validated here; commands that write a file
    /// call [`Config::require_output`].
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or an environment variable in `output.path` is unset.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(path) = &settings.output_path {
            self.output_resolved.path.clone_from(path);
        }
        if let Some(format) = settings.format {
            self.output_resolved.format = format;
        }
        if let Some(strict) = settings.strict {
            self.check.strict = strict;
        }
    }

    /// Search for config file in a directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            output: OutputConfigRaw::default(),
            check: CheckConfig::default(),
            output_resolved: OutputConfig {
                path: base.join(DEFAULT_OUTPUT_PATH),
                ..OutputConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Output configuration for writing a file.
    ///
    /// The path must be non-empty and its extension must match the format.
    /// Printing to stdout and checking do not need this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the path is empty or has the
    /// wrong extension.
    pub fn require_output(&self) -> Result<&OutputConfig, ConfigError> {
        let output = &self.output_resolved;

        if output.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }

        let allowed = output.format.extensions();
        let extension = output
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if !allowed.contains(&extension) {
            return Err(ConfigError::Validation(format!(
                "output.path must end with .{} for {:?} format",
                allowed.join(" or ."),
                output.format
            )));
        }

        Ok(output)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.output.path {
            self.output.path = Some(expand::expand_env(path, "output.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            path: config_dir.join(self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)),
            format: self.output.format.unwrap_or_default(),
            pretty: self.output.pretty.unwrap_or(true),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/test/docs/.vuepress/config.js")
        );
        assert_eq!(config.output_resolved.format, OutputFormat::Module);
        assert!(config.output_resolved.pretty);
        assert!(!config.check.strict);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.check.strict);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
path = "site/config.json"
format = "json"
pretty = false

[check]
strict = true
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/project/site/config.json")
        );
        assert_eq!(config.output_resolved.format, OutputFormat::Json);
        assert!(!config.output_resolved.pretty);
        assert!(config.check.strict);
        assert!(config.require_output().is_ok());
    }

    #[test]
    fn test_parse_unknown_format_fails() {
        let toml = r#"
[output]
format = "yaml"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "module".parse::<OutputFormat>().unwrap(),
            OutputFormat::Module
        );
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            output_path: Some(PathBuf::from("/out/config.json")),
            format: Some(OutputFormat::Json),
            strict: Some(true),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.output_resolved.path, PathBuf::from("/out/config.json"));
        assert_eq!(config.output_resolved.format, OutputFormat::Json);
        assert!(config.check.strict);
        assert!(config.output_resolved.pretty); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/test/docs/.vuepress/config.js")
        );
        assert!(!config.check.strict);
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.require_output();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.require_output().is_ok());
    }

    #[test]
    fn test_validate_empty_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_resolved.path = PathBuf::new();
        assert_validation_error(&config, &["output.path", "empty"]);
    }

    #[test]
    fn test_validate_module_requires_js_extension() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_resolved.path = PathBuf::from("/test/config.json");
        assert_validation_error(&config, &["output.path", ".js"]);
    }

    #[test]
    fn test_validate_json_requires_json_extension() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_resolved.format = OutputFormat::Json;
        assert_validation_error(&config, &["output.path", ".json"]);
    }

    #[test]
    fn test_validate_cjs_extension_accepted() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_resolved.path = PathBuf::from("/test/config.cjs");
        assert!(config.require_output().is_ok());
    }

    #[test]
    fn test_expand_env_vars_output_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_RUSTCN_SITE_DIR", "site");
        }

        let toml = r#"
[output]
path = "${TEST_RUSTCN_SITE_DIR}/config.js"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.output.path.as_deref(), Some("site/config.js"));

        unsafe {
            std::env::remove_var("TEST_RUSTCN_SITE_DIR");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_RUSTCN_TEST");
        }

        let toml = r#"
[output]
path = "${MISSING_VAR_RUSTCN_TEST}/config.js"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_RUSTCN_TEST"));
        assert!(err.to_string().contains("output.path"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[output]\npath = \"build/site.json\"\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.output_resolved.path, dir.path().join("build/site.json"));
        assert_eq!(config.output_resolved.format, OutputFormat::Json);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_mismatched_extension_fails_on_require_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output]\npath = \"config.json\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        let err = config.require_output().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_cli_format_override_checked_on_require_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let overrides = CliSettings {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();
        assert_eq!(config.output_resolved.format, OutputFormat::Json);

        let err = config.require_output().unwrap_err();
        assert!(err.to_string().contains(".json"));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }
}
