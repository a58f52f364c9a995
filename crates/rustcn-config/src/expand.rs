//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("docs/.vuepress/config.js", "output.path").unwrap(),
            "docs/.vuepress/config.js"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("RUSTCN_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${RUSTCN_EXPAND_UNSET:-site}/config.js", "output.path").unwrap(),
            "site/config.js"
        );
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("RUSTCN_EXPAND_MISSING");
        }
        let err = expand_env("${RUSTCN_EXPAND_MISSING}/config.js", "output.path").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("output.path"));
        assert!(msg.contains("RUSTCN_EXPAND_MISSING"));
    }
}
