//! Rendering the configuration for the site generator.
//!
//! The generator loads its configuration as a `CommonJS` module. JSON is a
//! valid JavaScript expression, so the module form is the JSON document
//! assigned to `module.exports`.

use crate::changelog::CONFIG_REVISION;
use crate::site::SiteConfig;

/// Error returned when the configuration cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("Failed to serialize configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the configuration as JSON.
///
/// # Errors
///
/// Returns `RenderError::Json` if serialization fails.
pub fn to_json(config: &SiteConfig, pretty: bool) -> Result<String, RenderError> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}

/// Render the configuration as a `CommonJS` module.
///
/// # Errors
///
/// Returns `RenderError::Json` if serialization fails.
pub fn to_module(config: &SiteConfig, pretty: bool) -> Result<String, RenderError> {
    let json = to_json(config, pretty)?;
    Ok(format!(
        "// Generated by rustcn {} (config revision {CONFIG_REVISION}). Do not edit.\n\
         module.exports = {json}\n",
        env!("CARGO_PKG_VERSION"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::build_config;

    #[test]
    fn test_json_top_level_keys_in_order() {
        let config = build_config().unwrap();
        let json = to_json(&config, false).unwrap();

        let keys = ["\"extend\"", "\"title\"", "\"description\"", "\"head\"", "\"plugins\"", "\"themeConfig\""];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_json_round_trips_as_value() {
        let config = build_config().unwrap();
        let json = to_json(&config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Rust中文");
        assert_eq!(value["head"][0][0], "link");
        assert_eq!(value["head"][0][1]["href"], "/favicon.ico");
        assert_eq!(value["plugins"]["@vuepress/back-to-top"], serde_json::json!({}));
        assert_eq!(
            value["themeConfig"]["sidebar"]["/office/rust/book/"][0]["title"],
            "Rust"
        );
    }

    #[test]
    fn test_sidebar_keys_keep_declaration_order() {
        let config = build_config().unwrap();
        let json = to_json(&config, false).unwrap();
        let book = json.find("\"/office/rust/book/\"").unwrap();
        let www = json.find("\"/www/\"").unwrap();
        let book_exp = json.find("\"/users/book-exp/\"").unwrap();
        assert!(book < www && www < book_exp);
    }

    #[test]
    fn test_module_wraps_json() {
        let config = build_config().unwrap();
        let module = to_module(&config, false).unwrap();
        let json = to_json(&config, false).unwrap();

        assert!(module.starts_with("// Generated by rustcn"));
        assert!(module.contains(&format!("module.exports = {json}\n")));
        assert!(module.ends_with('\n'));
    }
}
