use std::fs;
use std::path::Path;

use flowdump_core::RenderOptions;
use serde::Deserialize;
use thiserror::Error;

/// Diagram settings read from a TOML file.
///
/// Keys left out of the file fall back to [`RenderOptions::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSettings {
    pub directions: Option<Vec<String>>,
    pub arrow: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    render: RenderSettings,
}

/// Errors returned when loading config files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config file {path}: {reason}")]
    Invalid { path: String, reason: String },
}

impl RenderSettings {
    /// Merge these settings over the built-in render options.
    pub fn into_options(self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            directions: self.directions.unwrap_or(defaults.directions),
            arrow: self.arrow.unwrap_or(defaults.arrow),
        }
    }
}

/// Load render options from a TOML file.
pub fn load_render_options(path: &Path) -> Result<RenderOptions, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_config(&raw, path.display().to_string())
}

/// Render options shipped with the binary.
pub fn default_render_options() -> RenderOptions {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/render.toml"));
    parse_config(embedded, "embedded config".to_string()).unwrap_or_default()
}

fn parse_config(raw: &str, path: String) -> Result<RenderOptions, ConfigLoadError> {
    let parsed: ConfigFile = toml::from_str(raw).map_err(|source| ConfigLoadError::Parse {
        path: path.clone(),
        source,
    })?;

    if let Some(arrow) = &parsed.render.arrow {
        if arrow.trim().is_empty() || arrow.contains('\n') {
            return Err(ConfigLoadError::Invalid {
                path,
                reason: "arrow must be a non-empty single line".to_string(),
            });
        }
    }
    if let Some(directions) = &parsed.render.directions {
        if directions.iter().any(|d| d.contains('\n')) {
            return Err(ConfigLoadError::Invalid {
                path,
                reason: "directions must be single lines".to_string(),
            });
        }
    }

    Ok(parsed.render.into_options())
}

#[cfg(test)]
mod tests {
    use super::{default_render_options, parse_config, ConfigLoadError};
    use flowdump_core::RenderOptions;

    #[test]
    fn embedded_config_matches_builtin_defaults() {
        assert_eq!(default_render_options(), RenderOptions::default());
    }

    #[test]
    fn partial_config_keeps_default_directions() {
        let options = parse_config("[render]\narrow = \"------>\"\n", "test".to_string())
            .expect("config should parse");
        assert_eq!(options.arrow, "------>");
        assert_eq!(options.directions, RenderOptions::default().directions);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let options = parse_config("", "test".to_string()).expect("config should parse");
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("[render]\ncolour = \"red\"\n", "test".to_string())
            .expect_err("should fail");
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }

    #[test]
    fn blank_arrow_is_rejected() {
        let err = parse_config("[render]\narrow = \" \"\n", "test".to_string())
            .expect_err("should fail");
        assert!(matches!(err, ConfigLoadError::Invalid { .. }));
    }
}
