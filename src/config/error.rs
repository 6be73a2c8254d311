//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
///
/// All of these are raised at plugin construction, before any source file is
/// touched; none can surface mid-build.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("options parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("`theme` and `themes` are mutually exclusive; set exactly one")]
    ConflictingThemes,

    #[error("a theme is required; set `theme` or `themes`")]
    MissingTheme,

    #[error("invalid {kind} pattern `{pattern}`")]
    Filter {
        kind: &'static str,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("`components_dir` is not a directory: `{0}`")]
    ComponentsDir(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_display() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = ConfigError::Filter {
            kind: "include",
            pattern: "[".into(),
            source,
        };
        let text = format!("{err}");
        assert!(text.contains("include"));
        assert!(text.contains('['));
    }

    #[test]
    fn test_theme_error_display() {
        assert!(format!("{}", ConfigError::ConflictingThemes).contains("mutually exclusive"));
        assert!(format!("{}", ConfigError::MissingTheme).contains("required"));
    }
}
