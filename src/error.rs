//! Load-time error types.
//!
//! Configuration errors live in [`crate::config::ConfigError`]; everything that can
//! fail while serving a module load is here. None of these are retried - the
//! host's rebuild-on-save cycle is the retry mechanism.

use crate::parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the host as a failed module load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be read.
    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external parser rejected the document.
    #[error("failed to parse norg file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// An inline module id addressed an index the parse result does not
    /// have. Signals a resolver/cache desynchronization, never silently
    /// served as empty text.
    #[error("no inline component {index} in `{path}` ({available} present)")]
    InlineNotFound {
        path: PathBuf,
        index: usize,
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_not_found_display() {
        let err = LoadError::InlineNotFound {
            path: PathBuf::from("/docs/post.norg"),
            index: 3,
            available: 1,
        };
        let text = err.to_string();
        assert!(text.contains("inline component 3"));
        assert!(text.contains("post.norg"));
        assert!(text.contains("1 present"));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = LoadError::Parse {
            path: PathBuf::from("bad.norg"),
            source: ParseError::Syntax("unexpected token".into()),
        };
        assert!(err.to_string().contains("bad.norg"));
    }
}
