//! Include/exclude path filtering.
//!
//! Patterns are glob syntax matched against the full source path. An empty
//! include list accepts everything; exclusion always wins over inclusion.

use super::error::ConfigError;
use glob::Pattern;
use std::path::Path;

/// Compiled include/exclude filter.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl Filter {
    /// Compile pattern lists, rejecting on the first malformed pattern.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            include: compile(include, "include")?,
            exclude: compile(exclude, "exclude")?,
        })
    }

    /// Whether a source path passes the filter.
    pub fn matches(&self, path: &Path) -> bool {
        if self.exclude.iter().any(|p| p.matches_path(path)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches_path(path))
    }
}

fn compile(patterns: &[String], kind: &'static str) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| ConfigError::Filter {
                kind,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(include: &[&str], exclude: &[&str]) -> Filter {
        let include: Vec<String> = include.iter().map(|s| s.to_string()).collect();
        let exclude: Vec<String> = exclude.iter().map(|s| s.to_string()).collect();
        Filter::new(&include, &exclude).unwrap()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let f = filter(&[], &[]);
        assert!(f.matches(Path::new("/docs/post.norg")));
    }

    #[test]
    fn test_include_restricts() {
        let f = filter(&["/docs/**/*.norg"], &[]);
        assert!(f.matches(Path::new("/docs/a/post.norg")));
        assert!(!f.matches(Path::new("/other/post.norg")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let f = filter(&["/docs/**"], &["/docs/drafts/**"]);
        assert!(f.matches(Path::new("/docs/post.norg")));
        assert!(!f.matches(Path::new("/docs/drafts/wip.norg")));
    }

    #[test]
    fn test_malformed_pattern_rejected() {
        let err = Filter::new(&["[".to_string()], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Filter { kind: "include", .. }));
    }
}
