//! Seam to the external document parser and theme CSS collaborators.
//!
//! The pipeline never parses norg markup itself. It hands raw document text
//! to a [`NorgParser`] and theme names to a [`ThemeProvider`], both injected
//! at plugin construction. Tests substitute lightweight fakes at the same
//! seam.

use crate::types::{Framework, ParseResult};
use thiserror::Error;

/// Errors the external parser reports for one document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An `@inline` block targets a framework other than the active one.
    #[error("inline component targets `{declared}` and cannot be used in a {active} project")]
    FrameworkMismatch {
        declared: Framework,
        active: Framework,
    },

    /// An `@inline` tag names a framework the parser does not know.
    #[error("invalid framework `{0}` in @inline tag")]
    UnknownFramework(String),

    /// An `@inline` block appeared but no target framework is active.
    #[error("@inline block found but the active mode has no component framework")]
    MissingFramework,

    /// Any other rejection, verbatim from the parser.
    #[error("{0}")]
    Syntax(String),
}

/// The external document parser.
///
/// `framework` is the active mode's component framework (if any) so the
/// parser can validate `@inline` framework tags against it.
pub trait NorgParser: Send + Sync {
    fn parse(
        &self,
        content: &str,
        framework: Option<Framework>,
    ) -> Result<ParseResult, ParseError>;
}

/// The external theme CSS generator.
pub trait ThemeProvider: Send + Sync {
    /// CSS text for a named theme.
    fn theme_css(&self, theme: &str) -> String;
}
