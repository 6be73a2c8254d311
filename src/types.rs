//! Parse-result data model shared between the parser seam and the generators.
//!
//! The shapes mirror what the external parser emits over its serialization
//! boundary, so every field uses camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Component frameworks an embedded `@inline` block can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Svelte,
    React,
    Vue,
}

impl Framework {
    /// File extension the host compiler associates with this framework.
    ///
    /// Inline component module ids carry this extension so the host routes
    /// them to the right framework compiler.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svelte => "svelte",
            Self::React => "tsx",
            Self::Vue => "vue",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Svelte => "svelte",
            Self::React => "react",
            Self::Vue => "vue",
        };
        f.write_str(name)
    }
}

/// One table-of-contents entry extracted from a document heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level, starting at 1.
    pub level: u32,
    pub title: String,
    /// Unique anchor id within the document.
    pub id: String,
}

/// One embedded component block authored inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineComponent {
    /// Zero-based position among the document's inline blocks. Also the
    /// addressing index in `?inline=<n>` module ids.
    pub index: usize,
    pub framework: Framework,
    /// Raw framework-native source, exactly as authored.
    pub code: String,
}

/// Free-form document front-matter.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Output of the external parser for one source document.
///
/// Invariant: a document with N inline components has exactly N+1
/// `html_parts` - the fragments before, between, and after each component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    #[serde(default)]
    pub metadata: Metadata,
    pub html_parts: Vec<String>,
    #[serde(default)]
    pub toc: Vec<TocEntry>,
    #[serde(default)]
    pub inline_components: Vec<InlineComponent>,
    /// Stylesheet text contributed by the document itself, distinct from
    /// theme CSS.
    #[serde(default)]
    pub inline_css: Option<String>,
}
