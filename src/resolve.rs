//! Virtual module identity: parsing, rendering, and resolution.
//!
//! Every id the pipeline understands has a canonical form:
//!
//! | Canonical id                              | Meaning                        |
//! |-------------------------------------------|--------------------------------|
//! | `\0virtual:norg-arborium.css`             | Global theme stylesheet        |
//! | `\0virtual:norg-css:<abs path>`           | Per-document stylesheet        |
//! | `<abs path>.<frameworkExt>?inline=<n>`    | Inline component module *n*    |
//! | `<abs path>?metadata`                     | Metadata-only module           |
//! | `<abs path>.norg`                         | Main document module           |
//!
//! [`VirtualId::parse`] is the only place raw id strings are inspected; the
//! rest of the pipeline works on the tagged variant. Query strings may carry
//! host-injected parameters after the recognized marker (`?inline=0&t=123`),
//! which parsing tolerates.

use crate::config::Mode;
use regex::Regex;
use std::{
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

/// User-addressable id of the global theme stylesheet module.
pub const THEME_CSS_ID: &str = "virtual:norg-arborium.css";

/// Canonical (resolved, non-user-addressable) form of [`THEME_CSS_ID`].
pub const RESOLVED_THEME_CSS_ID: &str = "\0virtual:norg-arborium.css";

/// Prefix of per-document stylesheet module ids.
pub const DOC_CSS_PREFIX: &str = "virtual:norg-css:";

/// Inline component module: `<path>[.ext]?inline=<n>[&...]`.
static INLINE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^?]+?)(?:\.(svelte|vue|tsx))?\?inline=([0-9]+)(?:&.*)?$").unwrap()
});

/// Metadata module: `<path>?metadata[&...]`.
static METADATA_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^?]+)\?metadata(?:&.*)?$").unwrap());

/// Query part of an inline import before canonicalization.
static INLINE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^inline=([0-9]+)(?:&.*)?$").unwrap());

/// Query part of a metadata import.
static METADATA_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^metadata(?:&.*)?$").unwrap());

// ============================================================================
// Tagged identifiers
// ============================================================================

/// A canonical virtual module id, decoded.
///
/// Reversible: every derived variant retains the source path it was derived
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VirtualId {
    /// Global theme stylesheet, a singleton.
    GlobalCss,
    /// One document's own stylesheet.
    DocCss(PathBuf),
    /// One embedded component of one document.
    Inline { source: PathBuf, index: usize },
    /// Metadata-only module for one document.
    Metadata(PathBuf),
    /// Main document module.
    Main(PathBuf),
}

impl VirtualId {
    /// Decode a canonical id string. Returns `None` for ids outside this
    /// pipeline's purview (pass-through).
    pub fn parse(id: &str) -> Option<Self> {
        if id == RESOLVED_THEME_CSS_ID {
            return Some(Self::GlobalCss);
        }

        if let Some(path) = id
            .strip_prefix('\0')
            .and_then(|rest| rest.strip_prefix(DOC_CSS_PREFIX))
        {
            return Some(Self::DocCss(PathBuf::from(path)));
        }

        if let Some(caps) = INLINE_ID.captures(id) {
            let index = caps[3].parse().ok()?;
            return Some(Self::Inline {
                source: PathBuf::from(&caps[1]),
                index,
            });
        }

        if let Some(caps) = METADATA_ID.captures(id) {
            return Some(Self::Metadata(PathBuf::from(&caps[1])));
        }

        if !id.contains('?') && id.ends_with(".norg") {
            return Some(Self::Main(PathBuf::from(id)));
        }

        None
    }

    /// The source path this id derives from, if any.
    pub fn source(&self) -> Option<&Path> {
        match self {
            Self::GlobalCss => None,
            Self::DocCss(path) | Self::Metadata(path) | Self::Main(path) => Some(path),
            Self::Inline { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Id rendering
// ============================================================================

/// Canonical id of a document's stylesheet module.
pub fn resolved_doc_css_id(source: &Path) -> String {
    format!("\0{DOC_CSS_PREFIX}{}", source.display())
}

/// Import specifier for a document's stylesheet (pre-resolution form,
/// emitted into generated code).
pub fn doc_css_import(source: &Path) -> String {
    format!("{DOC_CSS_PREFIX}{}", source.display())
}

/// Canonical id of one inline component module.
pub fn inline_id(source: &Path, index: usize, extension: &str) -> String {
    format!("{}.{extension}?inline={index}", source.display())
}

/// Import specifier for one inline component (pre-resolution form, emitted
/// into generated code; the resolver appends the framework extension).
pub fn inline_import(source: &Path, index: usize) -> String {
    format!("{}?inline={index}", source.display())
}

/// Canonical id of a document's metadata-only module.
pub fn metadata_id(source: &Path) -> String {
    format!("{}?metadata", source.display())
}

// ============================================================================
// Resolution
// ============================================================================

/// Canonicalize a requested id, or pass it through (`None`).
///
/// Rules, in priority order:
/// 1. the theme stylesheet sentinel maps to its resolved form,
/// 2. per-document stylesheet ids get the resolved prefix,
/// 3. inline imports gain the active framework extension (not handled at
///    all when the mode has no framework),
/// 4. metadata imports are absolutized against the importer.
pub fn resolve_id(id: &str, importer: Option<&Path>, mode: Mode) -> Option<String> {
    if id == THEME_CSS_ID {
        return Some(RESOLVED_THEME_CSS_ID.to_string());
    }

    if id.starts_with(DOC_CSS_PREFIX) {
        return Some(format!("\0{id}"));
    }

    let (path, query) = id.split_once('?')?;

    if INLINE_QUERY.is_match(query) {
        // Inline components do not exist in modes without a framework.
        let extension = mode.inline_extension()?;
        let source = absolutize(Path::new(path), importer)?;
        let rendered = source.display().to_string();
        // Already-canonical ids keep their extension.
        return Some(if rendered.ends_with(&format!(".{extension}")) {
            format!("{rendered}?{query}")
        } else {
            format!("{rendered}.{extension}?{query}")
        });
    }

    if METADATA_QUERY.is_match(query) && Path::new(path).is_relative() {
        let source = absolutize(Path::new(path), importer)?;
        return Some(format!("{}?{query}", source.display()));
    }

    None
}

/// Resolve a possibly-relative import against its importer's directory.
/// Purely lexical; never touches the filesystem.
fn absolutize(path: &Path, importer: Option<&Path>) -> Option<PathBuf> {
    if path.is_absolute() {
        return Some(normalize(path));
    }
    let dir = importer?.parent()?;
    Some(normalize(&dir.join(path)))
}

/// Collapse `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
