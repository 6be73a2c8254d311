//! Multi-target code generation.
//!
//! One generator per [`Mode`], dispatched through a fixed table. Generators
//! are pure functions of `(parse result, theme css, source path)` - no
//! filesystem, no shared state - so they can run under any concurrency the
//! host throws at the load hook.
//!
//! Every generated main module exports `metadata`, `toc` and a `default`
//! aggregate; metadata and toc are emitted as JSON literals so string
//! escaping round-trips exactly. CSS imports (theme and per-document) always
//! precede export statements.

mod html;
mod metadata;
mod react;
mod svelte;
mod vue;

pub use metadata::generate as generate_metadata;

use crate::config::Mode;
use crate::resolve;
use crate::types::ParseResult;
use serde::Serialize;
use std::path::Path;

/// A framework-specific text synthesizer.
pub type Generator = fn(&ParseResult, &str, &Path) -> String;

/// The mode -> generator table. Exhaustive over [`Mode`]: adding a mode
/// does not compile until it gets a row here.
pub fn generator_for(mode: Mode) -> Generator {
    match mode {
        Mode::Html => html::generate,
        Mode::Svelte => svelte::generate,
        Mode::React => react::generate,
        Mode::Vue => vue::generate,
        Mode::Metadata => metadata::generate_for_mode,
    }
}

/// Generate the main module text for `mode`.
pub fn generate(mode: Mode, result: &ParseResult, css: &str, source: &Path) -> String {
    generator_for(mode)(result, css, source)
}

/// Serialize a value as a JSON literal for embedding in generated code.
fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Whether the document contributes its own stylesheet.
fn has_inline_css(result: &ParseResult) -> bool {
    result.inline_css.as_deref().is_some_and(|css| !css.is_empty())
}

/// Stylesheet import lines, emitted ahead of any exports.
fn css_import_lines(result: &ParseResult, css: &str, source: &Path, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if !css.is_empty() {
        lines.push(format!("{indent}import \"{}\";", resolve::THEME_CSS_ID));
    }
    if has_inline_css(result) {
        lines.push(format!(
            "{indent}import '{}';",
            resolve::doc_css_import(source)
        ));
    }
    lines
}

/// Import lines for each inline component module.
fn inline_import_lines(result: &ParseResult, source: &Path, indent: &str) -> Vec<String> {
    result
        .inline_components
        .iter()
        .map(|component| {
            format!(
                "{indent}import Inline{} from '{}';",
                component.index,
                resolve::inline_import(source, component.index)
            )
        })
        .collect()
}
