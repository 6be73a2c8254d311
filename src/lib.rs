//! Transform pipeline core for `.norg` documents.
//!
//! Converts parsed norg documents into ready-to-consume modules for one of
//! several target frameworks (plain HTML, Svelte, React, Vue, or
//! metadata-only), while integrating with a host bundler's incremental
//! hot-reload cycle.
//!
//! The document parser and theme CSS generation are external collaborators,
//! injected through the [`parser::NorgParser`] and [`parser::ThemeProvider`]
//! traits. This crate owns everything between them and the host: virtual
//! module identity, per-source parse caching, per-mode code generation,
//! inline component addressing, and precise invalidation of derived modules
//! on file change.
//!
//! # Example
//!
//! ```ignore
//! let options = PluginOptions::from_str(r#"
//!     mode = "svelte"
//!     theme = "forest"
//! "#)?;
//! let plugin = NorgPlugin::new(options, parser, themes)?;
//!
//! // host bundler hooks
//! let id = plugin.resolve_id("./post.norg?inline=0", Some(importer));
//! let code = plugin.load("/docs/post.norg")?;
//! let stale = plugin.handle_file_change(changed, &graph, default_ids);
//! ```

pub mod cache;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod hmr;
pub mod inline;
pub mod logger;
pub mod parser;
pub mod plugin;
pub mod resolve;
pub mod types;

pub use config::{Mode, PluginOptions, ThemePair};
pub use error::LoadError;
pub use hmr::ModuleGraph;
pub use parser::{NorgParser, ParseError, ThemeProvider};
pub use plugin::NorgPlugin;
pub use types::{Framework, InlineComponent, Metadata, ParseResult, TocEntry};
