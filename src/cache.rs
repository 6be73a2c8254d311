//! Per-source parse-result cache.
//!
//! Single source of truth for every module derived from a document: the
//! main module, metadata module, inline component modules and the
//! per-document stylesheet all read the same cached [`ParseResult`].
//!
//! # Concurrency
//!
//! Reads take the lock briefly; file IO and parsing happen outside it. Two
//! concurrent misses for the same path may therefore both parse, and the
//! cache keeps whichever result lands last. That transient doubled parse is
//! accepted instead of serializing misses - parses of identical content are
//! idempotent, so consumers only ever observe a valid result.

use crate::error::LoadError;
use crate::parser::NorgParser;
use crate::types::{Framework, ParseResult};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Memoizes parser output per source path.
///
/// One instance per plugin; never a process-wide singleton, so plugins for
/// different modes cannot cross-contaminate.
pub struct ParseCache {
    parser: Arc<dyn NorgParser>,
    /// Active framework, handed to the parser so it can validate `@inline`
    /// framework tags.
    framework: Option<Framework>,
    entries: RwLock<FxHashMap<PathBuf, Arc<ParseResult>>>,
}

impl ParseCache {
    pub fn new(parser: Arc<dyn NorgParser>, framework: Option<Framework>) -> Self {
        Self {
            parser,
            framework,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Return the cached parse for `source`, reading and parsing on miss.
    ///
    /// Failures (unreadable file, parser rejection) cache nothing; the next
    /// call retries from scratch.
    pub fn get_or_parse(&self, source: &Path) -> Result<Arc<ParseResult>, LoadError> {
        if let Some(hit) = self.entries.read().get(source) {
            return Ok(hit.clone());
        }

        // Miss: read and parse outside the lock (see module docs for the
        // accepted concurrent-miss behavior).
        let content = fs::read_to_string(source).map_err(|err| LoadError::Io {
            path: source.to_path_buf(),
            source: err,
        })?;
        let result = self
            .parser
            .parse(&content, self.framework)
            .map_err(|err| LoadError::Parse {
                path: source.to_path_buf(),
                source: err,
            })?;

        let result = Arc::new(result);
        self.entries
            .write()
            .insert(source.to_path_buf(), result.clone());
        Ok(result)
    }

    /// Unconditionally drop the entry for `source`. The next
    /// [`get_or_parse`](Self::get_or_parse) re-reads and re-parses.
    pub fn invalidate(&self, source: &Path) -> bool {
        self.entries.write().remove(source).is_some()
    }

    /// Whether `source` currently has a cached entry.
    pub fn contains(&self, source: &Path) -> bool {
        self.entries.read().contains_key(source)
    }
}
