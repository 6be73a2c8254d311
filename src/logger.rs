//! Logging with colored module prefixes.
//!
//! Output goes to stderr so it never mixes with generated module text a host
//! might capture from stdout. Hosts embedding the pipeline can silence it
//! entirely with [`set_quiet`].
//!
//! # Example
//!
//! ```ignore
//! log!("hmr"; "invalidated {} modules for {}", count, path.display());
//! ```

use colored::{ColoredString, Colorize};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global quiet switch. Off by default.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress (or re-enable) all log output for this process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Write a single prefixed line, honoring the quiet switch.
pub fn log(module: &str, message: &str) {
    if QUIET.load(Ordering::Relaxed) {
        return;
    }

    let prefix = colorize_prefix(module);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module {
        "hmr" => prefix.bright_green().bold(),
        "discover" => prefix.bright_blue().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_toggle() {
        set_quiet(true);
        // Must not panic while suppressed
        log("hmr", "suppressed line");
        set_quiet(false);
    }

    #[test]
    fn test_colorize_known_modules() {
        // Prefix text survives colorization regardless of module name
        assert!(colorize_prefix("hmr").to_string().contains("[hmr]"));
        assert!(colorize_prefix("anything").to_string().contains("[anything]"));
    }
}
