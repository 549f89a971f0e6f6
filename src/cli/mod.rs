//! CLI command handlers

pub mod commands;

pub use commands::{export, import, lines_to_spreadsheet, spreadsheet_to_lines};

use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Single-dash spellings of the long mode flags (`-in file.xlsx`)
const SINGLE_DASH_FLAGS: [&str; 2] = ["in", "out"];

/// Rewrite `-in`/`-out` (and `-in=path`) to their `--` forms so clap accepts them
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or_default();
            if !rest.starts_with('-') && SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Initialize tracing on stderr; stdout is reserved for exported rows
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "xl=debug" } else { "xl=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
