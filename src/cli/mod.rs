//! CLI entry points for Questfolio.
//!
//! The TUI itself takes no flags; the only command-line surface is version
//! output. The dispatcher is called early in main(), before the terminal
//! is touched.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, VERSION};
