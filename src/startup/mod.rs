//! Startup concerns that run before the TUI takes over the screen.

pub mod logging;
