//! Mouse interaction for the shell.
//!
//! Components register clickable regions while rendering; the event loop
//! resolves clicks through the registry. The registry is rebuilt on every
//! render pass, so hit areas always match what is on screen.

mod click_handler;
mod hit_area;

pub use click_handler::{apply_action, handle_click, open_link};
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
