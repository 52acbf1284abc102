//! Reusable TUI widgets.

pub mod display;
pub mod form;
pub mod status_bar;

pub use display::{DisplayNode, DisplayView, draw_display};
pub use form::{Form, FormField, draw_form, error_text};
pub use status_bar::{StatusBarContext, draw_status_bar};
