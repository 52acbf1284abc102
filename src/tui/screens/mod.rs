//! TUI screen implementations.

pub mod contact_form;
pub mod help;

pub use contact_form::{ContactFormState, ContactFormView, InputView, draw_contact_form};
pub use help::{HelpOverlay, draw_help};
