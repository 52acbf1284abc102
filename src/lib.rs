#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal contact form: field entry, inline validation, and a display of
//! the last successfully submitted values.

pub mod config;
pub mod model;
pub mod tui;
