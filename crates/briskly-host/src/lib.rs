//! Terminal presentation layer for the briskly pacing engine.
//!
//! Stands in for the excluded UI: renders the core's [`Frame`] view model
//! to a writer and supplies the layout measurement scroll mode needs.
//!
//! [`Frame`]: briskly_core::render::Frame

pub mod layout;
pub mod render;
