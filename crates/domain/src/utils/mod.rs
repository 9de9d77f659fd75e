//! Domain utilities

pub mod format;
