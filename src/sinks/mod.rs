//! Output sinks.

pub mod pdf;
