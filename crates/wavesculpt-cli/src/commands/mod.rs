//! CLI command implementations.

pub mod common;
pub mod envelope;
pub mod generate;
pub mod info;
pub mod palette;
pub mod project;
pub mod segment;
