pub mod analyzer_core;
pub mod generator;
