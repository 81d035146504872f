//! Configuration module for IslamWeb-RS
//!
//! Handles loading settings from a YAML file and environment variables.
//! Settings are owned by the application state and passed explicitly;
//! there is deliberately no process-global accessor.

mod settings;

pub use settings::*;
