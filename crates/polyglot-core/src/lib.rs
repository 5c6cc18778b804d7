//! # polyglot-core
//!
//! Core types, traits, configuration, and error handling for polyglot.

pub mod config;
pub mod error;
pub mod locale;
pub mod placeholder;
pub mod table;
pub mod traits;
pub mod translate;
