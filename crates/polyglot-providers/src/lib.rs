//! # polyglot-providers
//!
//! Machine translation backends for polyglot.

pub mod google_cloud;
pub mod google_web;
