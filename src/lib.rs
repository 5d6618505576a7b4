//! Markup Calculator Service Library
//!
//! This library provides the pricing calculation core and the thin
//! authenticated HTTP shell around it.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::pricing;
pub use modules::sessions;
