//! Core types for Nexora Synergy.
//!
//! This module provides type-safe wrappers for values that carry a format
//! constraint on input.

pub mod email;
pub mod id;
pub mod web_url;

pub use email::{Email, EmailError};
pub use id::DocumentId;
pub use web_url::{WebUrl, WebUrlError};
