//! Nexora Synergy Core - Content schemas and validated types.
//!
//! This crate provides the record types shared by the API server and the CLI:
//! - `api` - Public content API (services, projects, blog, testimonials)
//! - `cli` - Operator tooling for provisioning content
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. Validation happens during deserialization, so a record
//! that exists as a value is a valid record.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, web URLs, and document IDs
//! - [`schema`] - Content and submission records, and the collections they live in

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;
