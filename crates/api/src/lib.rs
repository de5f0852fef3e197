//! Nexora Synergy API library.
//!
//! This crate provides the content API as a library, allowing the router
//! to be served by the binary and exercised by integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::router;
pub use config::ApiConfig;
pub use db::Store;
pub use state::AppState;
