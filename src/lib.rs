//! useradmin: list, create, edit and delete users on a REST collection
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod progress;
pub mod shell;
pub mod view;
