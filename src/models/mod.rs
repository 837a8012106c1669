//! Shared types used across all modules.
//!
//! This module defines the user record held in the local mirror, the
//! transient form draft, and the wire shapes exchanged with the remote
//! collection. Other modules import from here rather than reaching into
//! each other's internals.

pub mod draft;
pub mod user;

pub use draft::{DraftError, Field, FormDraft};
pub use user::{Company, CreatedUser, RemoteCompany, RemoteUser, UserPayload, UserRecord};
