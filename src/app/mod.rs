//! Application controller and state.
//!
//! [`UserAdmin`] is the single owner of the mirror and the dialog. CLI
//! commands and the interactive shell call its methods; nothing else
//! mutates state.

pub mod confirm;
pub mod controller;
pub mod state;

pub use confirm::{AlwaysConfirm, Confirm, StdinConfirm};
pub use controller::{Outcome, UserAdmin};
pub use state::{AppState, Dialog};
