//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! remote defaults, and user-facing copy so a rename only requires
//! changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "useradmin";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.useradmin.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".useradmin.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "useradmin";

// ── Remote collaborator ─────────────────────────────────────────────

/// Base address of the placeholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Collection path appended to the base address.
pub const USERS_PATH: &str = "users";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERADMIN_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "USERADMIN_TIMEOUT_SECS";
pub const ENV_LOG: &str = "USERADMIN_LOG";
pub const ENV_CONFIRM: &str = "USERADMIN_CONFIRM";

// ── User-facing copy ────────────────────────────────────────────────

/// Department shown when the remote record carries no company.
pub const UNASSIGNED_DEPARTMENT: &str = "Not Assigned";

pub const LOAD_FAILED: &str = "Failed to load users. Please try again later.";
pub const SAVE_FAILED: &str = "Failed to save user. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";
pub const EMPTY_TABLE: &str = "No users found";

pub const CREATE_TITLE: &str = "Add New User";
pub const CREATE_SUBMIT: &str = "Add User";
pub const EDIT_TITLE: &str = "Edit User";
pub const EDIT_SUBMIT: &str = "Save Changes";

/// Number of table columns (id, first, last, email, department, actions).
pub const TABLE_COLUMNS: usize = 6;
