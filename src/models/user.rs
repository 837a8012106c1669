//! User records and their remote representation.

use serde::{Deserialize, Serialize};

use crate::constants::UNASSIGNED_DEPARTMENT;
use crate::models::draft::FormDraft;

/// A user as held in the local mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier. Never changes after creation.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserRecord {
    /// Combine a server-assigned id with the submitted draft fields.
    pub fn from_draft(id: u64, draft: &FormDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            department: draft.department.clone(),
        }
    }

    /// Overwrite every non-id field with the draft's values.
    pub fn apply_draft(&mut self, draft: &FormDraft) {
        self.first_name.clone_from(&draft.first_name);
        self.last_name.clone_from(&draft.last_name);
        self.email.clone_from(&draft.email);
        self.department.clone_from(&draft.department);
    }
}

/// Nested company object sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// Company as read back from the server, where `name` may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteCompany {
    #[serde(default)]
    pub name: Option<String>,
}

/// A user as returned by the remote collection.
///
/// Only the fields the mirror needs are decoded; anything else the
/// server sends (address, phone, website) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<RemoteCompany>,
}

impl From<RemoteUser> for UserRecord {
    fn from(remote: RemoteUser) -> Self {
        // Single-space tokens: token 0 is the first name, token 1 the last.
        // Any further tokens are dropped.
        let mut parts = remote.name.split(' ');
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.next().unwrap_or_default().to_string();

        let department = remote
            .company
            .and_then(|c| c.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNASSIGNED_DEPARTMENT.to_string());

        Self {
            id: remote.id,
            first_name,
            last_name,
            email: remote.email,
            department,
        }
    }
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub company: Company,
}

impl From<&FormDraft> for UserPayload {
    fn from(draft: &FormDraft) -> Self {
        Self {
            name: format!("{} {}", draft.first_name, draft.last_name),
            email: draft.email.clone(),
            company: Company {
                name: draft.department.clone(),
            },
        }
    }
}

/// Response body of a create. Other echoed fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedUser {
    pub id: u64,
}
