//! The controller: owns the mirror, drives the dialog, talks to the API.
//!
//! Every operation is all-or-nothing against a single remote call. The
//! mirror is only touched after the call succeeds; failures are logged
//! with their cause and turned into a short banner message.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::api::{ApiError, UserApi};
use crate::app::confirm::Confirm;
use crate::app::state::{AppState, Dialog};
use crate::constants::{DELETE_FAILED, DELETE_PROMPT, LOAD_FAILED, SAVE_FAILED};
use crate::models::{Field, FormDraft, UserPayload, UserRecord};
use crate::progress::LoadingIndicator;
use crate::view::{PageView, Patch, ViewBinding};

/// How an operation settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded and the mirror was updated.
    Applied,
    /// The remote call failed; the banner says so.
    Failed,
    /// Nothing was sent: bad input, no open dialog, or an unknown id.
    Invalid,
    /// The user declined the confirmation prompt.
    Declined,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Synchronizes the local mirror with the remote collection.
pub struct UserAdmin {
    api: Arc<dyn UserApi>,
    state: AppState,
    loading: LoadingIndicator,
    binding: ViewBinding,
}

impl std::fmt::Debug for UserAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAdmin")
            .field("state", &self.state)
            .field("loading", &self.loading.is_active())
            .finish_non_exhaustive()
    }
}

impl UserAdmin {
    pub fn new(api: Arc<dyn UserApi>, loading: LoadingIndicator) -> Self {
        Self {
            api,
            state: AppState::default(),
            loading,
            binding: ViewBinding::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The mirror.
    pub fn users(&self) -> &[UserRecord] {
        &self.state.users
    }

    pub fn banner(&self) -> Option<&str> {
        self.state.banner.as_deref()
    }

    pub fn dialog(&self) -> &Dialog {
        &self.state.dialog
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    /// Fetch the full collection and replace the mirror with it.
    pub async fn load(&mut self) -> Outcome {
        let result = {
            let _guard = self.loading.begin("Loading users…");
            self.api.list_users().await
        };

        match result {
            Ok(remote) => {
                self.state.users = remote.into_iter().map(UserRecord::from).collect();
                self.state.banner = None;
                info!(count = self.state.users.len(), "loaded users");
                Outcome::Applied
            }
            Err(e) => {
                error!(error = %e, transport = e.is_transport(), "failed to load users");
                self.state.banner = Some(LOAD_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    /// Open the dialog in create mode with an empty draft.
    pub fn open_create(&mut self) {
        self.state.dialog = Dialog::Creating {
            draft: FormDraft::default(),
        };
    }

    /// Open the dialog in edit mode for `id`.
    ///
    /// Returns false, leaving the dialog untouched, when the mirror has no
    /// such record.
    pub fn open_edit(&mut self, id: u64) -> bool {
        let Some(record) = self.state.find(id).cloned() else {
            return false;
        };
        self.state.dialog = Dialog::Editing {
            draft: FormDraft::from_record(&record),
            record,
        };
        true
    }

    /// Close the dialog and discard the draft, however it was opened.
    pub fn close_dialog(&mut self) {
        self.state.dialog = Dialog::Closed;
    }

    /// Write one input of the open draft. Returns false when no dialog is open.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.state.dialog.draft_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Submit the open dialog: create in create mode, update in edit mode.
    ///
    /// On success the dialog closes; on any failure it stays open with
    /// the draft intact.
    pub async fn submit(&mut self) -> Outcome {
        let (draft, editing) = match &self.state.dialog {
            Dialog::Closed => return Outcome::Invalid,
            Dialog::Creating { draft } => (draft.clone(), None),
            Dialog::Editing { record, draft } => (draft.clone(), Some(record.id)),
        };

        if let Err(e) = draft.validate() {
            warn!(error = %e, "form constraint failed");
            self.state.banner = Some(e.to_string());
            return Outcome::Invalid;
        }

        let payload = UserPayload::from(&draft);
        let result = {
            let _guard = self.loading.begin("Saving user…");
            match editing {
                Some(id) => self.api.update_user(id, &payload).await.map(|()| id),
                None => self.api.create_user(&payload).await,
            }
        };

        let result = match (editing, result) {
            (_, Err(e)) => Err(e),
            (Some(id), Ok(_)) => {
                if let Some(user) = self.state.users.iter_mut().find(|u| u.id == id) {
                    user.apply_draft(&draft);
                }
                info!(id, "updated user");
                Ok(())
            }
            // Ids stay unique in the mirror, even if the server reuses one.
            (None, Ok(id)) if self.state.find(id).is_some() => Err(ApiError::DuplicateId(id)),
            (None, Ok(id)) => {
                self.state.users.push(UserRecord::from_draft(id, &draft));
                info!(id, "created user");
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                self.close_dialog();
                self.state.banner = None;
                Outcome::Applied
            }
            Err(e) => {
                error!(error = %e, transport = e.is_transport(), id = ?editing, "failed to save user");
                self.state.banner = Some(SAVE_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    /// Delete `id` after asking `confirm`.
    ///
    /// A declined prompt sends nothing. Ids missing from the mirror are
    /// rejected without a request.
    pub async fn delete(&mut self, id: u64, confirm: &dyn Confirm) -> Outcome {
        if self.state.find(id).is_none() {
            self.state.banner = Some(format!("No user with id {id}."));
            return Outcome::Invalid;
        }
        if !confirm.confirm(DELETE_PROMPT) {
            info!(id, "delete declined");
            return Outcome::Declined;
        }

        let result = {
            let _guard = self.loading.begin("Deleting user…");
            self.api.delete_user(id).await
        };

        match result {
            Ok(()) => {
                self.state.users.retain(|u| u.id != id);
                self.state.banner = None;
                info!(id, "deleted user");
                Outcome::Applied
            }
            Err(e) => {
                error!(error = %e, transport = e.is_transport(), id, "failed to delete user");
                self.state.banner = Some(DELETE_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    /// Derive the current page.
    pub fn page(&self) -> PageView {
        PageView::from_state(&self.state, self.loading.is_active())
    }

    /// Bind the current table to the view and return what changed since
    /// the previous bind.
    pub fn render(&mut self) -> Vec<Patch> {
        let page = self.page();
        self.binding.bind(page.table)
    }
}
