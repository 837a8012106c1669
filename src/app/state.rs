//! Application state owned by the controller.

use crate::constants::{CREATE_SUBMIT, CREATE_TITLE, EDIT_SUBMIT, EDIT_TITLE};
use crate::models::{FormDraft, UserRecord};

/// The edit dialog and whatever it is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    /// Adding a new user; nothing exists remotely yet.
    Creating { draft: FormDraft },
    /// Editing `record`, a snapshot taken when the dialog opened.
    Editing { record: UserRecord, draft: FormDraft },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { draft } | Dialog::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { draft } | Dialog::Editing { draft, .. } => Some(draft),
        }
    }

    /// Dialog heading, `None` when closed.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { .. } => Some(CREATE_TITLE),
            Dialog::Editing { .. } => Some(EDIT_TITLE),
        }
    }

    /// Submit button label, `None` when closed.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { .. } => Some(CREATE_SUBMIT),
            Dialog::Editing { .. } => Some(EDIT_SUBMIT),
        }
    }
}

/// Everything the views are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// The mirror, in last-fetched / edited order.
    pub users: Vec<UserRecord>,
    pub dialog: Dialog,
    /// Error banner text; `None` hides the banner.
    pub banner: Option<String>,
}

impl AppState {
    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }
}
