//! View models and renderers: HTML, terminal, JSON.
//!
//! The controller never builds markup. It derives a [`PageView`] from its
//! state and hands it to a [`ViewRenderer`]; [`ViewBinding`] tracks the
//! last bound table so callers can apply only what changed.

pub mod binding;
pub mod html;
pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::app::{AppState, Dialog};
use crate::models::{Field, UserRecord};

pub use binding::{Patch, ViewBinding};

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl From<&UserRecord> for RowView {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }
}

/// Contents of the table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "rows", rename_all = "lowercase")]
pub enum TableBody {
    /// An operation is in flight; a single spinner row.
    Loading,
    /// The mirror is empty; a single placeholder row.
    Empty,
    /// One row per record, never empty.
    Rows(Vec<RowView>),
}

impl TableBody {
    /// Number of `<tr>` elements this body renders to.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Loading | TableBody::Empty => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// The open edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogView {
    pub title: String,
    pub submit_label: String,
    /// Id of the record being edited; `None` in create mode.
    pub editing: Option<u64>,
    pub fields: Vec<FieldView>,
}

/// A labelled input and its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub table: TableBody,
    pub dialog: Option<DialogView>,
    pub banner: Option<String>,
}

impl PageView {
    /// Derive the page from controller state.
    pub fn from_state(state: &AppState, loading: bool) -> Self {
        let table = if loading {
            TableBody::Loading
        } else if state.users.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(state.users.iter().map(RowView::from).collect())
        };

        let dialog = state.dialog.draft().map(|draft| DialogView {
            title: state.dialog.title().unwrap_or_default().to_string(),
            submit_label: state.dialog.submit_label().unwrap_or_default().to_string(),
            editing: match &state.dialog {
                Dialog::Editing { record, .. } => Some(record.id),
                _ => None,
            },
            fields: [Field::FirstName, Field::LastName, Field::Email, Field::Department]
                .into_iter()
                .map(|field| FieldView {
                    name: field.to_string(),
                    label: field.label().to_string(),
                    value: draft.get(field).to_string(),
                })
                .collect(),
        });

        Self {
            table,
            dialog,
            banner: state.banner.clone().filter(|b| !b.is_empty()),
        }
    }
}

/// Trait for rendering a page to an output format.
pub trait ViewRenderer {
    fn render(&self, page: &PageView) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFormat {
    #[default]
    Terminal,
    Html,
    Json,
}

impl ViewFormat {
    /// Render a page using the renderer for this format.
    pub fn render(&self, page: &PageView) -> String {
        match self {
            ViewFormat::Terminal => terminal::TerminalRenderer.render(page),
            ViewFormat::Html => html::HtmlRenderer.render(page),
            ViewFormat::Json => json::JsonRenderer.render(page),
        }
    }
}
