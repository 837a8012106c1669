//! The editable field set bound to the open dialog.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::models::user::UserRecord;

/// One of the four editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Field {
    #[strum(to_string = "first_name", serialize = "firstname", serialize = "first")]
    FirstName,
    #[strum(to_string = "last_name", serialize = "lastname", serialize = "last")]
    LastName,
    Email,
    #[strum(to_string = "department", serialize = "dept")]
    Department,
}

impl Field {
    /// Input label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Department => "Department",
        }
    }
}

/// A form field failed its input constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// The transient form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl FormDraft {
    /// Populate a draft from an existing record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Department => &mut self.department,
        };
        *slot = value.into();
    }

    /// Check the input constraints the form enforces before submitting.
    ///
    /// Names and email are required; the email needs a local part and a
    /// domain around a single `@`. Department may be left blank.
    pub fn validate(&self) -> Result<(), DraftError> {
        for field in [Field::FirstName, Field::LastName, Field::Email] {
            if self.get(field).trim().is_empty() {
                return Err(DraftError::Required(field));
            }
        }

        match self.email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(DraftError::InvalidEmail(self.email.clone())),
        }
    }
}
