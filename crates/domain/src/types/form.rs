//! Modal form description and submissions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    TOKEN_FIELD_ID, TOKEN_FIELD_LABEL, TOKEN_FIELD_PLACEHOLDER, TOKEN_MODAL_ID, TOKEN_MODAL_TITLE,
};
use crate::errors::{GuildMeetError, Result};

/// Single-line text input inside a modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputField {
    pub custom_id: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
}

/// Modal the host platform renders for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalForm {
    pub custom_id: String,
    pub title: String,
    pub fields: Vec<TextInputField>,
}

impl ModalForm {
    /// The one-field form used to paste a Meetup.com authorization code.
    #[must_use]
    pub fn meetup_token() -> Self {
        Self {
            custom_id: TOKEN_MODAL_ID.to_string(),
            title: TOKEN_MODAL_TITLE.to_string(),
            fields: vec![TextInputField {
                custom_id: TOKEN_FIELD_ID.to_string(),
                label: TOKEN_FIELD_LABEL.to_string(),
                placeholder: Some(TOKEN_FIELD_PLACEHOLDER.to_string()),
                required: true,
            }],
        }
    }
}

/// Values submitted for a modal, keyed by field custom id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalSubmission {
    pub custom_id: String,
    pub values: HashMap<String, String>,
}

impl ModalSubmission {
    pub fn new(custom_id: impl Into<String>) -> Self {
        Self { custom_id: custom_id.into(), values: HashMap::new() }
    }

    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Trimmed, non-empty value of a required field.
    ///
    /// # Errors
    /// Returns `GuildMeetError::InvalidInput` when the field is absent or blank.
    pub fn required_value(&self, field: &str) -> Result<&str> {
        self.values
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                GuildMeetError::InvalidInput(format!(
                    "modal '{}' is missing required field '{field}'",
                    self.custom_id
                ))
            })
    }
}
