use serde::{Deserialize, Serialize};

use crate::domain::{ProjectId, WebsiteId};

/// A user action forwarded from a view to the application context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    ToggleForm,
    EditField { field: String, value: String },
    Submit,
}

impl Intent {
    pub fn edit(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EditField {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::ToggleForm => "toggle_form",
            Intent::EditField { .. } => "edit_field",
            Intent::Submit => "submit",
        }
    }
}

/// What a submission did to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Appended {
        website_id: WebsiteId,
        project_id: ProjectId,
    },
    NoMatchingWebsite {
        website_id: WebsiteId,
    },
}

impl SubmissionOutcome {
    pub fn appended(&self) -> bool {
        matches!(self, SubmissionOutcome::Appended { .. })
    }
}
