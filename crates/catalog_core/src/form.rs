//! Submission form state: visibility plus the pending draft.

use std::{mem, str::FromStr};

use shared::{
    domain::{PendingSubmission, WebsiteId},
    error::CatalogError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible,
}

impl FormVisibility {
    pub fn toggled(self) -> Self {
        match self {
            FormVisibility::Hidden => FormVisibility::Visible,
            FormVisibility::Visible => FormVisibility::Hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionField {
    Name,
    Description,
    WebsiteId,
}

impl SubmissionField {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionField::Name => "name",
            SubmissionField::Description => "description",
            SubmissionField::WebsiteId => "websiteId",
        }
    }
}

impl FromStr for SubmissionField {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "name" => Ok(SubmissionField::Name),
            "description" => Ok(SubmissionField::Description),
            "websiteId" | "website_id" => Ok(SubmissionField::WebsiteId),
            other => Err(CatalogError::UnknownField(other.to_string())),
        }
    }
}

/// Selector values that don't parse as an integer fall back to "no website".
pub fn parse_website_selection(raw: &str) -> WebsiteId {
    raw.trim()
        .parse::<i64>()
        .map(WebsiteId)
        .unwrap_or(WebsiteId::UNSELECTED)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    visibility: FormVisibility,
    draft: PendingSubmission,
}

impl SubmissionForm {
    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == FormVisibility::Visible
    }

    pub fn draft(&self) -> &PendingSubmission {
        &self.draft
    }

    pub fn toggle(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Updates one draft field by its form name. Ignored while hidden.
    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<(), CatalogError> {
        let field = field.parse::<SubmissionField>()?;
        self.set(field, value);
        Ok(())
    }

    pub(crate) fn set(&mut self, field: SubmissionField, value: &str) {
        if !self.is_visible() {
            tracing::debug!(field = field.as_str(), "edit ignored while form is hidden");
            return;
        }
        match field {
            SubmissionField::Name => self.draft.name = value.to_string(),
            SubmissionField::Description => self.draft.description = value.to_string(),
            SubmissionField::WebsiteId => self.draft.website_id = parse_website_selection(value),
        }
    }

    /// Hides the form and hands back the draft, leaving an empty one behind.
    pub fn close_and_reset(&mut self) -> PendingSubmission {
        self.visibility = FormVisibility::Hidden;
        mem::take(&mut self.draft)
    }
}
