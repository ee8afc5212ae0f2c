use std::sync::Arc;

use shared::{
    domain::Catalog,
    error::CatalogError,
    protocol::{Intent, SubmissionOutcome},
};

use crate::{
    config::Settings,
    form::SubmissionForm,
    store::CatalogStore,
    transition::{apply_submission_with, ProjectIdStrategy},
};

/// Session state owned by the composition root and handed to views.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    store: CatalogStore,
    form: SubmissionForm,
    id_strategy: ProjectIdStrategy,
}

impl AppContext {
    pub fn new(settings: &Settings) -> Self {
        Self::with_store(CatalogStore::initialize(), settings.project_id_strategy)
    }

    pub fn with_store(store: CatalogStore, id_strategy: ProjectIdStrategy) -> Self {
        Self {
            store,
            form: SubmissionForm::default(),
            id_strategy,
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.store.snapshot()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn toggle_form(&mut self) {
        self.form.toggle();
        tracing::debug!(visible = self.form.is_visible(), "submission form toggled");
    }

    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<(), CatalogError> {
        self.form.edit_field(field, value).inspect_err(|err| {
            tracing::warn!(field, error = %err, "rejected submission field edit");
        })
    }

    /// Runs the submission transition, commits the new snapshot, then hides
    /// and resets the form whether or not a website matched.
    pub fn submit(&mut self) -> SubmissionOutcome {
        let result =
            apply_submission_with(self.store.catalog(), self.form.draft(), self.id_strategy);
        self.store.replace(result.catalog);
        let draft = self.form.close_and_reset();

        match result.outcome {
            SubmissionOutcome::Appended {
                website_id,
                project_id,
            } => {
                tracing::info!(
                    %website_id,
                    %project_id,
                    name = %draft.name,
                    "project submitted"
                );
            }
            SubmissionOutcome::NoMatchingWebsite { website_id } => {
                tracing::warn!(%website_id, "submission matched no website; catalog unchanged");
            }
        }
        result.outcome
    }

    /// Applies one forwarded intent. Only `Submit` yields an outcome.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<SubmissionOutcome>, CatalogError> {
        match intent {
            Intent::ToggleForm => {
                self.toggle_form();
                Ok(None)
            }
            Intent::EditField { field, value } => {
                self.edit_field(&field, &value)?;
                Ok(None)
            }
            Intent::Submit => Ok(Some(self.submit())),
        }
    }
}
