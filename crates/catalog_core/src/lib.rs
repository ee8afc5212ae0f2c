//! In-memory government services catalog: seed data, snapshot store,
//! submission transition and the form state machine that drives it.

pub mod config;
pub mod context;
pub mod form;
pub mod seed;
pub mod store;
pub mod transition;

pub use config::{load_settings, Settings};
pub use context::AppContext;
pub use form::{FormVisibility, SubmissionField, SubmissionForm};
pub use store::CatalogStore;
pub use transition::{apply_submission, apply_submission_with, ProjectIdStrategy, SubmissionResult};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
