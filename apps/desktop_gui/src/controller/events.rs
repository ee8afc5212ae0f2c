//! UI-facing error modeling for the catalog controller.

use shared::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Queue,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    QueueIntent,
    ApplyIntent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn queue_full() -> Self {
        Self {
            category: UiErrorCategory::Queue,
            context: UiErrorContext::QueueIntent,
            message: "UI intent queue is full; please retry".to_string(),
        }
    }

    pub fn queue_disconnected() -> Self {
        Self {
            category: UiErrorCategory::Queue,
            context: UiErrorContext::QueueIntent,
            message: "Intent processor disconnected; restart the application".to_string(),
        }
    }

    pub fn from_catalog_error(err: &CatalogError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::ApplyIntent,
            message: format!("Form update rejected: {err}"),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
