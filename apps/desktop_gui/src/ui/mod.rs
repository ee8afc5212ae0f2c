//! UI layer for the catalog desktop app: app shell, website cards, form, and themes.

pub mod app;
pub mod theme;

pub use app::CatalogApp;
