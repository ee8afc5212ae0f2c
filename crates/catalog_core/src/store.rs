use std::sync::Arc;

use shared::domain::Catalog;

use crate::seed::seed_catalog;

/// Holds the current catalog snapshot. Snapshots are never patched in place;
/// [`CatalogStore::replace`] swaps the whole value.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    current: Arc<Catalog>,
    revision: u64,
}

impl CatalogStore {
    pub fn initialize() -> Self {
        Self::with_catalog(seed_catalog())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(catalog),
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.current
    }

    /// Bumped on every [`CatalogStore::replace`], including no-op swaps.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, next: Catalog) {
        self.current = Arc::new(next);
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(
            revision = self.revision,
            websites = self.current.len(),
            projects = self.current.project_count(),
            "catalog snapshot replaced"
        );
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::initialize()
    }
}
