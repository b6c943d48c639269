//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::services::StylistService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the immutable catalog, and the stylist service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    stylist: StylistService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads and validates the embedded catalog fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fixture is invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load()?;
        let stylist = StylistService::new(&config.gemini);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                stylist,
            }),
        })
    }

    /// Build state from already-constructed parts. Used by tests.
    #[must_use]
    pub fn from_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        stylist: StylistService,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                stylist,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the stylist service.
    #[must_use]
    pub fn stylist(&self) -> &StylistService {
        &self.inner.stylist
    }
}
