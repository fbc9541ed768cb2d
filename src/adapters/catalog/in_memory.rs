//! In-memory catalog source.
//!
//! Serves catalog collections from fixtures held in memory. Each collection
//! can be made to fail independently, which is how partial-failure loads are
//! exercised in tests and during offline development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{Building, MenuItem, Vendor};
use crate::ports::{CatalogSource, TransportError};

#[derive(Debug, Default)]
struct Fixtures {
    menu_items: Vec<MenuItem>,
    vendors: Vec<Vendor>,
    buildings: Vec<Building>,
    menu_items_failure: Option<TransportError>,
    vendors_failure: Option<TransportError>,
    buildings_failure: Option<TransportError>,
}

/// Fixture-backed catalog source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    fixtures: Arc<RwLock<Fixtures>>,
}

impl InMemoryCatalogSource {
    /// Create an empty catalog source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-loaded with the given collections.
    pub fn with_catalog(
        menu_items: Vec<MenuItem>,
        vendors: Vec<Vendor>,
        buildings: Vec<Building>,
    ) -> Self {
        Self {
            fixtures: Arc::new(RwLock::new(Fixtures {
                menu_items,
                vendors,
                buildings,
                ..Fixtures::default()
            })),
        }
    }

    pub async fn set_menu_items(&self, menu_items: Vec<MenuItem>) {
        self.fixtures.write().await.menu_items = menu_items;
    }

    pub async fn set_vendors(&self, vendors: Vec<Vendor>) {
        self.fixtures.write().await.vendors = vendors;
    }

    pub async fn set_buildings(&self, buildings: Vec<Building>) {
        self.fixtures.write().await.buildings = buildings;
    }

    /// Make every following menu-item fetch fail with `error`.
    pub async fn fail_menu_items(&self, error: TransportError) {
        self.fixtures.write().await.menu_items_failure = Some(error);
    }

    /// Make every following vendor fetch fail with `error`.
    pub async fn fail_vendors(&self, error: TransportError) {
        self.fixtures.write().await.vendors_failure = Some(error);
    }

    /// Make every following building fetch fail with `error`.
    pub async fn fail_buildings(&self, error: TransportError) {
        self.fixtures.write().await.buildings_failure = Some(error);
    }

    /// Clear all injected failures.
    pub async fn heal(&self) {
        let mut fixtures = self.fixtures.write().await;
        fixtures.menu_items_failure = None;
        fixtures.vendors_failure = None;
        fixtures.buildings_failure = None;
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, TransportError> {
        let fixtures = self.fixtures.read().await;
        match &fixtures.menu_items_failure {
            Some(error) => Err(error.clone()),
            None => Ok(fixtures.menu_items.clone()),
        }
    }

    async fn list_vendors(&self) -> Result<Vec<Vendor>, TransportError> {
        let fixtures = self.fixtures.read().await;
        match &fixtures.vendors_failure {
            Some(error) => Err(error.clone()),
            None => Ok(fixtures.vendors.clone()),
        }
    }

    async fn list_buildings(&self) -> Result<Vec<Building>, TransportError> {
        let fixtures = self.fixtures.read().await;
        match &fixtures.buildings_failure {
            Some(error) => Err(error.clone()),
            None => Ok(fixtures.buildings.clone()),
        }
    }
}
