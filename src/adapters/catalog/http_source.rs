//! HTTP catalog source - `CatalogSource` over the catalog service's JSON API.
//!
//! # Endpoints
//!
//! - `GET {base_url}/menus` - menu items
//! - `GET {base_url}/tenants` - vendors
//! - `GET {base_url}/buildings` - delivery buildings
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpCatalogConfig::new("https://catalog.example.com/api")
//!     .with_token(token)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let source = HttpCatalogSource::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::wire::{BuildingDto, Collection, MenuItemDto, TenantDto};
use crate::domain::catalog::{Building, MenuItem, Vendor};
use crate::ports::{CatalogSource, TransportError};

/// Configuration for the HTTP catalog source.
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
    /// Base URL of the catalog API, without trailing slash.
    pub base_url: String,
    /// Optional bearer token.
    token: Option<Secret<String>>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpCatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: Secret<String>) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Catalog source backed by the remote catalog service.
pub struct HttpCatalogSource {
    config: HttpCatalogConfig,
    client: Client,
}

impl HttpCatalogSource {
    /// Creates a source with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Network` if the client cannot be built.
    pub fn new(config: HttpCatalogConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn map_send_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            TransportError::network(format!("Connection failed: {}", e))
        } else {
            TransportError::network(e.to_string())
        }
    }

    async fn send(&self, path: &str) -> Result<Response, TransportError> {
        let mut request = self
            .client
            .get(self.config.url(path))
            .header("Accept", "application/json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, TransportError> {
        tracing::debug!(path, "Fetching catalog collection");

        let result = async {
            let response = self.send(path).await?;
            let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;
            serde_json::from_slice::<Collection<T>>(&body)
                .map(Collection::into_vec)
                .map_err(|e| TransportError::decode(e.to_string()))
        }
        .await;

        if let Err(error) = &result {
            tracing::warn!(path, %error, "Catalog request failed");
        }
        result
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, TransportError> {
        let items: Vec<MenuItemDto> = self.fetch("menus").await?;
        Ok(items.into_iter().map(MenuItem::from).collect())
    }

    async fn list_vendors(&self) -> Result<Vec<Vendor>, TransportError> {
        let tenants: Vec<TenantDto> = self.fetch("tenants").await?;
        Ok(tenants.into_iter().map(Vendor::from).collect())
    }

    async fn list_buildings(&self) -> Result<Vec<Building>, TransportError> {
        let buildings: Vec<BuildingDto> = self.fetch("buildings").await?;
        Ok(buildings.into_iter().map(Building::from).collect())
    }
}
