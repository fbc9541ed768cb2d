//! JSON shapes served by the catalog service.
//!
//! The service is loose about types: prices come as text or numbers,
//! timestamps may be missing or malformed, and collections are sometimes
//! wrapped in a `data` envelope. Everything is normalized here before it
//! reaches the domain records.

use serde::Deserialize;

use crate::domain::catalog::{Building, MenuItem, Vendor};
use crate::domain::foundation::{BuildingId, MenuItemId, Timestamp, VendorId};

/// A collection response, bare or enveloped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum Collection<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Collection<T> {
    pub(super) fn into_vec(self) -> Vec<T> {
        match self {
            Collection::Bare(items) | Collection::Wrapped { data: items } => items,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Text(String),
    Number(serde_json::Number),
}

impl WirePrice {
    fn into_text(self) -> String {
        match self {
            WirePrice::Text(text) => text,
            WirePrice::Number(number) => number.to_string(),
        }
    }
}

fn timestamp(raw: Option<String>) -> Option<Timestamp> {
    raw.as_deref().and_then(Timestamp::parse_rfc3339)
}

#[derive(Debug, Deserialize)]
pub(super) struct MenuItemDto {
    id: i64,
    name: String,
    #[serde(default)]
    price: Option<WirePrice>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, alias = "tenant")]
    tenant_name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<MenuItemDto> for MenuItem {
    fn from(dto: MenuItemDto) -> Self {
        MenuItem {
            id: MenuItemId::new(dto.id),
            name: dto.name,
            price: dto.price.map(WirePrice::into_text).unwrap_or_default(),
            description: dto.description,
            image: dto.image,
            vendor_name: dto.tenant_name,
            category: dto.category,
            created_at: timestamp(dto.created_at),
            updated_at: timestamp(dto.updated_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TenantDto {
    id: i64,
    name: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<TenantDto> for Vendor {
    fn from(dto: TenantDto) -> Self {
        Vendor {
            id: VendorId::new(dto.id),
            name: dto.name,
            phone: dto.phone,
            status: dto.status,
            created_at: timestamp(dto.created_at),
            updated_at: timestamp(dto.updated_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct BuildingDto {
    id: i64,
    name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<BuildingDto> for Building {
    fn from(dto: BuildingDto) -> Self {
        Building {
            id: BuildingId::new(dto.id),
            name: dto.name,
            address: dto.address,
            description: dto.description,
        }
    }
}
