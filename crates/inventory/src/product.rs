use core::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult};

use crate::status::StockStatus;

/// Raw product record as supplied by a seed source.
///
/// Nothing is validated at this level; see [`Product::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub vendor: String,
    pub stock: i64,
    pub max_stock: i64,
    pub category: String,
    pub icon: String,
}

/// A validated, immutable product.
///
/// Invariants:
/// - `stock >= 0`
/// - `max_stock > 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    vendor: String,
    stock: u64,
    max_stock: NonZeroU64,
    category: String,
    icon: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        vendor: impl Into<String>,
        stock: i64,
        max_stock: i64,
        category: impl Into<String>,
        icon: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();

        let max_stock = u64::try_from(max_stock)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or_else(|| {
                DomainError::invariant(format!(
                    "product '{name}': maxStock must be positive (got {max_stock})"
                ))
            })?;

        let stock = u64::try_from(stock).map_err(|_| {
            DomainError::validation(format!(
                "product '{name}': stock cannot be negative (got {stock})"
            ))
        })?;

        Ok(Self {
            name,
            vendor: vendor.into(),
            stock,
            max_stock,
            category: category.into(),
            icon: icon.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn max_stock(&self) -> u64 {
        self.max_stock.get()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// `stock / max_stock`; nominally in [0, 1] but may exceed 1 when overstocked.
    pub fn stock_ratio(&self) -> f64 {
        self.stock as f64 / self.max_stock.get() as f64
    }

    /// Stock ratio as a percentage, for display.
    pub fn stock_percentage(&self) -> f64 {
        self.stock_ratio() * 100.0
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.max_stock)
    }

    pub fn is_low_stock(&self) -> bool {
        self.status() == StockStatus::Low
    }

    /// Substring match against name, vendor or category.
    ///
    /// `folded_query` must already be lowercased.
    pub(crate) fn matches_folded(&self, folded_query: &str) -> bool {
        [&self.name, &self.vendor, &self.category]
            .into_iter()
            .any(|field| field.to_lowercase().contains(folded_query))
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(
            record.name,
            record.vendor,
            record.stock,
            record.max_stock,
            record.category,
            record.icon,
        )
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            vendor: product.vendor.clone(),
            stock: i64::try_from(product.stock).unwrap_or(i64::MAX),
            max_stock: i64::try_from(product.max_stock.get()).unwrap_or(i64::MAX),
            category: product.category.clone(),
            icon: product.icon.clone(),
        }
    }
}
