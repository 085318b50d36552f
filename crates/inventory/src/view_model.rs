use std::collections::HashSet;

use serde::Serialize;

use stockboard_core::{DomainError, DomainResult};

use crate::chart::CategoryChart;
use crate::product::{Product, ProductRecord};
use crate::status::StockStatus;

/// A seed record that failed validation and was left out of the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Zero-based position in the seed source.
    pub position: usize,
    pub name: String,
    pub error: DomainError,
}

/// Result of loading a seed: the usable products plus everything rejected.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub view_model: InventoryViewModel,
    pub rejected: Vec<RejectedRecord>,
}

/// The three dashboard counters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub low_stock: usize,
    pub vendors: usize,
}

/// Read-only product set with pure query/aggregation operations.
///
/// Load order is preserved and the set is never mutated after construction, so
/// every query is a function of its arguments alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryViewModel {
    products: Vec<Product>,
}

impl InventoryViewModel {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Validate seed records and build a view model from the valid ones.
    ///
    /// Invalid records (e.g. `maxStock <= 0`) are skipped with a warning; they
    /// never reach classification or percentage arithmetic.
    pub fn load<I>(records: I) -> LoadOutcome
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        let mut products = Vec::new();
        let mut rejected = Vec::new();

        for (position, record) in records.into_iter().enumerate() {
            let name = record.name.clone();
            match Product::try_from(record) {
                Ok(product) => products.push(product),
                Err(error) => {
                    tracing::warn!(
                        position,
                        product = %name,
                        error = %error,
                        "rejecting product record"
                    );
                    rejected.push(RejectedRecord {
                        position,
                        name,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            loaded = products.len(),
            rejected = rejected.len(),
            "inventory loaded"
        );

        LoadOutcome {
            view_model: Self::new(products),
            rejected,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Like [`get`](Self::get), but a miss is reported as `NotFound`.
    pub fn require(&self, index: usize) -> DomainResult<&Product> {
        self.get(index).ok_or_else(|| {
            DomainError::not_found(format!(
                "no product at position {index} (have {})",
                self.products.len()
            ))
        })
    }

    pub fn total_products(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive substring search over name, vendor and category.
    ///
    /// An empty query returns every product. Results keep load order.
    pub fn filter(&self, query: &str) -> Vec<&Product> {
        let folded = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_folded(&folded))
            .collect()
    }

    pub fn classify(&self, product: &Product) -> StockStatus {
        product.status()
    }

    /// Number of products whose category equals `category` exactly (case-sensitive).
    pub fn count_by_category(&self, category: &str) -> usize {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .count()
    }

    pub fn low_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_low_stock()).count()
    }

    pub fn distinct_vendor_count(&self) -> usize {
        self.products
            .iter()
            .map(Product::vendor)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total_products: self.total_products(),
            low_stock: self.low_stock_count(),
            vendors: self.distinct_vendor_count(),
        }
    }

    pub fn category_chart(&self) -> CategoryChart {
        CategoryChart::tally(self)
    }
}
