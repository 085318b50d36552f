//! Dashboard state: the view model plus everything the screen shows.

use stockboard_core::{DomainError, DomainResult};
use stockboard_inventory::{CategoryChart, InventorySummary, InventoryViewModel, Product};

use crate::activity::{ActivityEntry, ActivityFeed};
use crate::card::{ProductCard, cards_for};
use crate::counter::CounterBoard;
use crate::notification::NotificationCenter;

#[derive(Debug, Clone)]
pub struct Dashboard {
    inventory: InventoryViewModel,
    summary: InventorySummary,
    chart: CategoryChart,
    query: String,
    counters: CounterBoard,
    feed: ActivityFeed,
    notifications: NotificationCenter,
}

impl Dashboard {
    pub fn new(inventory: InventoryViewModel) -> Self {
        // The product set is fixed, so counters and chart are derived once.
        let summary = inventory.summary();
        let chart = inventory.category_chart();
        Self {
            inventory,
            summary,
            chart,
            query: String::new(),
            counters: CounterBoard::default(),
            feed: ActivityFeed::default(),
            notifications: NotificationCenter::new(),
        }
    }

    pub fn inventory(&self) -> &InventoryViewModel {
        &self.inventory
    }

    pub fn summary(&self) -> InventorySummary {
        self.summary
    }

    pub fn chart(&self) -> &CategoryChart {
        &self.chart
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "search query changed");
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.inventory.filter(&self.query)
    }

    pub fn visible_cards(&self) -> Vec<ProductCard> {
        cards_for(&self.visible_products())
    }

    /// Product behind the card at `position` in the current grid.
    pub fn visible_product(&self, position: usize) -> DomainResult<&Product> {
        let visible = self.visible_products();
        visible.get(position).copied().ok_or_else(|| {
            DomainError::not_found(format!(
                "no card at position {} (showing {})",
                position + 1,
                visible.len()
            ))
        })
    }

    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    pub fn counters_mut(&mut self) -> &mut CounterBoard {
        &mut self.counters
    }

    pub fn feed(&self) -> &ActivityFeed {
        &self.feed
    }

    pub fn record_activity(&mut self, entry: ActivityEntry) {
        self.feed.push(entry);
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }
}
