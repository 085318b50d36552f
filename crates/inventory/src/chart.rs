//! Category bar chart tally.
//!
//! The chart has a fixed set of buckets. A product whose category is not one of
//! them is counted in no bar; `Other` is a literal label, not a catch-all. The
//! number of such products is reported as [`CategoryChart::unbucketed`].

use std::time::Duration;

use serde::Serialize;

use crate::view_model::InventoryViewModel;

/// Chart buckets, in display order.
pub const CHART_CATEGORIES: [&str; 5] = ["Oils", "Herbs", "Supplements", "Vitamins", "Other"];

/// Count that maps to a full-height (100%) bar.
pub const CHART_MAX_COUNT: usize = 5;

/// Entrance animation stagger between consecutive bars.
pub const BAR_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub category: &'static str,
    pub count: usize,
    /// `count / CHART_MAX_COUNT * 100`; not clamped.
    pub height_percent: f64,
    pub title: String,
    pub delay_ms: u64,
}

impl ChartBar {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    bars: Vec<ChartBar>,
    unbucketed: usize,
}

impl CategoryChart {
    pub fn tally(view_model: &InventoryViewModel) -> Self {
        let bars: Vec<ChartBar> = CHART_CATEGORIES
            .iter()
            .enumerate()
            .map(|(index, &category)| {
                let count = view_model.count_by_category(category);
                ChartBar {
                    category,
                    count,
                    height_percent: count as f64 / CHART_MAX_COUNT as f64 * 100.0,
                    title: format!("{category}: {count} products"),
                    delay_ms: BAR_STAGGER.as_millis() as u64 * index as u64,
                }
            })
            .collect();

        let bucketed: usize = bars.iter().map(|b| b.count).sum();
        let unbucketed = view_model.total_products() - bucketed;
        if unbucketed > 0 {
            tracing::debug!(unbucketed, "products outside the chart categories");
        }

        Self { bars, unbucketed }
    }

    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    pub fn bar(&self, category: &str) -> Option<&ChartBar> {
        self.bars.iter().find(|b| b.category == category)
    }

    /// Products whose category matches none of [`CHART_CATEGORIES`].
    pub fn unbucketed(&self) -> usize {
        self.unbucketed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::tests::{catalog, record};

    #[test]
    fn catalog_tally() {
        let chart = catalog().category_chart();

        let counts: Vec<(&str, usize)> = chart.bars().iter().map(|b| (b.category, b.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("Oils", 1),
                ("Herbs", 3),
                ("Supplements", 3),
                ("Vitamins", 1),
                ("Other", 0),
            ]
        );
        // Extracts, Tinctures, Minerals, Superfoods
        assert_eq!(chart.unbucketed(), 4);
    }

    #[test]
    fn bar_geometry() {
        let chart = catalog().category_chart();

        let herbs = chart.bar("Herbs").unwrap();
        assert!((herbs.height_percent - 60.0).abs() < 1e-9);
        assert_eq!(herbs.title, "Herbs: 3 products");
        assert_eq!(herbs.delay(), Duration::from_millis(100));

        let other = chart.bar("Other").unwrap();
        assert_eq!(other.height_percent, 0.0);
        assert_eq!(other.delay(), Duration::from_millis(400));
    }

    #[test]
    fn heights_are_not_clamped() {
        let records = (0..7).map(|i| record(&format!("oil {i}"), "v", 1, 2, "Oils"));
        let chart = InventoryViewModel::load(records).view_model.category_chart();
        assert!((chart.bar("Oils").unwrap().height_percent - 140.0).abs() < 1e-9);
    }

    #[test]
    fn literal_other_category_is_counted() {
        let vm = InventoryViewModel::load(vec![
            record("misc", "v", 1, 2, "Other"),
            record("lowercase", "v", 1, 2, "other"),
        ])
        .view_model;
        let chart = vm.category_chart();
        assert_eq!(chart.bar("Other").unwrap().count, 1);
        assert_eq!(chart.unbucketed(), 1);
    }

    #[test]
    fn empty_inventory_has_empty_bars() {
        let chart = InventoryViewModel::default().category_chart();
        assert_eq!(chart.bars().len(), CHART_CATEGORIES.len());
        assert!(chart.bars().iter().all(|b| b.count == 0));
        assert_eq!(chart.unbucketed(), 0);
    }
}
