//! Inventory view model.
//!
//! Holds the dashboard's product set and answers queries over it (search,
//! stock classification, counters, category tally). Pure domain logic: no IO,
//! no rendering, no timers.

pub mod chart;
pub mod product;
pub mod status;
pub mod view_model;

pub use chart::{BAR_STAGGER, CHART_CATEGORIES, CHART_MAX_COUNT, CategoryChart, ChartBar};
pub use product::{Product, ProductRecord};
pub use status::StockStatus;
pub use view_model::{InventorySummary, InventoryViewModel, LoadOutcome, RejectedRecord};
