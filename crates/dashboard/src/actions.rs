//! Toolbar and card actions.

use std::time::Duration;

use stockboard_core::DomainResult;

use crate::card::detail_message;
use crate::dashboard::Dashboard;

pub const ADD_PRODUCT_FOLLOW_UP: Duration = Duration::from_millis(1500);
pub const REPORT_FOLLOW_UP: Duration = Duration::from_millis(2000);

pub const WELCOME_MESSAGE: &str = "👋 Welcome to Holistic Medical Supply Dashboard!";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    AddProduct,
    GenerateReport,
    CheckStock,
    ManageVendors,
    /// Zero-based position of a card in the current grid.
    ShowProductDetails { position: usize },
}

/// A message shown after a delay, replacing whatever banner is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub delay: Duration,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub message: String,
    pub follow_up: Option<FollowUp>,
}

impl ActionOutcome {
    fn immediate(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            follow_up: None,
        }
    }

    fn then(mut self, delay: Duration, message: impl Into<String>) -> Self {
        self.follow_up = Some(FollowUp {
            delay,
            message: message.into(),
        });
        self
    }
}

impl DashboardAction {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::AddProduct => "add_product",
            DashboardAction::GenerateReport => "generate_report",
            DashboardAction::CheckStock => "check_stock",
            DashboardAction::ManageVendors => "manage_vendors",
            DashboardAction::ShowProductDetails { .. } => "show_product_details",
        }
    }

    /// Work out which banners the action produces. Nothing is mutated.
    pub fn resolve(&self, dashboard: &Dashboard) -> DomainResult<ActionOutcome> {
        let outcome = match self {
            DashboardAction::AddProduct => ActionOutcome::immediate("✨ Opening add product form...")
                .then(ADD_PRODUCT_FOLLOW_UP, "New product added successfully!"),
            DashboardAction::GenerateReport => {
                ActionOutcome::immediate("📊 Generating inventory report...")
                    .then(REPORT_FOLLOW_UP, "Report generated! Check your downloads.")
            }
            DashboardAction::CheckStock => ActionOutcome::immediate(format!(
                "⚠️ Found {} items with low stock!",
                dashboard.inventory().low_stock_count()
            )),
            DashboardAction::ManageVendors => ActionOutcome::immediate(format!(
                "🏢 Managing {} vendors...",
                dashboard.inventory().distinct_vendor_count()
            )),
            DashboardAction::ShowProductDetails { position } => {
                ActionOutcome::immediate(detail_message(dashboard.visible_product(*position)?))
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use stockboard_core::DomainError;

    use super::*;
    use crate::seed::{SeedSource, load};

    fn dashboard() -> Dashboard {
        Dashboard::new(load(&SeedSource::Embedded).unwrap().view_model)
    }

    #[test]
    fn check_stock_reports_low_stock_count() {
        let outcome = DashboardAction::CheckStock.resolve(&dashboard()).unwrap();
        assert_eq!(outcome.message, "⚠️ Found 3 items with low stock!");
        assert!(outcome.follow_up.is_none());
    }

    #[test]
    fn manage_vendors_reports_distinct_vendors() {
        let outcome = DashboardAction::ManageVendors.resolve(&dashboard()).unwrap();
        assert_eq!(outcome.message, "🏢 Managing 8 vendors...");
    }

    #[test]
    fn add_product_has_follow_up() {
        let outcome = DashboardAction::AddProduct.resolve(&dashboard()).unwrap();
        assert_eq!(outcome.message, "✨ Opening add product form...");
        assert_eq!(
            outcome.follow_up,
            Some(FollowUp {
                delay: Duration::from_millis(1500),
                message: "New product added successfully!".to_string(),
            })
        );
    }

    #[test]
    fn report_has_follow_up() {
        let outcome = DashboardAction::GenerateReport.resolve(&dashboard()).unwrap();
        assert_eq!(outcome.follow_up.unwrap().delay, Duration::from_millis(2000));
    }

    #[test]
    fn details_use_the_filtered_grid() {
        let mut dashboard = dashboard();
        dashboard.set_query("vitamin");
        let outcome = DashboardAction::ShowProductDetails { position: 0 }
            .resolve(&dashboard)
            .unwrap();
        assert_eq!(outcome.message, "☀️ Vitamin D3 - 15.0% stock level");

        let err = DashboardAction::ShowProductDetails { position: 5 }
            .resolve(&dashboard)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
