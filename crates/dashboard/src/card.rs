//! Product cards for the inventory grid.

use std::time::Duration;

use serde::Serialize;

use stockboard_inventory::{Product, StockStatus};

/// Entrance animation stagger between consecutive cards.
pub const CARD_STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    /// Position within the currently visible grid.
    pub position: usize,
    pub icon: String,
    pub name: String,
    pub vendor: String,
    pub status: StockStatus,
    pub stock_line: String,
    pub category: String,
    pub delay_ms: u64,
}

impl ProductCard {
    pub fn build(position: usize, product: &Product) -> Self {
        Self {
            position,
            icon: product.icon().to_string(),
            name: product.name().to_string(),
            vendor: product.vendor().to_string(),
            status: product.status(),
            stock_line: format!("{} / {} units", product.stock(), product.max_stock()),
            category: product.category().to_string(),
            delay_ms: CARD_STAGGER.as_millis() as u64 * position as u64,
        }
    }

    pub fn badge(&self) -> &'static str {
        self.status.label()
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

pub fn cards_for(products: &[&Product]) -> Vec<ProductCard> {
    products
        .iter()
        .enumerate()
        .map(|(position, product)| ProductCard::build(position, product))
        .collect()
}

/// Banner text for a clicked card, e.g. `"☀️ Vitamin D3 - 15.0% stock level"`.
///
/// Percentages round half up (6.25 -> 6.3).
pub fn detail_message(product: &Product) -> String {
    let percentage = (product.stock_percentage() * 10.0).round() / 10.0;
    format!(
        "{} {} - {:.1}% stock level",
        product.icon(),
        product.name(),
        percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64, max_stock: i64) -> Product {
        Product::new("Vitamin D3", "HealthPlus", stock, max_stock, "Vitamins", "☀️").unwrap()
    }

    #[test]
    fn card_fields() {
        let p = product(12, 80);
        let card = ProductCard::build(3, &p);
        assert_eq!(card.badge(), "LOW");
        assert_eq!(card.stock_line, "12 / 80 units");
        assert_eq!(card.delay(), Duration::from_millis(150));
    }

    #[test]
    fn cards_are_numbered_in_view_order() {
        let a = product(50, 100);
        let b = product(30, 100);
        let cards = cards_for(&[&a, &b]);
        assert_eq!(cards[0].position, 0);
        assert_eq!(cards[0].badge(), "HIGH");
        assert_eq!(cards[1].position, 1);
        assert_eq!(cards[1].badge(), "MEDIUM");
    }

    #[test]
    fn detail_message_has_one_decimal() {
        assert_eq!(detail_message(&product(12, 80)), "☀️ Vitamin D3 - 15.0% stock level");
        assert_eq!(detail_message(&product(145, 200)), "☀️ Vitamin D3 - 72.5% stock level");
        assert_eq!(detail_message(&product(1, 3)), "☀️ Vitamin D3 - 33.3% stock level");
        assert_eq!(detail_message(&product(2, 3)), "☀️ Vitamin D3 - 66.7% stock level");
    }

    #[test]
    fn detail_message_rounds_ties_up() {
        assert_eq!(detail_message(&product(1, 16)), "☀️ Vitamin D3 - 6.3% stock level");
        assert_eq!(detail_message(&product(5, 400)), "☀️ Vitamin D3 - 1.3% stock level");
        assert_eq!(detail_message(&product(0, 16)), "☀️ Vitamin D3 - 0.0% stock level");
    }
}
