//! Plain-text rendering of the dashboard for a terminal.

use std::fmt::Write;

use crate::dashboard::Dashboard;

const TITLE: &str = "Holistic Medical Supply Dashboard";
const BAR_WIDTH: f64 = 20.0;

pub fn render(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dashboard(&mut out, dashboard);
    out
}

fn write_dashboard(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(TITLE.chars().count()))?;

    let counters = dashboard.counters();
    writeln!(
        out,
        "Products: {}   Low stock: {}   Vendors: {}",
        counters.total_products, counters.low_stock, counters.vendors
    )?;

    if let Some(message) = dashboard.notifications().message() {
        writeln!(out, "\n>> {message}")?;
    }

    writeln!(out)?;
    write_cards(out, dashboard)?;
    writeln!(out)?;
    write_chart(out, dashboard)?;
    writeln!(out)?;
    write_feed(out, dashboard)
}

fn write_cards(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    let cards = dashboard.visible_cards();
    let total = dashboard.inventory().total_products();

    if dashboard.query().is_empty() {
        writeln!(out, "Inventory ({total})")?;
    } else {
        writeln!(
            out,
            "Inventory matching \"{}\" ({} of {total})",
            dashboard.query(),
            cards.len()
        )?;
    }

    if cards.is_empty() {
        return writeln!(out, "  No products match.");
    }

    for card in &cards {
        writeln!(
            out,
            "  {:>2}. {} {:<24} [{:<6}] 📦 {:<20} {:<18} {}",
            card.position + 1,
            card.icon,
            card.name,
            card.badge(),
            card.vendor,
            card.stock_line,
            card.category
        )?;
    }
    Ok(())
}

fn write_chart(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    writeln!(out, "Stock by category")?;
    let chart = dashboard.chart();
    for bar in chart.bars() {
        let cells = (bar.height_percent / 100.0 * BAR_WIDTH).round() as usize;
        writeln!(
            out,
            "  {:<12} {:<width$} {}",
            bar.category,
            "█".repeat(cells),
            bar.count,
            width = BAR_WIDTH as usize
        )?;
    }
    if chart.unbucketed() > 0 {
        writeln!(
            out,
            "  ({} products in other categories not charted)",
            chart.unbucketed()
        )?;
    }
    Ok(())
}

fn write_feed(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    writeln!(out, "Recent activity")?;
    let feed = dashboard.feed();
    if feed.is_empty() {
        return writeln!(out, "  (nothing yet)");
    }
    for entry in feed.entries() {
        writeln!(
            out,
            "  {} {} ({})",
            entry.kind.icon(),
            entry.kind.text(),
            entry.time_label
        )?;
    }
    Ok(())
}
