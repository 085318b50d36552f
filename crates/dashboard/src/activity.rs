//! Rolling activity feed with synthetic entries.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use stockboard_core::ActivityId;

/// Maximum number of entries kept in the feed.
pub const FEED_CAPACITY: usize = 5;

const TIME_LABEL: &str = "Just now";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Restocked,
    OrderReceived,
    InventoryUpdated,
    LowStockAlert,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Restocked,
        ActivityKind::OrderReceived,
        ActivityKind::InventoryUpdated,
        ActivityKind::LowStockAlert,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Restocked => "✓",
            ActivityKind::OrderReceived => "📦",
            ActivityKind::InventoryUpdated => "🔄",
            ActivityKind::LowStockAlert => "⚠",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ActivityKind::Restocked => "Product restocked",
            ActivityKind::OrderReceived => "New order received",
            ActivityKind::InventoryUpdated => "Inventory updated",
            ActivityKind::LowStockAlert => "Low stock alert",
        }
    }

    /// Uniform pick over [`ActivityKind::ALL`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub id: ActivityId,
    pub kind: ActivityKind,
    pub time_label: &'static str,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(kind: ActivityKind, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: ActivityId::new(),
            kind,
            time_label: TIME_LABEL,
            occurred_at,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, occurred_at: DateTime<Utc>) -> Self {
        Self::new(ActivityKind::random(rng), occurred_at)
    }
}

/// Newest-first feed that drops its oldest entry past capacity.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::with_capacity(FEED_CAPACITY)
    }
}

impl ActivityFeed {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, entry: ActivityEntry) {
        tracing::debug!(activity_id = %entry.id, kind = entry.kind.text(), "activity recorded");
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn feed_is_newest_first_and_bounded() {
        let mut feed = ActivityFeed::default();
        let now = Utc::now();
        let kinds = [
            ActivityKind::Restocked,
            ActivityKind::OrderReceived,
            ActivityKind::InventoryUpdated,
            ActivityKind::LowStockAlert,
            ActivityKind::Restocked,
            ActivityKind::OrderReceived,
            ActivityKind::LowStockAlert,
        ];
        for kind in kinds {
            feed.push(ActivityEntry::new(kind, now));
            assert!(feed.len() <= FEED_CAPACITY);
        }

        let shown: Vec<ActivityKind> = feed.entries().map(|e| e.kind).collect();
        assert_eq!(
            shown,
            vec![
                ActivityKind::LowStockAlert,
                ActivityKind::OrderReceived,
                ActivityKind::Restocked,
                ActivityKind::LowStockAlert,
                ActivityKind::InventoryUpdated,
            ]
        );
    }

    #[test]
    fn entries_are_labelled_just_now() {
        let entry = ActivityEntry::new(ActivityKind::OrderReceived, Utc::now());
        assert_eq!(entry.time_label, "Just now");
        assert_eq!(entry.kind.icon(), "📦");
        assert_eq!(entry.kind.text(), "New order received");
    }

    #[test]
    fn random_picks_cover_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<ActivityKind> = (0..200).map(|_| ActivityKind::random(&mut rng)).collect();
        assert_eq!(seen.len(), ActivityKind::ALL.len());
    }

    #[test]
    fn seeded_picks_are_reproducible() {
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10).map(|_| ActivityKind::random(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }
}
