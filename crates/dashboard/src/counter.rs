//! Count-up animation for the dashboard counters.

use std::time::Duration;

use serde::Serialize;

use stockboard_inventory::InventorySummary;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    TotalProducts,
    LowStock,
    Vendors,
}

impl CounterKind {
    pub const ALL: [CounterKind; 3] = [
        CounterKind::TotalProducts,
        CounterKind::LowStock,
        CounterKind::Vendors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CounterKind::TotalProducts => "total_products",
            CounterKind::LowStock => "low_stock",
            CounterKind::Vendors => "vendors",
        }
    }

    pub fn target(&self, summary: &InventorySummary) -> u64 {
        let value = match self {
            CounterKind::TotalProducts => summary.total_products,
            CounterKind::LowStock => summary.low_stock,
            CounterKind::Vendors => summary.vendors,
        };
        value as u64
    }
}

/// Values currently shown by the counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CounterBoard {
    pub total_products: u64,
    pub low_stock: u64,
    pub vendors: u64,
}

impl CounterBoard {
    pub fn get(&self, kind: CounterKind) -> u64 {
        match kind {
            CounterKind::TotalProducts => self.total_products,
            CounterKind::LowStock => self.low_stock,
            CounterKind::Vendors => self.vendors,
        }
    }

    pub fn set(&mut self, kind: CounterKind, value: u64) {
        match kind {
            CounterKind::TotalProducts => self.total_products = value,
            CounterKind::LowStock => self.low_stock = value,
            CounterKind::Vendors => self.vendors = value,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub finished: bool,
}

/// Linear count-up from zero.
///
/// Each frame adds `target / (duration / frame)`. The shown value is the floor
/// of the running total until it reaches the target, which is then shown
/// exactly and the animation is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, frame: Duration) -> Self {
        let frames = duration.as_secs_f64() / frame.as_secs_f64();
        // A degenerate duration/frame pair jumps straight to the target.
        let increment = if frames.is_finite() && frames > 1.0 {
            target as f64 / frames
        } else {
            target as f64
        };

        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame. Once finished, every further step repeats the target.
    pub fn step(&mut self) -> CounterFrame {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.finished = true;
            }
        }

        let value = if self.finished {
            self.target
        } else {
            self.current.floor() as u64
        };

        CounterFrame {
            value,
            finished: self.finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const DURATION: Duration = Duration::from_millis(1000);

    fn run_to_end(mut animation: CounterAnimation) -> Vec<u64> {
        let mut values = Vec::new();
        for _ in 0..10_000 {
            let frame = animation.step();
            values.push(frame.value);
            if frame.finished {
                break;
            }
        }
        values
    }

    #[test]
    fn counts_up_to_exact_target() {
        let values = run_to_end(CounterAnimation::new(12, DURATION, FRAME));

        assert_eq!(*values.last().unwrap(), 12);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 12));
        // 1000ms / 16ms = 62.5 frames, so the target is reached on frame 63 or 64.
        assert!((63..=64).contains(&values.len()), "took {} frames", values.len());
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut animation = CounterAnimation::new(0, DURATION, FRAME);
        assert_eq!(
            animation.step(),
            CounterFrame {
                value: 0,
                finished: true
            }
        );
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut animation = CounterAnimation::new(3, DURATION, FRAME);
        // 3 / 62.5 = 0.048 per frame
        assert_eq!(animation.step().value, 0);
        for _ in 0..20 {
            animation.step();
        }
        // 22 * 0.048 = 1.056
        assert_eq!(animation.step().value, 1);
    }

    #[test]
    fn finished_animation_stays_at_target() {
        let mut animation = CounterAnimation::new(8, DURATION, FRAME);
        while !animation.step().finished {}
        assert_eq!(animation.step().value, 8);
        assert!(animation.is_finished());
    }

    #[test]
    fn zero_frame_period_jumps_to_target() {
        let mut animation = CounterAnimation::new(5, DURATION, Duration::ZERO);
        assert_eq!(animation.step().value, 5);
    }

    #[test]
    fn board_targets_follow_summary() {
        let summary = InventorySummary {
            total_products: 12,
            low_stock: 3,
            vendors: 8,
        };
        let mut board = CounterBoard::default();
        for kind in CounterKind::ALL {
            board.set(kind, kind.target(&summary));
        }
        assert_eq!(
            board,
            CounterBoard {
                total_products: 12,
                low_stock: 3,
                vendors: 8
            }
        );
    }
}
