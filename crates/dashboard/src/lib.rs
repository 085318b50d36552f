//! `stockboard-dashboard`
//!
//! **Responsibility:** presentation adapter for the inventory view model.
//!
//! This crate provides:
//! - Seed loading and environment configuration
//! - Product cards, counters, category chart and activity feed
//! - Notification banners
//! - Cancellable timer tasks driving the animated parts
//! - Plain-text rendering for the `stockboard` terminal binary

pub mod actions;
pub mod activity;
pub mod card;
pub mod config;
pub mod counter;
pub mod dashboard;
pub mod input;
pub mod notification;
pub mod render;
pub mod scheduler;
pub mod seed;
pub mod session;

pub use actions::{ActionOutcome, DashboardAction, FollowUp};
pub use activity::{ActivityEntry, ActivityFeed, ActivityKind};
pub use card::ProductCard;
pub use config::{ConfigError, DashboardConfig, Timings};
pub use counter::{CounterAnimation, CounterBoard, CounterKind};
pub use dashboard::Dashboard;
pub use input::Input;
pub use notification::{Notification, NotificationCenter};
pub use scheduler::{TaskHandle, TaskScheduler};
pub use seed::{SeedError, SeedSource};
pub use session::DashboardSession;
