//! Engagement metrics: per-item boolean+counter pairs.
//!
//! Every toggleable user action on a catalog entry (like, check-in, watch)
//! is an [`Engagement`]: the current user's flag plus the aggregate count.
//! The two always move together, and the count never goes below zero.

use serde::{Deserialize, Serialize};

/// The closed set of engagement metrics a catalog entry may carry.
///
/// Not every surface carries every metric: feed events have likes and
/// check-ins, marketplace listings only likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Like,
    CheckIn,
    Watch,
}

impl Metric {
    /// Lowercase wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Like => "like",
            Metric::CheckIn => "check_in",
            Metric::Watch => "watch",
        }
    }
}

/// A boolean flag paired with an aggregate counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    /// How many users have this metric active on the entry.
    pub count: u32,
    /// Whether the current user has it active.
    pub active: bool,
}

impl Engagement {
    pub fn new(count: u32, active: bool) -> Self {
        Self { count, active }
    }

    /// Flip the flag and adjust the counter by one in the same direction.
    ///
    /// Deactivating saturates at zero so a stale `active=false, count=0`
    /// pair can never underflow. Toggling twice restores the original
    /// value exactly.
    pub fn toggle(&mut self) {
        if self.active {
            self.active = false;
            self.count = self.count.saturating_sub(1);
        } else {
            self.active = true;
            self.count += 1;
        }
    }
}
