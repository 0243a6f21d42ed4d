//! Challenges, leaderboard and the rewards shop.
//!
//! Points are earned by claiming completed challenges and spent in the
//! rewards shop. Redemption itself is not implemented yet; the shop only
//! validates that a redemption *would* be allowed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntryId;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity scale shared by rewards and profile achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn display_name(self) -> &'static str {
        match self {
            Rarity::Common => "Comum",
            Rarity::Rare => "Raro",
            Rarity::Epic => "Épico",
            Rarity::Legendary => "Lendário",
        }
    }
}

// ---------------------------------------------------------------------------
// Challenges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Events,
    Social,
    Marketplace,
    Exploration,
}

/// A progress-tracked task that pays out points when claimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub progress: u32,
    pub max_progress: u32,
    pub kind: ChallengeKind,
    pub category: ChallengeCategory,
    pub completed: bool,
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    /// Whether the reward can be claimed: target reached, not yet claimed.
    pub fn is_claimable(&self) -> bool {
        self.progress >= self.max_progress && !self.completed
    }

    /// Progress as a 0..=100 percentage for display.
    pub fn progress_pct(&self) -> u32 {
        if self.max_progress == 0 {
            return 100;
        }
        (self.progress * 100 / self.max_progress).min(100)
    }
}

/// The user's active challenges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeBoard {
    challenges: Vec<Challenge>,
}

impl ChallengeBoard {
    pub fn new(challenges: Vec<Challenge>) -> Self {
        Self { challenges }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Claim a completed challenge, returning the points earned.
    ///
    /// Claiming requires the progress target to be reached and is
    /// one-shot: a second claim is a conflict.
    pub fn claim(&mut self, id: &str) -> Result<u32, CoreError> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "challenge",
                id: id.to_string(),
            })?;

        if challenge.completed {
            return Err(CoreError::Conflict(format!(
                "Challenge '{}' was already claimed",
                challenge.title
            )));
        }
        if challenge.progress < challenge.max_progress {
            return Err(CoreError::Validation(format!(
                "Challenge '{}' is not complete yet ({}/{})",
                challenge.title, challenge.progress, challenge.max_progress
            )));
        }

        challenge.completed = true;
        Ok(challenge.points)
    }

    /// Record progress on a challenge, clamped to the target. Unknown ids
    /// are ignored (progress events may reference rotated-out challenges).
    pub fn record_progress(&mut self, id: &str, steps: u32) {
        if let Some(challenge) = self.challenges.iter_mut().find(|c| c.id == id) {
            challenge.progress = (challenge.progress + steps).min(challenge.max_progress);
        }
    }
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: EntryId,
    pub name: String,
    pub avatar: String,
    pub level: u32,
    pub points: u32,
    pub rank: u32,
    pub weekly_points: u32,
    pub badges: Vec<String>,
}

/// A fixed ranking snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..self.entries.len().min(n)]
    }

    pub fn entry_for(&self, name: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

// ---------------------------------------------------------------------------
// Rewards shop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Avatar,
    Badge,
    Discount,
    Exclusive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    /// Price in points.
    pub cost: u32,
    pub kind: RewardKind,
    pub rarity: Rarity,
    pub image: String,
    pub available: bool,
}

/// Why a redemption is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RedeemDenied {
    #[error("Reward is not available")]
    Unavailable,
    #[error("Insufficient points: {missing} more needed")]
    InsufficientPoints { missing: u32 },
}

/// Check whether `points` can redeem `reward`.
///
/// The actual redemption flow is not implemented; callers surface a
/// "coming soon" notice after a passing check.
pub fn redeem_check(points: u32, reward: &Reward) -> Result<(), RedeemDenied> {
    if !reward.available {
        return Err(RedeemDenied::Unavailable);
    }
    if points < reward.cost {
        return Err(RedeemDenied::InsufficientPoints {
            missing: reward.cost - points,
        });
    }
    Ok(())
}
