//! Profile surface: stats, achievements, avatar skins and the editable
//! bio/preferences draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::gamification::Rarity;
use crate::types::EntryId;

/// Longest accepted bio, in characters.
pub const MAX_BIO_CHARS: usize = 280;

/// Aggregate activity counters shown on the profile header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub events_attended: u32,
    pub total_checkins: u32,
    pub friends_count: u32,
    pub likes_received: u32,
    pub level: u32,
    pub points: u32,
    pub next_level_points: u32,
}

impl UserStats {
    /// Progress toward the next level as a 0..=100 percentage.
    pub fn level_progress_pct(&self) -> u32 {
        if self.next_level_points == 0 {
            return 100;
        }
        (self.points * 100 / self.next_level_points).min(100)
    }
}

/// Level titles, lowest first. Levels past the end clamp to the last title.
const LEVEL_TITLES: &[&str] = &["Novato", "Explorador", "Veterano", "Lenda"];

/// The display title for a level (levels start at 1).
pub fn level_title(level: u32) -> &'static str {
    let idx = (level.max(1) as usize - 1).min(LEVEL_TITLES.len() - 1);
    LEVEL_TITLES[idx]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: NaiveDate,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPhoto {
    pub id: EntryId,
    pub event_name: String,
    pub date: NaiveDate,
    pub image_url: String,
    pub likes: u32,
}

/// A selectable avatar skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarSkin {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const AVATAR_SKINS: &[AvatarSkin] = &[
    AvatarSkin {
        id: "cyber1",
        name: "Cyber Punk",
        url: "/avatar-cyber1.png",
    },
    AvatarSkin {
        id: "neon2",
        name: "Neon Warrior",
        url: "/avatar-neon2.png",
    },
    AvatarSkin {
        id: "techno3",
        name: "Techno Ghost",
        url: "/avatar-techno3.png",
    },
    AvatarSkin {
        id: "acid4",
        name: "Acid Dreams",
        url: "/avatar-acid4.png",
    },
];

/// The editable parts of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub bio: String,
    pub music_preferences: Vec<String>,
    /// Selected [`AvatarSkin`] id.
    pub avatar: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            bio: "Apaixonado por música eletrônica e eventos exclusivos. \
                  Sempre em busca da próxima experiência única!"
                .to_string(),
            music_preferences: vec![
                "Techno".to_string(),
                "Drum & Bass".to_string(),
                "Psytrance".to_string(),
            ],
            avatar: AVATAR_SKINS[0].id.to_string(),
        }
    }
}

impl ProfileDraft {
    /// Replace the bio. Must be non-empty after trimming and within
    /// [`MAX_BIO_CHARS`].
    pub fn set_bio(&mut self, bio: &str) -> Result<(), CoreError> {
        let bio = bio.trim();
        if bio.is_empty() {
            return Err(CoreError::Validation("Bio cannot be empty".to_string()));
        }
        if bio.chars().count() > MAX_BIO_CHARS {
            return Err(CoreError::Validation(format!(
                "Bio is limited to {MAX_BIO_CHARS} characters"
            )));
        }
        self.bio = bio.to_string();
        Ok(())
    }

    /// Add or remove a music genre preference.
    pub fn toggle_preference(&mut self, genre: &str) {
        if let Some(idx) = self.music_preferences.iter().position(|g| g == genre) {
            self.music_preferences.remove(idx);
        } else {
            self.music_preferences.push(genre.to_string());
        }
    }

    /// Select an avatar skin by id; the id must name a known skin.
    pub fn select_avatar(&mut self, skin_id: &str) -> Result<(), CoreError> {
        if !AVATAR_SKINS.iter().any(|s| s.id == skin_id) {
            return Err(CoreError::Validation(format!(
                "Unknown avatar skin '{skin_id}'. Must be one of: {:?}",
                AVATAR_SKINS.iter().map(|s| s.id).collect::<Vec<_>>()
            )));
        }
        self.avatar = skin_id.to_string();
        Ok(())
    }
}
