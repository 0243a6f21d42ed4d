//! Feed and map event types.
//!
//! Two catalog shapes share the event vocabulary: the personalized feed
//! carries rich cards (organizer, audio preview, like + check-in metrics),
//! the map carries lightweight markers with a position and a secret flag.
//!
//! Secret map events are hidden by a pure client-side toggle. That is NOT
//! an authorization boundary — a real deployment would gate the data
//! server-side before it ever reaches the client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::engagement::{Engagement, Metric};
use crate::types::EntryId;

/// Music genre vocabulary, as offered by the genre filter.
pub const GENRES: &[&str] = &[
    "Techno",
    "Drum & Bass",
    "Psytrance",
    "Dark Techno",
    "Acid House",
];

/// Event kind vocabulary, as offered by the type filter.
pub const EVENT_KINDS: &[&str] = &["Rave", "Club", "Festival", "Warehouse", "Loft"];

/// Event organizer, embedded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub avatar: String,
    pub verified: bool,
}

/// Where a feed event happens. Secret events only expose an approximate
/// venue name until an invite is approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    /// Whether `name` is the exact address or an approximation.
    pub exact: bool,
    pub distance_km: f64,
}

/// Audio teaser attached to a feed card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioPreview {
    pub title: String,
    /// Display duration, e.g. "2:30".
    pub duration: String,
}

/// A card in the personalized feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEvent {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub kind: String,
    pub venue: Venue,
    /// Display time, e.g. "23:00".
    pub time: String,
    /// Display date label, e.g. "Hoje".
    pub date_label: String,
    pub posted_at: NaiveDate,
    pub organizer: Organizer,
    pub likes: Engagement,
    pub comments: u32,
    pub checkins: Engagement,
    pub audio: AudioPreview,
    pub image: String,
    pub tags: Vec<String>,
}

impl CatalogEntry for FeedEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.genre)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.description.as_str(),
            self.organizer.name.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn distance_km(&self) -> Option<f64> {
        Some(self.venue.distance_km)
    }

    fn posted_at(&self) -> Option<NaiveDate> {
        Some(self.posted_at)
    }

    fn popularity(&self) -> u32 {
        self.likes.count
    }

    fn engagement(&self, metric: Metric) -> Option<&Engagement> {
        match metric {
            Metric::Like => Some(&self.likes),
            Metric::CheckIn => Some(&self.checkins),
            Metric::Watch => None,
        }
    }

    fn engagement_mut(&mut self, metric: Metric) -> Option<&mut Engagement> {
        match metric {
            Metric::Like => Some(&mut self.likes),
            Metric::CheckIn => Some(&mut self.checkins),
            Metric::Watch => None,
        }
    }
}

/// A marker on the event map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEvent {
    pub id: EntryId,
    pub name: String,
    pub genre: String,
    pub kind: String,
    /// Horizontal map position, percent.
    pub x: f64,
    /// Vertical map position, percent.
    pub y: f64,
    pub attendees: u32,
    pub secret: bool,
    pub distance_km: f64,
    /// Display time, e.g. "23:00".
    pub time: String,
    pub description: String,
}

impl CatalogEntry for MapEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.genre)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn distance_km(&self) -> Option<f64> {
        Some(self.distance_km)
    }

    fn hidden(&self) -> bool {
        self.secret
    }

    fn popularity(&self) -> u32 {
        self.attendees
    }

    fn engagement(&self, _metric: Metric) -> Option<&Engagement> {
        None
    }

    fn engagement_mut(&mut self, _metric: Metric) -> Option<&mut Engagement> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::FilterState;

    fn map_event(id: &str, genre: &str, kind: &str, secret: bool, distance: f64) -> MapEvent {
        MapEvent {
            id: id.to_string(),
            name: format!("event {id}"),
            genre: genre.to_string(),
            kind: kind.to_string(),
            x: 50.0,
            y: 50.0,
            attendees: 100,
            secret,
            distance_km: distance,
            time: "23:00".to_string(),
            description: String::new(),
        }
    }

    fn map_catalog() -> Catalog<MapEvent> {
        Catalog::new(vec![
            map_event("1", "Techno", "Rave", false, 2.5),
            map_event("2", "Drum & Bass", "Club", true, 5.2),
            map_event("3", "Psytrance", "Festival", false, 8.1),
            map_event("4", "Dark Techno", "Warehouse", true, 3.7),
            map_event("5", "Acid House", "Loft", true, 1.8),
        ])
        .unwrap()
    }

    #[test]
    fn secret_events_need_secret_mode() {
        let catalog = map_catalog();

        let visible = catalog.project(&FilterState::default(), None);
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        let all = catalog.project(
            &FilterState {
                reveal_hidden: true,
                ..FilterState::default()
            },
            None,
        );
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn genre_kind_and_distance_filters_stack() {
        let catalog = map_catalog();
        let filter = FilterState {
            category: Some("Dark Techno".to_string()),
            kind: Some("Warehouse".to_string()),
            max_distance_km: Some(4.0),
            reveal_hidden: true,
            ..FilterState::default()
        };
        let projection = catalog.project(&filter, None);
        assert_eq!(projection.len(), 1);
        assert_eq!(projection[0].id, "4");

        // Tightening the radius below the event's distance empties it.
        let filter = FilterState {
            max_distance_km: Some(3.0),
            ..filter
        };
        assert!(catalog.project(&filter, None).is_empty());
    }

    #[test]
    fn feed_events_toggle_likes_and_checkins_independently() {
        let event = FeedEvent {
            id: "1".to_string(),
            name: "Experiência Techno Noturna".to_string(),
            description: String::new(),
            genre: "Techno".to_string(),
            kind: "Rave".to_string(),
            venue: Venue {
                name: "Zona Industrial - SP".to_string(),
                exact: false,
                distance_km: 2.5,
            },
            time: "23:00".to_string(),
            date_label: "Hoje".to_string(),
            posted_at: "2024-01-15".parse().unwrap(),
            organizer: Organizer {
                name: "TechnoCollective".to_string(),
                avatar: String::new(),
                verified: true,
            },
            likes: Engagement::new(127, false),
            comments: 23,
            checkins: Engagement::new(89, false),
            audio: AudioPreview {
                title: "Preview Mix - Dark Pulse".to_string(),
                duration: "2:30".to_string(),
            },
            image: String::new(),
            tags: vec!["Techno".to_string()],
        };

        let catalog = Catalog::new(vec![event]).unwrap();
        let catalog = catalog.toggled("1", Metric::CheckIn);
        let entry = catalog.get("1").unwrap();
        assert!(entry.checkins.active);
        assert_eq!(entry.checkins.count, 90);
        // Likes untouched.
        assert!(!entry.likes.active);
        assert_eq!(entry.likes.count, 127);
    }

    #[test]
    fn vocabularies_match_the_filter_options() {
        assert!(GENRES.contains(&"Drum & Bass"));
        assert_eq!(EVENT_KINDS.len(), 5);
    }
}
