//! Filter criteria for catalog projections.
//!
//! A [`FilterState`] is the full set of restrictions a browsing surface can
//! apply at once. Criteria combine with logical AND; each default means "no
//! restriction", so a default state matches every visible entry.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// UI sentinel meaning "no category/genre/type restriction".
///
/// Accepted in both the English and the Portuguese form the surfaces
/// display ("Todos").
pub const CATEGORY_ALL: &str = "all";
pub const CATEGORY_ALL_PT: &str = "Todos";

/// Parse a category/genre/type selection, mapping the sentinel to `None`.
pub fn parse_selection(raw: &str) -> Option<String> {
    if raw.eq_ignore_ascii_case(CATEGORY_ALL) || raw == CATEGORY_ALL_PT {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Active filter criteria for one catalog surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Category (marketplace) or genre (events) equality; `None` = all.
    pub category: Option<String>,
    /// Event kind equality (Rave, Club, ...); `None` = all.
    pub kind: Option<String>,
    /// Case-insensitive free-text query; empty matches everything.
    pub query: String,
    /// Upper distance bound in km; `None` = unbounded.
    pub max_distance_km: Option<f64>,
    /// Whether hidden (secret) entries are visible. Purely a client-side
    /// visibility toggle, not an authorization check.
    pub reveal_hidden: bool,
}

impl FilterState {
    /// True iff `entry` satisfies every active criterion.
    ///
    /// The free-text query matches when any searchable field (name,
    /// description, tags, seller/organizer name) contains it, with the same
    /// case folding applied to the query and to every field.
    pub fn matches<T: CatalogEntry>(&self, entry: &T) -> bool {
        if entry.hidden() && !self.reveal_hidden {
            return false;
        }

        if let Some(category) = &self.category {
            if entry.category() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(kind) = &self.kind {
            if entry.kind() != Some(kind.as_str()) {
                return false;
            }
        }

        if let Some(max) = self.max_distance_km {
            if entry.distance_km().is_some_and(|d| d > max) {
                return false;
            }
        }

        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let hit = entry
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}
