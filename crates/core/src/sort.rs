//! Sort orders for catalog projections.
//!
//! Every order is applied with a stable sort, so entries comparing equal
//! keep their relative input order. With no [`SortKey`] selected a
//! projection stays in store order.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// The closed set of sort orders a surface can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured entries first, store order within each partition.
    Featured,
    /// Newest posted date first.
    Recent,
    /// Highest like count first.
    Popular,
    PriceAscending,
    PriceDescending,
}

impl SortKey {
    /// Parse a UI selection. `None` for unknown values so the caller can
    /// fall back to identity order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "featured" => Some(SortKey::Featured),
            "recent" => Some(SortKey::Recent),
            "popular" => Some(SortKey::Popular),
            "price-asc" | "price-low" => Some(SortKey::PriceAscending),
            "price-desc" | "price-high" => Some(SortKey::PriceDescending),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::PriceAscending => "price-asc",
            SortKey::PriceDescending => "price-desc",
        }
    }
}

/// Reorder `entries` in place according to `key`.
///
/// Entries without the sorted attribute (no price, no posted date) sort
/// last for ascending orders and after priced/dated entries for the
/// descending ones, so mixed-shape projections stay sensible.
pub fn apply<T: CatalogEntry>(entries: &mut [Arc<T>], key: SortKey) {
    match key {
        SortKey::Featured => entries.sort_by_key(|e| !e.featured()),
        SortKey::Recent => {
            entries.sort_by_key(|e| Reverse(e.posted_at().unwrap_or(NaiveDate::MIN)))
        }
        SortKey::Popular => entries.sort_by_key(|e| Reverse(e.popularity())),
        SortKey::PriceAscending => entries.sort_by_key(|e| e.price().unwrap_or(u32::MAX)),
        SortKey::PriceDescending => {
            entries.sort_by_key(|e| Reverse(e.price().unwrap_or(0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engagement::{Engagement, Metric};

    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        id: String,
        price: Option<u32>,
        posted: Option<NaiveDate>,
        likes: u32,
        featured: bool,
    }

    impl CatalogEntry for Probe {
        fn id(&self) -> &str {
            &self.id
        }

        fn search_text(&self) -> Vec<&str> {
            vec![self.id.as_str()]
        }

        fn price(&self) -> Option<u32> {
            self.price
        }

        fn posted_at(&self) -> Option<NaiveDate> {
            self.posted
        }

        fn popularity(&self) -> u32 {
            self.likes
        }

        fn featured(&self) -> bool {
            self.featured
        }

        fn engagement(&self, _metric: Metric) -> Option<&Engagement> {
            None
        }

        fn engagement_mut(&mut self, _metric: Metric) -> Option<&mut Engagement> {
            None
        }
    }

    fn probe(id: &str, price: u32) -> Arc<Probe> {
        Arc::new(Probe {
            id: id.to_string(),
            price: Some(price),
            posted: None,
            likes: 0,
            featured: false,
        })
    }

    fn ids(entries: &[Arc<Probe>]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn price_ascending_and_descending() {
        let mut entries = vec![probe("a", 350), probe("b", 120), probe("c", 500)];

        apply(&mut entries, SortKey::PriceAscending);
        assert_eq!(ids(&entries), ["b", "a", "c"]);
        assert_eq!(
            entries.iter().map(|e| e.price.unwrap()).collect::<Vec<_>>(),
            [120, 350, 500]
        );

        apply(&mut entries, SortKey::PriceDescending);
        assert_eq!(
            entries.iter().map(|e| e.price.unwrap()).collect::<Vec<_>>(),
            [500, 350, 120]
        );
    }

    #[test]
    fn featured_partitions_stably() {
        let mk = |id: &str, featured: bool| {
            Arc::new(Probe {
                id: id.to_string(),
                price: None,
                posted: None,
                likes: 0,
                featured,
            })
        };
        let mut entries = vec![
            mk("a", false),
            mk("b", true),
            mk("c", false),
            mk("d", true),
        ];
        apply(&mut entries, SortKey::Featured);
        // Featured first, original order preserved within each partition.
        assert_eq!(ids(&entries), ["b", "d", "a", "c"]);
    }

    #[test]
    fn popular_ties_keep_input_order() {
        let mk = |id: &str, likes: u32| {
            Arc::new(Probe {
                id: id.to_string(),
                price: None,
                posted: None,
                likes,
                featured: false,
            })
        };
        let mut entries = vec![mk("a", 10), mk("b", 50), mk("c", 10), mk("d", 50)];
        apply(&mut entries, SortKey::Popular);
        assert_eq!(ids(&entries), ["b", "d", "a", "c"]);
    }

    #[test]
    fn recent_sorts_newest_first() {
        let mk = |id: &str, date: &str| {
            Arc::new(Probe {
                id: id.to_string(),
                price: None,
                posted: Some(date.parse().unwrap()),
                likes: 0,
                featured: false,
            })
        };
        let mut entries = vec![
            mk("a", "2024-01-13"),
            mk("b", "2024-01-15"),
            mk("c", "2024-01-14"),
        ];
        apply(&mut entries, SortKey::Recent);
        assert_eq!(ids(&entries), ["b", "c", "a"]);
    }

    #[test]
    fn unpriced_entries_sort_last_ascending() {
        let mut entries = vec![
            Arc::new(Probe {
                id: "free".to_string(),
                price: None,
                posted: None,
                likes: 0,
                featured: false,
            }),
            probe("cheap", 10),
        ];
        apply(&mut entries, SortKey::PriceAscending);
        assert_eq!(ids(&entries), ["cheap", "free"]);
    }

    #[test]
    fn parse_known_and_unknown_keys() {
        assert_eq!(SortKey::parse("featured"), Some(SortKey::Featured));
        assert_eq!(SortKey::parse("price-low"), Some(SortKey::PriceAscending));
        assert_eq!(SortKey::parse("price-desc"), Some(SortKey::PriceDescending));
        assert_eq!(SortKey::parse("alphabetical"), None);
    }
}
