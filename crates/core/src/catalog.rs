//! The catalog view controller shared by every browsing surface.
//!
//! A [`Catalog`] owns an ordered collection of entries and produces
//! filtered/sorted projections without mutating store order. Engagement
//! toggles replace the whole collection (never an item in place) and touch
//! exactly one entry's allocation, so consumers can detect change with a
//! shallow pointer comparison.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::engagement::{Engagement, Metric};
use crate::error::CoreError;
use crate::filter::FilterState;
use crate::sort::{self, SortKey};

/// Behavior a catalog needs from its entries.
///
/// Surfaces implement only the attributes they have; the defaults mean
/// "not applicable" and make the corresponding filter/sort criteria pass
/// through.
pub trait CatalogEntry: Clone {
    /// Unique, stable identifier within one catalog.
    fn id(&self) -> &str;

    /// Category (marketplace) or genre (events) used for equality filtering.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Secondary classification (event kind: Rave, Club, ...).
    fn kind(&self) -> Option<&str> {
        None
    }

    /// Fields scanned by the free-text query.
    fn search_text(&self) -> Vec<&str>;

    /// Distance from the user in km, for surfaces with a radius filter.
    fn distance_km(&self) -> Option<f64> {
        None
    }

    /// Whether the entry is hidden unless the surface reveals secret
    /// entries.
    fn hidden(&self) -> bool {
        false
    }

    fn price(&self) -> Option<u32> {
        None
    }

    fn posted_at(&self) -> Option<NaiveDate> {
        None
    }

    fn featured(&self) -> bool {
        false
    }

    /// Engagement count used by the "popular" sort.
    fn popularity(&self) -> u32 {
        0
    }

    /// The engagement record for `metric`, if this entry carries it.
    fn engagement(&self, metric: Metric) -> Option<&Engagement>;

    fn engagement_mut(&mut self, metric: Metric) -> Option<&mut Engagement>;
}

/// An in-memory ordered collection of catalog entries.
///
/// Entries are stored behind `Arc` so projections and toggles share
/// allocations with the store; each catalog is owned by exactly one
/// surface.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Vec<Arc<T>>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog, enforcing id uniqueness.
    pub fn new(entries: Vec<T>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id().to_string()) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate catalog entry id '{}'",
                    entry.id()
                )));
            }
        }
        Ok(Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<T>> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.iter()
    }

    /// The filtered and optionally sorted projection, in store order when
    /// `sort` is `None`. The store itself is never reordered.
    pub fn project(&self, filter: &FilterState, sort: Option<SortKey>) -> Vec<Arc<T>> {
        let mut projection: Vec<Arc<T>> = self
            .entries
            .iter()
            .filter(|e| filter.matches(e.as_ref()))
            .cloned()
            .collect();
        if let Some(key) = sort {
            sort::apply(&mut projection, key);
        }
        projection
    }

    /// The engagement reducer: a new catalog with `metric` flipped on the
    /// entry with `id`.
    ///
    /// Unknown ids and metrics the entry does not carry are silent no-ops
    /// (stale references from a double-clicked UI are expected); the result
    /// is then value-equal to the input. On success exactly one entry gets
    /// a fresh allocation, every other `Arc` is shared with the input.
    pub fn toggled(&self, id: &str, metric: Metric) -> Self {
        let Some(idx) = self.entries.iter().position(|e| e.id() == id) else {
            return self.clone();
        };

        let mut entry = (*self.entries[idx]).clone();
        match entry.engagement_mut(metric) {
            Some(engagement) => engagement.toggle(),
            None => return self.clone(),
        }

        let mut entries = self.entries.clone();
        entries[idx] = Arc::new(entry);
        Self { entries }
    }

    /// In-place convenience over [`Catalog::toggled`]: replaces the whole
    /// collection.
    pub fn toggle(&mut self, id: &str, metric: Metric) {
        *self = self.toggled(id, metric);
    }
}

impl<T: PartialEq> PartialEq for Catalog<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
