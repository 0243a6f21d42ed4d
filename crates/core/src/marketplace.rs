//! Marketplace listings.
//!
//! One listing shape serves the whole marketplace surface: category and
//! condition are closed enums, the seller is embedded, and the like metric
//! is the only toggleable engagement (view and watcher counts are
//! display-only aggregates).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::engagement::{Engagement, Metric};
use crate::types::EntryId;

/// Listing categories. Display names follow the UI ("Roupas", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothes,
    Accessories,
    Art,
    Vapes,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Clothes => "clothes",
            Category::Accessories => "accessories",
            Category::Art => "art",
            Category::Vapes => "vapes",
            Category::Other => "other",
        }
    }

    /// Portuguese display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Clothes => "Roupas",
            Category::Accessories => "Acessórios",
            Category::Art => "Arte",
            Category::Vapes => "Vapes",
            Category::Other => "Outros",
        }
    }

    /// Parse a filter selection by id or display name.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "clothes" | "Roupas" => Some(Category::Clothes),
            "accessories" | "Acessórios" => Some(Category::Accessories),
            "art" | "Arte" => Some(Category::Art),
            "vapes" | "Vapes" => Some(Category::Vapes),
            "other" | "Outros" => Some(Category::Other),
            _ => None,
        }
    }
}

/// Item condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Vintage,
}

impl Condition {
    pub fn display_name(self) -> &'static str {
        match self {
            Condition::New => "Novo",
            Condition::Used => "Usado",
            Condition::Vintage => "Vintage",
        }
    }
}

/// The listing's seller, embedded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub verified: bool,
    pub location: String,
    /// Typical response time label, e.g. "< 1h".
    pub response_time: Option<String>,
    pub total_sales: Option<u32>,
}

/// A marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    /// Asking price in whole reais.
    pub price: u32,
    pub category: Category,
    pub condition: Condition,
    pub images: Vec<String>,
    pub seller: Seller,
    pub views: u32,
    pub likes: Engagement,
    pub watchers: u32,
    pub tradeable: bool,
    pub posted_at: NaiveDate,
    pub tags: Vec<String>,
    pub featured: bool,
    /// Active discount percentage, if any.
    pub discount_pct: Option<u8>,
}

impl Listing {
    /// The pre-discount price implied by `price` and `discount_pct`,
    /// rounded to the nearest real.
    pub fn original_price(&self) -> Option<u32> {
        let discount = self.discount_pct?;
        if discount == 0 || discount >= 100 {
            return None;
        }
        let original = f64::from(self.price) / (1.0 - f64::from(discount) / 100.0);
        Some(original.round() as u32)
    }
}

impl CatalogEntry for Listing {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.description.as_str(),
            self.seller.name.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn price(&self) -> Option<u32> {
        Some(self.price)
    }

    fn posted_at(&self) -> Option<NaiveDate> {
        Some(self.posted_at)
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn popularity(&self) -> u32 {
        self.likes.count
    }

    fn engagement(&self, metric: Metric) -> Option<&Engagement> {
        match metric {
            Metric::Like => Some(&self.likes),
            _ => None,
        }
    }

    fn engagement_mut(&mut self, metric: Metric) -> Option<&mut Engagement> {
        match metric {
            Metric::Like => Some(&mut self.likes),
            _ => None,
        }
    }
}
