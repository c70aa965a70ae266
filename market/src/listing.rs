//! Listings as returned by `GET /listings` and `GET /listings/{id}`.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryFilter};

/// The provider who owns a listing, as embedded in the listing payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Provider user identifier; omitted by some list endpoints.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if the provider uploaded one.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Average review score in `[0, 5]`, absent for new providers.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Provider {
    /// Rating with one decimal, or `"New"` when the provider has no score yet.
    #[must_use]
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) if rating > 0.0 => format!("{:.1}", rating.clamp(0.0, 5.0)),
            _ => "New".to_owned(),
        }
    }

    /// Number of lit stars out of five.
    #[must_use]
    pub fn filled_stars(&self) -> usize {
        let rating = self.rating.unwrap_or(0.0);
        (0..5u8).filter(|i| rating > f64::from(*i)).count()
    }
}

/// A published service offering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Category wire name. Kept as a string so listings in categories this
    /// client does not know about still render.
    pub category: String,
    pub description: String,
    pub price_per_hour: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form availability slot descriptions, in display order.
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(rename = "providerId")]
    pub provider: Provider,
}

impl Listing {
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price formatted as `"$25/hr"` (whole) or `"$25.5/hr"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        let price = self.price_per_hour.max(0.0);
        if price.fract() == 0.0 {
            format!("${price:.0}/hr")
        } else {
            format!("${price}/hr")
        }
    }

    /// Known category, if the wire name matches one.
    #[must_use]
    pub fn known_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// In-app route for the detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        listing_path(&self.id)
    }
}

/// Route (and API path) for a single listing. The id is percent-encoded so
/// it always stays one path segment.
#[must_use]
pub fn listing_path(id: &str) -> String {
    format!("/listings/{}", urlencoding::encode(id))
}

/// Filters for the listing browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Free-text search term as typed.
    pub q: String,
    pub category: CategoryFilter,
}

impl ListingQuery {
    #[must_use]
    pub fn new(q: impl Into<String>, category: CategoryFilter) -> Self {
        Self { q: q.into(), category }
    }

    /// Build from raw `q` / `category` query parameters.
    #[must_use]
    pub fn from_params(q: Option<&str>, category: Option<&str>) -> Self {
        Self {
            q: q.unwrap_or_default().to_owned(),
            category: CategoryFilter::from_param(category),
        }
    }

    /// Query parameters to send: `q` only for a non-blank term, `category`
    /// only when one is selected.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        let term = self.q.trim();
        if !term.is_empty() {
            pairs.push(("q", term.to_owned()));
        }
        if let Some(category) = self.category.category() {
            pairs.push(("category", category.as_str().to_owned()));
        }
        pairs
    }

    /// URL-encoded query string without the leading `?` (empty when no filter).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `/listings` plus the encoded query string.
    #[must_use]
    pub fn listings_path(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/listings".to_owned()
        } else {
            format!("/listings?{query}")
        }
    }
}
