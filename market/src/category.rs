//! Service categories offered on the marketplace.
//!
//! The set is fixed; the wire representation is the human-readable name
//! (`"Home Repair"`, `"Pet Care"`, ...) so the same string is used for the
//! API `category` parameter, in-app links, and display.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten service categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Home Repair")]
    HomeRepair,
    Cleaning,
    Moving,
    Gardening,
    Plumbing,
    Electrical,
    Tuition,
    #[serde(rename = "Pet Care")]
    PetCare,
    Tailoring,
    Delivery,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 10] = [
        Self::HomeRepair,
        Self::Cleaning,
        Self::Moving,
        Self::Gardening,
        Self::Plumbing,
        Self::Electrical,
        Self::Tuition,
        Self::PetCare,
        Self::Tailoring,
        Self::Delivery,
    ];

    /// Wire and display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HomeRepair => "Home Repair",
            Self::Cleaning => "Cleaning",
            Self::Moving => "Moving",
            Self::Gardening => "Gardening",
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Tuition => "Tuition",
            Self::PetCare => "Pet Care",
            Self::Tailoring => "Tailoring",
            Self::Delivery => "Delivery",
        }
    }

    /// Parse an exact wire name. Matching is case-sensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    /// Whether the listings page shows a themed hero banner for this category.
    #[must_use]
    pub fn has_hero(self) -> bool {
        matches!(
            self,
            Self::HomeRepair | Self::Cleaning | Self::Moving | Self::Gardening | Self::Plumbing | Self::Electrical
        )
    }

    /// Short marketing line for hero banners and the services page.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::HomeRepair => "Fixes, fittings and odd jobs around the house",
            Self::Cleaning => "Deep cleaning for homes and offices",
            Self::Moving => "Hassle-free relocation services",
            Self::Gardening => "Beautiful landscape design and care",
            Self::Plumbing => "Expert leak repairs and pipe installations",
            Self::Electrical => "Safe wiring and electrical maintenance",
            Self::Tuition => "Patient tutors for every subject",
            Self::PetCare => "Walking, sitting and grooming",
            Self::Tailoring => "Alterations and made-to-measure",
            Self::Delivery => "Same-day local pickup and drop-off",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection on the listings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse the `category` query parameter. Empty or unknown values mean "all".
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(Category::parse).map_or(Self::All, Self::Only)
    }

    /// Value for `<select>` options and the query string (`""` for all).
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Only(category) => category.as_str(),
        }
    }

    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }
}
