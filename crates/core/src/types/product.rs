//! Catalog product reference data.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// Error returned when a category tag is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// Product category tag.
///
/// Serialized as the capitalised tag used by the shop ("Traditional").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Traditional,
    Premium,
    Festive,
    Regional,
    Specialty,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 5] = [
        Self::Traditional,
        Self::Premium,
        Self::Festive,
        Self::Regional,
        Self::Specialty,
    ];

    /// The tag as shown in the shop.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "Traditional",
            Self::Premium => "Premium",
            Self::Festive => "Festive",
            Self::Regional => "Regional",
            Self::Specialty => "Specialty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

/// A product in the shop catalog.
///
/// Immutable reference data; the storefront snapshots it into cart lines
/// when it is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image path or URL.
    pub image: String,
    /// Short description.
    pub description: String,
    /// Flavor notes (e.g., "Sweet, syrupy, soft").
    pub flavor: String,
    /// Category tag.
    pub category: Category,
}
