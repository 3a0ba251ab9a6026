use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One distinct purchasable selection in the cart.
///
/// `name`, `price` and `image` are captured when the item is added and are
/// never re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
    #[serde(default)]
    pub color: Option<String>,
}

impl CartLineItem {
    /// Creates a line item with no color variant.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            quantity,
            color: None,
        }
    }

    /// Sets the color variant. Blank colors mean "no variant".
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = normalize_color(Some(color.into()));
        self
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.id.clone(), self.color.clone())
    }

    pub fn matches(&self, id: &str, color: Option<&str>) -> bool {
        self.id == id && self.color.as_deref() == normalize_color_ref(color)
    }

    /// Unit price times quantity, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Identity of a line item: product id plus color variant.
///
/// An absent color and an empty color are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub id: String,
    pub color: Option<String>,
}

impl LineKey {
    pub fn new(id: impl Into<String>, color: Option<String>) -> Self {
        Self {
            id: id.into(),
            color: normalize_color(color),
        }
    }
}

impl std::fmt::Display for LineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.color {
            Some(color) => write!(f, "{}/{}", self.id, color),
            None => write!(f, "{}", self.id),
        }
    }
}

pub(crate) fn normalize_color(color: Option<String>) -> Option<String> {
    color.filter(|c| !c.trim().is_empty())
}

pub(crate) fn normalize_color_ref(color: Option<&str>) -> Option<&str> {
    color.filter(|c| !c.trim().is_empty())
}
