use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub image: String,
}

/// Per-line-item counter. Increments without bound, decrements floor at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn increment(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }

    pub fn decrement(&mut self) -> u32 {
        self.0 = self.0.saturating_sub(1);
        self.0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    // A product enters the cart with quantity 1.
    fn default() -> Self {
        Self(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: Quantity,
}

impl LineItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Quantity::default(),
        }
    }
}

/// The single cart state owned by `CartStore`. Items keep insertion order
/// and are unique by product id; `open` is independent of `items`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub open: bool,
    pub items: Vec<LineItem>,
}
