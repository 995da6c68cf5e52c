use serde::{Deserialize, Serialize};

use crate::domain::{Product, ProductId, VoteDirection};

/// A request to move one product's score by exactly one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteIntent {
    pub product_id: ProductId,
    pub direction: VoteDirection,
}

impl VoteIntent {
    pub fn up(product_id: ProductId) -> Self {
        Self {
            product_id,
            direction: VoteDirection::Up,
        }
    }

    pub fn down(product_id: ProductId) -> Self {
        Self {
            product_id,
            direction: VoteDirection::Down,
        }
    }
}

/// Seed documents come either as a bare array or wrapped in `{ "products": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeedDocument {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

impl SeedDocument {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Wrapped { products } | Self::Bare(products) => products,
        }
    }
}
