//! The `Product` entity and its creation payload.
//!
//! These types mirror the record store's JSON wire format exactly. Price is
//! a `rust_decimal::Decimal` serialized as a JSON number (the record store
//! expects `12.5`, not `"12.5"`), which is why the workspace enables the
//! `serde-with-float` feature.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A catalog product as persisted by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the record store.
    pub id: ProductId,
    /// Product name (required, non-empty).
    pub name: String,
    /// Product description (required, non-empty).
    pub description: String,
    /// Non-negative price in the store currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Non-negative units in stock.
    pub stock: i64,
    /// Static asset path from the fixed image set.
    pub image: String,
}

/// Payload for creating a product. The record store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    pub image: String,
}

impl Product {
    /// Rebuild a full product from a creation payload and an assigned id.
    ///
    /// Used by the edit flow, which sends a full replace of every field.
    #[must_use]
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            stock: new.stock,
            image: new.image,
        }
    }
}
