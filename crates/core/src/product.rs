//! The canonical product shape.
//!
//! Every layer that touches products speaks this one shape. The storage
//! adapter translates between its column names and these fields; nothing
//! downstream ever branches on which variant of a field name it received.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Prices are integer minor units (cents). Keeping money in integers is a
/// correctness requirement for every total computed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, assigned at creation. Never reused within a
    /// single replace-all generation.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Price in currency minor units (USD cents). Non-negative.
    pub price_cents: i64,
    /// Display material description.
    #[serde(default)]
    pub material: String,
    /// Restricted-stock flag.
    #[serde(default)]
    pub limited: bool,
    /// Units left. Meaningful only when `limited` is set, but always present.
    #[serde(default)]
    pub remaining: i64,
    /// Overrides the add-to-cart affordance regardless of `remaining`.
    #[serde(default)]
    pub sold_out: bool,
    /// Display asset reference. Renderers substitute a placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Set by the catalog store, not the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Set by the catalog store, not the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    ///
    /// A product is purchasable iff it is not sold out and not a limited
    /// run with zero units remaining. The cart panel and the grid must
    /// agree on this predicate, so it lives here and nowhere else.
    #[must_use]
    pub const fn purchasable(&self) -> bool {
        !self.sold_out && !(self.limited && self.remaining == 0)
    }

    /// Stringified id, the form cart ledger keys use.
    #[must_use]
    pub fn id_key(&self) -> String {
        self.id.to_string()
    }
}

/// A product as submitted to the replace-all endpoint or the seed command.
///
/// Requires `id`, `name` and `priceCents`; everything else defaults rather
/// than failing the whole request. Timestamps are never accepted from the
/// client - the store stamps them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub limited: bool,
    #[serde(default)]
    pub remaining: i64,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewProduct {
    /// Validate the field-level invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field when `priceCents` or
    /// `remaining` is negative.
    pub fn validate(&self) -> Result<(), String> {
        if self.price_cents < 0 {
            return Err(format!("product {}: priceCents must be non-negative", self.id));
        }
        if self.remaining < 0 {
            return Err(format!("product {}: remaining must be non-negative", self.id));
        }
        Ok(())
    }
}
