use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog product.
///
/// The identifier is assigned by the store on first save and is immutable
/// afterwards. Client-supplied identifiers never enter through the JSON
/// boundary; `id` and the timestamps are store-managed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product ID, `None` until persisted
    #[serde(skip_deserializing)]
    pub id: Option<i64>,

    /// Display name
    pub name: String,

    /// Optional long-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price
    pub price: Decimal,

    /// When the product was first persisted
    #[serde(skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last replaced
    #[serde(skip_deserializing)]
    pub updated_at: Option<DateTime<Utc>>,
}
