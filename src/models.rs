use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub type ItemId = Uuid;
pub type CartId = Uuid;

/// Lifecycle of an item. Deletion is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    #[default]
    Active,
    Deleted,
}

impl ItemStatus {
    pub fn is_deleted(self) -> bool {
        matches!(self, ItemStatus::Deleted)
    }
}

// Exposed to clients as the `deleted` flag.
impl Serialize for ItemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_deleted())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Item {
    #[schema(value_type = uuid::Uuid)]
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(rename = "deleted")]
    #[schema(value_type = bool)]
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_active(&self) -> bool {
        !self.status.is_deleted()
    }
}

/// Partial update for an item. Keys other than `name` and `price` are
/// collected into `rejected` so the store can refuse them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(flatten)]
    pub rejected: BTreeMap<String, serde_json::Value>,
}

impl ItemPatch {
    pub fn validate(&self) -> AppResult<()> {
        if self.rejected.contains_key("deleted") {
            return Err(AppError::invalid("cannot modify 'deleted' status"));
        }
        if !self.rejected.is_empty() {
            let fields: Vec<&str> = self.rejected.keys().map(String::as_str).collect();
            return Err(AppError::invalid(format!(
                "unexpected fields: {}",
                fields.join(", ")
            )));
        }
        if let Some(price) = self.price {
            ensure_positive_price(price)?;
        }
        Ok(())
    }
}

pub fn ensure_positive_price(price: f64) -> AppResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid("price must be positive"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartLine {
    #[schema(value_type = uuid::Uuid)]
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Cart {
    #[schema(value_type = uuid::Uuid)]
    pub id: CartId,
    pub lines: Vec<CartLine>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            price: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Sum of line quantities in this cart.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
