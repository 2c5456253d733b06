use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    store::{Bounds, CartFilter, ItemFilter, ListWindow},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Pagination {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// Defaults to the first ten entries. `min_limit` is the smallest limit
    /// the endpoint accepts.
    pub fn window(&self, min_limit: i64) -> AppResult<ListWindow> {
        let defaults = ListWindow::default();
        let offset = match self.offset {
            Some(offset) => usize::try_from(offset)
                .map_err(|_| AppError::invalid("offset must not be negative"))?,
            None => defaults.offset,
        };
        let limit = match self.limit {
            Some(limit) if limit < min_limit => {
                return Err(AppError::invalid(format!(
                    "limit must be at least {min_limit}"
                )));
            }
            Some(limit) => usize::try_from(limit)
                .map_err(|_| AppError::invalid("limit must not be negative"))?,
            None => defaults.limit,
        };
        Ok(ListWindow::new(offset, limit))
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub show_deleted: Option<bool>,
}

impl ItemQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filter(&self) -> ItemFilter {
        ItemFilter {
            price: Bounds::new(self.min_price, self.max_price),
            show_deleted: self.show_deleted.unwrap_or(false),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CartQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

impl CartQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filter(&self) -> AppResult<CartFilter> {
        let quantity = |bound: Option<i64>, name: &str| {
            bound
                .map(u64::try_from)
                .transpose()
                .map_err(|_| AppError::invalid(format!("{name} must not be negative")))
        };
        Ok(CartFilter {
            price: Bounds::new(self.min_price, self.max_price),
            quantity: Bounds::new(
                quantity(self.min_quantity, "min_quantity")?,
                quantity(self.max_quantity, "max_quantity")?,
            ),
        })
    }
}
