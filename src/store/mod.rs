//! In-memory item and cart bookkeeping.
//!
//! `ItemStore` owns item records, `CartStore` owns carts and reads item
//! prices back from the shared `ItemStore` whenever a cart is returned.

use std::sync::{LockResult, PoisonError};

use crate::error::{AppError, AppResult};

pub mod carts;
pub mod items;

pub use carts::{CartFilter, CartStore};
pub use items::{ItemFilter, ItemStore};

/// Offset/limit slice over a creation-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    pub offset: usize,
    pub limit: usize,
}

impl ListWindow {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Out-of-range offsets yield an empty slice.
    pub fn apply<T>(&self, entries: Vec<T>) -> Vec<T> {
        entries
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

/// Inclusive bounds; `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    fn ensure_ordered(&self, what: &str) -> AppResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(AppError::invalid(format!(
                "min_{what} must not exceed max_{what}"
            ))),
            _ => Ok(()),
        }
    }
}

impl Bounds<f64> {
    pub fn validate_price(&self) -> AppResult<()> {
        for bound in [self.min, self.max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(AppError::invalid("price bounds must be finite"));
            }
        }
        if self.min.is_some_and(|min| min < 0.0) {
            return Err(AppError::invalid("min_price must not be negative"));
        }
        self.ensure_ordered("price")
    }
}

impl Bounds<u64> {
    pub fn validate_quantity(&self) -> AppResult<()> {
        self.ensure_ordered("quantity")
    }
}

/// A panicked writer cannot leave a half-applied mutation behind (every
/// operation validates before it writes), so poisoned guards stay usable.
pub(crate) fn recover<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(PoisonError::into_inner)
}
