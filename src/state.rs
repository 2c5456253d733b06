use std::sync::Arc;

use crate::store::{CartStore, ItemStore};

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemStore>,
    pub carts: Arc<CartStore>,
}

impl AppState {
    pub fn new() -> Self {
        let items = Arc::new(ItemStore::new());
        let carts = Arc::new(CartStore::new(Arc::clone(&items)));
        Self { items, carts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
