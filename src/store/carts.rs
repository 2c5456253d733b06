use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Cart, CartId, CartLine, ItemId},
    store::{Bounds, ItemStore, ListWindow, recover},
};

/// Price and per-cart quantity filter for cart listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartFilter {
    pub price: Bounds<f64>,
    pub quantity: Bounds<u64>,
}

impl CartFilter {
    fn validate(&self) -> AppResult<()> {
        self.price.validate_price()?;
        self.quantity.validate_quantity()
    }

    fn matches(&self, cart: &Cart) -> bool {
        self.price.contains(cart.price) && self.quantity.contains(cart.total_quantity())
    }
}

type CartSlot = Arc<Mutex<Cart>>;

#[derive(Debug, Default)]
struct CartTable {
    by_id: HashMap<CartId, CartSlot>,
    order: Vec<CartId>,
}

/// Carts keyed by id. The table lock only guards membership; each cart sits
/// behind its own mutex so line updates on one cart never block another.
#[derive(Debug)]
pub struct CartStore {
    items: Arc<ItemStore>,
    table: RwLock<CartTable>,
}

impl CartStore {
    pub fn new(items: Arc<ItemStore>) -> Self {
        Self {
            items,
            table: RwLock::new(CartTable::default()),
        }
    }

    pub fn create(&self) -> Cart {
        let mut table = recover(self.table.write());
        let mut id = Uuid::new_v4();
        while table.by_id.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let cart = Cart::new(id);
        table.by_id.insert(id, Arc::new(Mutex::new(cart.clone())));
        table.order.push(id);
        cart
    }

    pub fn get(&self, id: CartId) -> AppResult<Cart> {
        let slot = self.slot(id)?;
        let mut cart = recover(slot.lock());
        self.recompute_price(&mut cart);
        Ok(cart.clone())
    }

    pub fn list(&self, window: ListWindow, filter: CartFilter) -> AppResult<Vec<Cart>> {
        filter.validate()?;

        let slots: Vec<CartSlot> = {
            let table = recover(self.table.read());
            table
                .order
                .iter()
                .filter_map(|id| table.by_id.get(id).cloned())
                .collect()
        };

        let matching = slots
            .iter()
            .map(|slot| {
                let mut cart = recover(slot.lock());
                self.recompute_price(&mut cart);
                cart.clone()
            })
            .filter(|cart| filter.matches(cart))
            .collect();
        Ok(window.apply(matching))
    }

    pub fn add_item(&self, cart_id: CartId, item_id: ItemId) -> AppResult<Cart> {
        let slot = self.slot(cart_id)?;
        self.items.get(item_id)?;

        let mut cart = recover(slot.lock());
        match cart.lines.iter_mut().find(|line| line.item_id == item_id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .ok_or_else(|| AppError::invalid("cart line quantity limit reached"))?;
            }
            None => cart.lines.push(CartLine {
                item_id,
                quantity: 1,
            }),
        }
        self.recompute_price(&mut cart);
        Ok(cart.clone())
    }

    pub fn remove_item(&self, cart_id: CartId, item_id: ItemId) -> AppResult<Cart> {
        let slot = self.slot(cart_id)?;
        self.items.get(item_id)?;

        let mut cart = recover(slot.lock());
        let position = cart
            .lines
            .iter()
            .position(|line| line.item_id == item_id)
            .ok_or(AppError::NotFound("Cart line"))?;

        let line = &mut cart.lines[position];
        line.quantity = line.quantity.saturating_sub(1);
        if line.quantity == 0 {
            cart.lines.remove(position);
        }
        self.recompute_price(&mut cart);
        Ok(cart.clone())
    }

    pub fn delete(&self, id: CartId) -> AppResult<()> {
        let mut table = recover(self.table.write());
        table.by_id.remove(&id).ok_or(AppError::NotFound("Cart"))?;
        table.order.retain(|existing| *existing != id);
        Ok(())
    }

    /// Deleted or unknown items contribute nothing; their lines stay in place.
    fn recompute_price(&self, cart: &mut Cart) {
        cart.price = cart
            .lines
            .iter()
            .filter_map(|line| {
                self.items
                    .get_raw(line.item_id)
                    .filter(|item| item.is_active())
                    .map(|item| item.price * f64::from(line.quantity))
            })
            .sum();
    }

    fn slot(&self, id: CartId) -> AppResult<CartSlot> {
        recover(self.table.read())
            .by_id
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound("Cart"))
    }
}
