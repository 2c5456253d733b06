use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemId, ItemPatch, ItemStatus, ensure_positive_price},
    store::{Bounds, ListWindow, recover},
};

/// Visibility and price filter for item listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter {
    pub price: Bounds<f64>,
    pub show_deleted: bool,
}

impl ItemFilter {
    fn matches(&self, item: &Item) -> bool {
        (self.show_deleted || item.is_active()) && self.price.contains(item.price)
    }
}

#[derive(Debug, Default)]
struct ItemTable {
    by_id: HashMap<ItemId, Item>,
    // Creation order; items are never removed.
    order: Vec<ItemId>,
}

impl ItemTable {
    fn active_mut(&mut self, id: ItemId) -> AppResult<&mut Item> {
        self.by_id
            .get_mut(&id)
            .filter(|item| item.is_active())
            .ok_or(AppError::NotFound("Item"))
    }
}

#[derive(Debug, Default)]
pub struct ItemStore {
    table: RwLock<ItemTable>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, name: String, price: f64) -> AppResult<Item> {
        ensure_positive_price(price)?;

        let mut table = recover(self.table.write());
        let mut id = Uuid::new_v4();
        while table.by_id.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let item = Item {
            id,
            name,
            price,
            status: ItemStatus::Active,
            created_at: Utc::now(),
        };
        table.by_id.insert(id, item.clone());
        table.order.push(id);
        Ok(item)
    }

    /// Active items only.
    pub fn get(&self, id: ItemId) -> AppResult<Item> {
        self.get_raw(id)
            .filter(Item::is_active)
            .ok_or(AppError::NotFound("Item"))
    }

    /// Returns the record whatever its status; `None` only for ids never issued.
    pub fn get_raw(&self, id: ItemId) -> Option<Item> {
        recover(self.table.read()).by_id.get(&id).cloned()
    }

    pub fn replace(&self, id: ItemId, name: String, price: f64) -> AppResult<Item> {
        let mut table = recover(self.table.write());
        let item = table.active_mut(id)?;
        ensure_positive_price(price)?;
        item.name = name;
        item.price = price;
        Ok(item.clone())
    }

    pub fn patch(&self, id: ItemId, patch: ItemPatch) -> AppResult<Item> {
        let mut table = recover(self.table.write());
        let item = table.active_mut(id)?;
        patch.validate()?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        Ok(item.clone())
    }

    /// Flags the item as deleted. Returns whether the status changed; absent
    /// or already deleted ids are not an error.
    pub fn soft_delete(&self, id: ItemId) -> bool {
        let mut table = recover(self.table.write());
        match table.by_id.get_mut(&id) {
            Some(item) if item.is_active() => {
                item.status = ItemStatus::Deleted;
                true
            }
            _ => false,
        }
    }

    pub fn list(&self, window: ListWindow, filter: ItemFilter) -> AppResult<Vec<Item>> {
        filter.price.validate_price()?;

        let table = recover(self.table.read());
        let matching = table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        Ok(window.apply(matching))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(store: &ItemStore, prices: &[f64]) -> Vec<Item> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| store.create(format!("item-{i}"), *price).unwrap())
            .collect()
    }

    #[test]
    fn create_then_get_returns_same_fields() {
        let store = ItemStore::new();
        let item = store.create("Mug".into(), 12.5).unwrap();

        let fetched = store.get(item.id).unwrap();
        assert_eq!(fetched.name, "Mug");
        assert_eq!(fetched.price, 12.5);
        assert_eq!(fetched.status, ItemStatus::Active);
    }

    #[test]
    fn create_rejects_non_positive_price() {
        let store = ItemStore::new();
        assert!(matches!(
            store.create("zero".into(), 0.0),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            store.create("negative".into(), -5.0),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(store.list(ListWindow::default(), ItemFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn soft_delete_hides_item_but_keeps_raw_record() {
        let store = ItemStore::new();
        let item = store.create("Lamp".into(), 30.0).unwrap();

        assert!(store.soft_delete(item.id));
        assert_eq!(store.get(item.id), Err(AppError::NotFound("Item")));

        let raw = store.get_raw(item.id).unwrap();
        assert_eq!(raw.status, ItemStatus::Deleted);
        assert_eq!(raw.price, 30.0);
    }

    #[test]
    fn soft_delete_is_idempotent_and_forgiving() {
        let store = ItemStore::new();
        let item = store.create("Lamp".into(), 30.0).unwrap();

        assert!(store.soft_delete(item.id));
        assert!(!store.soft_delete(item.id));
        assert!(!store.soft_delete(Uuid::new_v4()));
    }

    #[test]
    fn deleted_item_rejects_further_mutation() {
        let store = ItemStore::new();
        let item = store.create("Lamp".into(), 30.0).unwrap();
        store.soft_delete(item.id);

        assert_eq!(
            store.replace(item.id, "Other".into(), 1.0),
            Err(AppError::NotFound("Item"))
        );
        assert_eq!(
            store.patch(item.id, ItemPatch::default()),
            Err(AppError::NotFound("Item"))
        );
    }

    #[test]
    fn replace_overwrites_name_and_price_only() {
        let store = ItemStore::new();
        let item = store.create("Old".into(), 5.0).unwrap();

        store.replace(item.id, "New".into(), 7.0).unwrap();
        let fetched = store.get(item.id).unwrap();
        assert_eq!(fetched.id, item.id);
        assert_eq!(fetched.name, "New");
        assert_eq!(fetched.price, 7.0);
        assert_eq!(fetched.created_at, item.created_at);
    }

    #[test]
    fn replace_with_invalid_price_changes_nothing() {
        let store = ItemStore::new();
        let item = store.create("Old".into(), 5.0).unwrap();

        assert!(store.replace(item.id, "New".into(), -1.0).is_err());
        assert_eq!(store.get(item.id).unwrap().name, "Old");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let store = ItemStore::new();
        let item = store.create("Pen".into(), 2.0).unwrap();

        let patch = ItemPatch {
            price: Some(3.0),
            ..ItemPatch::default()
        };
        let patched = store.patch(item.id, patch).unwrap();
        assert_eq!(patched.name, "Pen");
        assert_eq!(patched.price, 3.0);
    }

    #[test]
    fn patch_rejects_deleted_and_unknown_fields() {
        let store = ItemStore::new();
        let item = store.create("Pen".into(), 2.0).unwrap();

        let deleted: ItemPatch = serde_json::from_value(serde_json::json!({ "deleted": true })).unwrap();
        assert!(matches!(store.patch(item.id, deleted), Err(AppError::InvalidArgument(_))));

        let unknown: ItemPatch =
            serde_json::from_value(serde_json::json!({ "name": "Ink", "colour": "blue" })).unwrap();
        assert!(matches!(store.patch(item.id, unknown), Err(AppError::InvalidArgument(_))));

        assert_eq!(store.get(item.id).unwrap().name, "Pen");
    }

    #[test]
    fn patch_rejects_non_positive_price() {
        let store = ItemStore::new();
        let item = store.create("Pen".into(), 2.0).unwrap();

        for price in [0.0, -1.0] {
            let patch = ItemPatch {
                name: Some("Free pen".into()),
                price: Some(price),
                ..ItemPatch::default()
            };
            assert!(matches!(
                store.patch(item.id, patch),
                Err(AppError::InvalidArgument(_))
            ));
        }

        let fetched = store.get(item.id).unwrap();
        assert_eq!(fetched.price, 2.0);
        assert_eq!(fetched.name, "Pen");
    }

    #[test]
    fn patch_on_missing_item_is_not_found_before_field_checks() {
        let store = ItemStore::new();
        let bad: ItemPatch = serde_json::from_value(serde_json::json!({ "deleted": true })).unwrap();
        assert_eq!(store.patch(Uuid::new_v4(), bad), Err(AppError::NotFound("Item")));
    }

    #[test]
    fn list_filters_by_min_price_in_creation_order() {
        let store = ItemStore::new();
        let items = priced(&store, &[5.0, 10.0, 15.0]);

        let filter = ItemFilter {
            price: Bounds::new(Some(10.0), None),
            ..ItemFilter::default()
        };
        let listed = store.list(ListWindow::default(), filter).unwrap();
        let ids: Vec<_> = listed.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![items[1].id, items[2].id]);
    }

    #[test]
    fn list_hides_deleted_unless_requested() {
        let store = ItemStore::new();
        let items = priced(&store, &[5.0, 10.0]);
        store.soft_delete(items[0].id);

        let visible = store.list(ListWindow::default(), ItemFilter::default()).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, items[1].id);

        let filter = ItemFilter {
            show_deleted: true,
            ..ItemFilter::default()
        };
        assert_eq!(store.list(ListWindow::default(), filter).unwrap().len(), 2);
    }

    #[test]
    fn list_applies_window_after_filtering() {
        let store = ItemStore::new();
        let items = priced(&store, &[1.0, 20.0, 30.0, 40.0]);

        let filter = ItemFilter {
            price: Bounds::new(Some(10.0), Some(40.0)),
            ..ItemFilter::default()
        };
        let listed = store.list(ListWindow::new(1, 1), filter).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, items[2].id);

        assert!(store.list(ListWindow::new(100, 10), filter).unwrap().is_empty());
    }
}
