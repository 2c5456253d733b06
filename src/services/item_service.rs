use crate::{
    dto::items::{CreateItemRequest, ItemList, ReplaceItemRequest},
    error::AppResult,
    models::{Item, ItemId, ItemPatch},
    response::{ApiResponse, Meta},
    routes::params::ItemQuery,
    state::AppState,
};

pub fn create_item(state: &AppState, payload: CreateItemRequest) -> AppResult<ApiResponse<Item>> {
    let item = state.items.create(payload.name, payload.price)?;
    tracing::info!(item_id = %item.id, price = item.price, "item created");

    Ok(ApiResponse::success(
        "Item created",
        item,
        Some(Meta::empty()),
    ))
}

pub fn get_item(state: &AppState, id: ItemId) -> AppResult<ApiResponse<Item>> {
    let item = state.items.get(id)?;
    Ok(ApiResponse::success("Item", item, None))
}

pub fn list_items(state: &AppState, query: ItemQuery) -> AppResult<ApiResponse<ItemList>> {
    let window = query.pagination().window(1)?;
    let items = state.items.list(window, query.filter())?;
    tracing::debug!(
        offset = window.offset,
        limit = window.limit,
        count = items.len(),
        "items listed"
    );

    let meta = Meta::new(window.offset, window.limit, items.len());
    Ok(ApiResponse::success("Items", ItemList { items }, Some(meta)))
}

pub fn replace_item(
    state: &AppState,
    id: ItemId,
    payload: ReplaceItemRequest,
) -> AppResult<ApiResponse<Item>> {
    let item = state.items.replace(id, payload.name, payload.price)?;
    tracing::debug!(item_id = %item.id, price = item.price, "item replaced");

    Ok(ApiResponse::success("Updated", item, Some(Meta::empty())))
}

pub fn patch_item(state: &AppState, id: ItemId, patch: ItemPatch) -> AppResult<ApiResponse<Item>> {
    let item = state.items.patch(id, patch)?;
    tracing::debug!(item_id = %item.id, price = item.price, "item patched");

    Ok(ApiResponse::success("Updated", item, Some(Meta::empty())))
}

pub fn delete_item(state: &AppState, id: ItemId) -> ApiResponse<serde_json::Value> {
    if state.items.soft_delete(id) {
        tracing::info!(item_id = %id, "item deleted");
    } else {
        tracing::debug!(item_id = %id, "item already deleted or unknown");
    }

    ApiResponse::success("Item deleted", serde_json::json!({}), Some(Meta::empty()))
}
