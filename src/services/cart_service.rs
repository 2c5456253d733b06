use crate::{
    dto::cart::{CartCreated, CartList},
    error::AppResult,
    models::{Cart, CartId, ItemId},
    response::{ApiResponse, Meta},
    routes::params::CartQuery,
    state::AppState,
};

pub fn create_cart(state: &AppState) -> ApiResponse<CartCreated> {
    let cart = state.carts.create();
    tracing::info!(cart_id = %cart.id, "cart created");

    ApiResponse::success(
        "Cart created",
        CartCreated { id: cart.id },
        Some(Meta::empty()),
    )
}

pub fn get_cart(state: &AppState, id: CartId) -> AppResult<ApiResponse<Cart>> {
    let cart = state.carts.get(id)?;
    Ok(ApiResponse::success("Cart", cart, None))
}

pub fn list_carts(state: &AppState, query: CartQuery) -> AppResult<ApiResponse<CartList>> {
    let window = query.pagination().window(0)?;
    let carts = state.carts.list(window, query.filter()?)?;
    tracing::debug!(
        offset = window.offset,
        limit = window.limit,
        count = carts.len(),
        "carts listed"
    );

    let meta = Meta::new(window.offset, window.limit, carts.len());
    Ok(ApiResponse::success("Carts", CartList { items: carts }, Some(meta)))
}

pub fn add_to_cart(
    state: &AppState,
    cart_id: CartId,
    item_id: ItemId,
) -> AppResult<ApiResponse<Cart>> {
    let cart = state.carts.add_item(cart_id, item_id)?;
    tracing::debug!(
        cart_id = %cart.id,
        item_id = %item_id,
        price = cart.price,
        "item added to cart"
    );

    Ok(ApiResponse::success("Item added to cart", cart, None))
}

pub fn remove_from_cart(
    state: &AppState,
    cart_id: CartId,
    item_id: ItemId,
) -> AppResult<ApiResponse<Cart>> {
    let cart = state.carts.remove_item(cart_id, item_id)?;
    tracing::debug!(
        cart_id = %cart.id,
        item_id = %item_id,
        price = cart.price,
        "item removed from cart"
    );

    Ok(ApiResponse::success("Removed from cart", cart, None))
}

pub fn delete_cart(state: &AppState, id: CartId) -> AppResult<ApiResponse<serde_json::Value>> {
    state.carts.delete(id)?;
    tracing::info!(cart_id = %id, "cart deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
