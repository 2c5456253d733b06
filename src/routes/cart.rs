use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::cart::{CartCreated, CartList},
    error::AppResult,
    models::Cart,
    response::ApiResponse,
    routes::params::CartQuery,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carts).post(create_cart))
        .route("/{cart_id}", get(get_cart).delete(delete_cart))
        .route("/{cart_id}/add/{item_id}", post(add_to_cart))
        .route("/{cart_id}/remove/{item_id}", post(remove_from_cart))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    responses(
        (status = 201, description = "Create empty cart", body = ApiResponse<CartCreated>)
    ),
    tag = "Cart"
)]
pub async fn create_cart(State(state): State<AppState>) -> impl IntoResponse {
    let response = cart_service::create_cart(&state);
    let location = response
        .data
        .as_ref()
        .map(|created| format!("/api/cart/{}", created.id))
        .unwrap_or_default();

    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    )
}

#[utoipa::path(
    get,
    path = "/api/cart/{cart_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart with current price", body = ApiResponse<Cart>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    Ok(Json(cart_service::get_cart(&state, cart_id)?))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("offset" = Option<i64>, Query, description = "Entries to skip, default 0"),
        ("limit" = Option<i64>, Query, description = "Maximum entries, default 10"),
        ("min_price" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("max_price" = Option<f64>, Query, description = "Inclusive upper price bound"),
        ("min_quantity" = Option<i64>, Query, description = "Inclusive lower bound on a cart's total quantity"),
        ("max_quantity" = Option<i64>, Query, description = "Inclusive upper bound on a cart's total quantity"),
    ),
    responses(
        (status = 200, description = "List carts", body = ApiResponse<CartList>),
        (status = 422, description = "Malformed filter"),
    ),
    tag = "Cart"
)]
pub async fn list_carts(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<ApiResponse<CartList>>> {
    Ok(Json(cart_service::list_carts(&state, query)?))
}

#[utoipa::path(
    post,
    path = "/api/cart/{cart_id}/add/{item_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Updated cart", body = ApiResponse<Cart>),
        (status = 404, description = "Cart or item not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path((cart_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    Ok(Json(cart_service::add_to_cart(&state, cart_id, item_id)?))
}

#[utoipa::path(
    post,
    path = "/api/cart/{cart_id}/remove/{item_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Updated cart", body = ApiResponse<Cart>),
        (status = 404, description = "Cart, item or cart line not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((cart_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    Ok(Json(cart_service::remove_from_cart(
        &state, cart_id, item_id,
    )?))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{cart_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Cart"
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(cart_service::delete_cart(&state, cart_id)?))
}
