use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemList, ReplaceItemRequest},
    error::AppResult,
    models::{Item, ItemPatch},
    response::ApiResponse,
    routes::params::ItemQuery,
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
}

#[utoipa::path(
    post,
    path = "/api/item",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Create item", body = ApiResponse<Item>),
        (status = 422, description = "Price is not positive"),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Item>>)> {
    let response = item_service::create_item(&state, payload)?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/item/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Get item", body = ApiResponse<Item>),
        (status = 404, description = "Item not found or deleted"),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Item>>> {
    Ok(Json(item_service::get_item(&state, id)?))
}

#[utoipa::path(
    get,
    path = "/api/item",
    params(
        ("offset" = Option<i64>, Query, description = "Entries to skip, default 0"),
        ("limit" = Option<i64>, Query, description = "Maximum entries, default 10, at least 1"),
        ("min_price" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("max_price" = Option<f64>, Query, description = "Inclusive upper price bound"),
        ("show_deleted" = Option<bool>, Query, description = "Include deleted items, default false"),
    ),
    responses(
        (status = 200, description = "List items", body = ApiResponse<ItemList>),
        (status = 422, description = "Malformed filter"),
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> AppResult<Json<ApiResponse<ItemList>>> {
    Ok(Json(item_service::list_items(&state, query)?))
}

#[utoipa::path(
    put,
    path = "/api/item/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = ReplaceItemRequest,
    responses(
        (status = 200, description = "Replaced item", body = ApiResponse<Item>),
        (status = 404, description = "Item not found or deleted"),
        (status = 422, description = "Price is not positive"),
    ),
    tag = "Items"
)]
pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplaceItemRequest>,
) -> AppResult<Json<ApiResponse<Item>>> {
    Ok(Json(item_service::replace_item(&state, id, payload)?))
}

#[utoipa::path(
    patch,
    path = "/api/item/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body(
        content = serde_json::Value,
        description = "Object with any of `name` and `price`; other keys are rejected"
    ),
    responses(
        (status = 200, description = "Patched item", body = ApiResponse<Item>),
        (status = 404, description = "Item not found or deleted"),
        (status = 422, description = "Unknown field or price is not positive"),
    ),
    tag = "Items"
)]
pub async fn patch_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ItemPatch>,
) -> AppResult<Json<ApiResponse<Item>>> {
    Ok(Json(item_service::patch_item(&state, id, patch)?))
}

#[utoipa::path(
    delete,
    path = "/api/item/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item flagged as deleted", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ApiResponse<serde_json::Value>> {
    Json(item_service::delete_item(&state, id))
}
