use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{CartCreated, CartList},
        items::{CreateItemRequest, ItemList, ReplaceItemRequest},
    },
    models::{Cart, CartLine, Item},
    response::{ApiResponse, Meta},
    routes::{cart, health, items, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::create_item,
        items::get_item,
        items::list_items,
        items::replace_item,
        items::patch_item,
        items::delete_item,
        cart::create_cart,
        cart::get_cart,
        cart::list_carts,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::delete_cart
    ),
    components(
        schemas(
            Item,
            Cart,
            CartLine,
            CreateItemRequest,
            ReplaceItemRequest,
            ItemList,
            CartCreated,
            CartList,
            params::ItemQuery,
            params::CartQuery,
            Meta,
            ApiResponse<Item>,
            ApiResponse<Cart>,
            ApiResponse<ItemList>,
            ApiResponse<CartList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Items", description = "Item endpoints"),
        (name = "Cart", description = "Cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
