use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Cart;

#[derive(Debug, Serialize, ToSchema)]
pub struct CartCreated {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartList {
    #[schema(value_type = Vec<Cart>)]
    pub items: Vec<Cart>,
}
