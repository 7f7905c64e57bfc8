use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Cart;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartCreated {
    pub id: i32,
}

impl From<Cart> for CartCreated {
    fn from(cart: Cart) -> Self {
        Self { id: cart.id }
    }
}
