use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{cart, product};

/// Wire shape of a product. Field order and names are part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub slug: String,
    pub url: Option<String>,
}

impl From<product::Model> for Product {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
            slug: model.slug,
            url: model.url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: i32,
}

impl From<cart::Model> for Cart {
    fn from(model: cart::Model) -> Self {
        Self { id: model.id }
    }
}
