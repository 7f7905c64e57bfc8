use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub slug: String,
    pub url: Option<String>,
}

/// Result of a slug lookup. A miss serializes as `{}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProductLookup {
    Found(Product),
    Missing {},
}

impl From<Option<Product>> for ProductLookup {
    fn from(product: Option<Product>) -> Self {
        match product {
            Some(p) => ProductLookup::Found(p),
            None => ProductLookup::Missing {},
        }
    }
}
