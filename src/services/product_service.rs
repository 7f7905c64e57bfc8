use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::{
    dto::products::CreateProductRequest,
    entity::product::{ActiveModel, Column, Entity as Products},
    error::AppResult,
    models::Product,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

/// Exact-match lookup on the unique slug. A miss is `None`, not an error.
pub async fn get_product_by_slug(state: &AppState, slug: &str) -> AppResult<Option<Product>> {
    let product = Products::find()
        .filter(Column::Slug.eq(slug))
        .one(&state.orm)
        .await?
        .map(Product::from);
    if product.is_none() {
        tracing::debug!(slug, "product slug not found");
    }
    Ok(product)
}

/// Insert every product in one transaction and return them in input order.
/// Any failure (duplicate slug included) rolls the whole batch back.
pub async fn create_products(
    state: &AppState,
    payload: Vec<CreateProductRequest>,
) -> AppResult<Vec<Product>> {
    let txn = state.orm.begin().await?;

    let mut created = Vec::with_capacity(payload.len());
    for input in payload {
        let active = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            description: Set(input.description),
            slug: Set(input.slug),
            url: Set(input.url),
        };
        let product = active.insert(&txn).await?;
        created.push(Product::from(product));
    }

    txn.commit().await?;

    tracing::info!(count = created.len(), "products created");
    Ok(created)
}
