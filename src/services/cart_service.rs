use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::{
    entity::{
        cart::{self, Entity as Carts},
        carts_products::{self, Entity as CartsProducts},
        product::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Cart, Product},
    state::AppState,
};

pub async fn get_cart(state: &AppState, cart_id: i32) -> AppResult<Option<Cart>> {
    let cart = Carts::find_by_id(cart_id)
        .one(&state.orm)
        .await?
        .map(Cart::from);
    Ok(cart)
}

/// Products currently in the cart, or `CartNotFound` when the id does not resolve.
pub async fn cart_products(state: &AppState, cart_id: i32) -> AppResult<Vec<Product>> {
    let cart = match get_cart(state, cart_id).await? {
        Some(c) => c,
        None => {
            tracing::debug!(cart_id, "cart not found");
            return Err(AppError::CartNotFound);
        }
    };
    Ok(products_of(&state.orm, cart.id).await?)
}

pub async fn create_cart(state: &AppState) -> AppResult<Cart> {
    let (id,): (i32,) = sqlx::query_as("INSERT INTO cart DEFAULT VALUES RETURNING id")
        .fetch_one(&state.pool)
        .await?;

    tracing::info!(cart_id = id, "cart created");
    Ok(Cart { id })
}

/// Associate a product with a cart and return the cart's products.
/// Re-adding a product already in the cart leaves the association as is.
pub async fn add_product_to_cart(
    state: &AppState,
    cart_id: i32,
    product_id: i32,
) -> AppResult<Vec<Product>> {
    let txn = state.orm.begin().await?;

    let cart = find_cart(&txn, cart_id).await?;
    if Products::find_by_id(product_id).one(&txn).await?.is_none() {
        tracing::debug!(product_id, "product not found");
        return Err(AppError::NotFound(format!("product {product_id} not found")));
    }

    let existing = CartsProducts::find_by_id((cart_id, product_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        tracing::debug!(cart_id, product_id, "product already in cart");
    } else {
        CartsProducts::insert(carts_products::ActiveModel {
            cart_id: Set(cart_id),
            product_id: Set(product_id),
        })
        .exec_without_returning(&txn)
        .await?;
        tracing::info!(cart_id, product_id, "product added to cart");
    }

    let products = products_of(&txn, cart.id).await?;
    txn.commit().await?;
    Ok(products)
}

/// Remove one association between the cart and the product and return the
/// cart's remaining products.
pub async fn remove_product_from_cart(
    state: &AppState,
    cart_id: i32,
    product_id: i32,
) -> AppResult<Vec<Product>> {
    let txn = state.orm.begin().await?;

    let cart = find_cart(&txn, cart_id).await?;
    let result = CartsProducts::delete_many()
        .filter(carts_products::Column::CartId.eq(cart_id))
        .filter(carts_products::Column::ProductId.eq(product_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        tracing::debug!(cart_id, product_id, "product not in cart");
        return Err(AppError::NotFound(format!(
            "product {product_id} is not in cart {cart_id}"
        )));
    }

    let products = products_of(&txn, cart.id).await?;
    txn.commit().await?;

    tracing::info!(cart_id, product_id, "product removed from cart");
    Ok(products)
}

async fn find_cart<C: ConnectionTrait>(conn: &C, cart_id: i32) -> AppResult<cart::Model> {
    match Carts::find_by_id(cart_id).one(conn).await? {
        Some(c) => Ok(c),
        None => {
            tracing::debug!(cart_id, "cart not found");
            Err(AppError::NotFound(format!("cart {cart_id} not found")))
        }
    }
}

async fn products_of<C: ConnectionTrait>(conn: &C, cart_id: i32) -> Result<Vec<Product>, DbErr> {
    let products = cart::Model { id: cart_id }
        .find_related(Products)
        .all(conn)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(products)
}
