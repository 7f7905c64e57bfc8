use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::{delete, get, post},
};

use crate::{
    dto::cart::CartCreated,
    error::{AppError, AppResult},
    models::Product,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{cart_id}", get(cart_list))
        .route("/{cart_id}/add/{product_id}", post(add_to_cart))
        .route("/{cart_id}/remove/{product_id}", delete(remove_from_cart))
}

// An id that does not parse as an integer matches no cart or product.
fn cart_id_or_not_found(path: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    match path {
        Ok(Path(cart_id)) => Ok(cart_id),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unparsable cart id");
            Err(AppError::CartNotFound)
        }
    }
}

fn ids_or_not_found(path: Result<Path<(i32, i32)>, PathRejection>) -> AppResult<(i32, i32)> {
    match path {
        Ok(Path(ids)) => Ok(ids),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unparsable cart or product id");
            Err(AppError::NotFound("no such cart or product".to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/cart/{cart_id}",
    params(
        ("cart_id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Products in the cart", body = [Product]),
        (status = 404, description = "Cart not found or id is not an integer", body = String, content_type = "text/plain"),
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let cart_id = cart_id_or_not_found(path)?;
    let items = cart_service::cart_products(&state, cart_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/cart",
    responses(
        (status = 200, description = "Empty cart created", body = CartCreated)
    ),
    tag = "Cart"
)]
pub async fn create_cart(State(state): State<AppState>) -> AppResult<Json<CartCreated>> {
    let cart = cart_service::create_cart(&state).await?;
    Ok(Json(cart.into()))
}

#[utoipa::path(
    post,
    path = "/cart/{cart_id}/add/{product_id}",
    params(
        ("cart_id" = i32, Path, description = "Cart ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Updated cart contents", body = [Product]),
        (status = 404, description = "Cart or product not found, or an id is not an integer"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let (cart_id, product_id) = ids_or_not_found(path)?;
    let items = cart_service::add_product_to_cart(&state, cart_id, product_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    delete,
    path = "/cart/{cart_id}/remove/{product_id}",
    params(
        ("cart_id" = i32, Path, description = "Cart ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Updated cart contents", body = [Product]),
        (status = 404, description = "Cart not found, product not in cart, or an id is not an integer"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let (cart_id, product_id) = ids_or_not_found(path)?;
    let items = cart_service::remove_product_from_cart(&state, cart_id, product_id).await?;
    Ok(Json(items))
}
