use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::products::{CreateProductRequest, ProductLookup},
    error::AppResult,
    models::Product,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_products))
        .route("/{slug}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/products/{slug}",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Product, or an empty object when no product has this slug", body = Product),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ProductLookup>> {
    let product = product_service::get_product_by_slug(&state, &slug).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = Vec<CreateProductRequest>,
    responses(
        (status = 200, description = "Created products, in request order", body = [Product]),
        (status = 500, description = "Batch rejected by the database, nothing created"),
    ),
    tag = "Products"
)]
pub async fn create_products(
    State(state): State<AppState>,
    Json(payload): Json<Vec<CreateProductRequest>>,
) -> AppResult<Json<Vec<Product>>> {
    let created = product_service::create_products(&state, payload).await?;
    Ok(Json(created))
}
