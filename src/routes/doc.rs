use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{cart::CartCreated, products::CreateProductRequest},
    models::{Cart, Product},
    response::ApiResponse,
    routes::{cart, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_products,
        cart::cart_list,
        cart::create_cart,
        cart::add_to_cart,
        cart::remove_from_cart
    ),
    components(
        schemas(
            Product,
            Cart,
            CreateProductRequest,
            CartCreated,
            health::HealthData,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
