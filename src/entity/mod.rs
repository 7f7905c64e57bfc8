pub mod cart;
pub mod carts_products;
pub mod product;

pub use cart::Entity as Carts;
pub use carts_products::Entity as CartsProducts;
pub use product::Entity as Products;
