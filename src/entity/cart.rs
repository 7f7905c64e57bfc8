use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::carts_products::Entity")]
    CartsProducts,
}

impl Related<super::carts_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartsProducts.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::carts_products::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::carts_products::Relation::Cart.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
