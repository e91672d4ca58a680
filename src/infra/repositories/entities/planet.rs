//! Planet database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::CatalogItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CatalogItem {
    fn from(model: Model) -> Self {
        CatalogItem {
            id: model.id,
            name: model.name,
        }
    }
}
