use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Schema};

/// Площадка (зал, точка продаж), по которой фильтруются заказы
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_venue")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// CREATE TABLE IF NOT EXISTS from the entity definition
pub async fn ensure_table(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(Entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    Ok(())
}
