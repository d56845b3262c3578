use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "manager")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub fname: String,
    pub lname: String,
    /// Bcrypt hash, never the plaintext.
    pub password: String,
    pub balance: f64,
    pub address: String,
    /// JSON array of car ids owned by this manager. Ownership is tracked
    /// only through this list; cars carry no owner reference.
    pub cars: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
