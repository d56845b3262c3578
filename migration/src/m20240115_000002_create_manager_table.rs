use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Manager::Table)
                    .if_not_exists()
                    .col(pk_auto(Manager::Id))
                    .col(string_uniq(Manager::Email))
                    .col(string(Manager::Fname))
                    .col(string(Manager::Lname))
                    .col(string(Manager::Password))
                    .col(double(Manager::Balance))
                    .col(string(Manager::Address))
                    .col(json(Manager::Cars))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Manager::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Manager {
    Table,
    Id,
    Email,
    Fname,
    Lname,
    Password,
    Balance,
    Address,
    Cars,
}
