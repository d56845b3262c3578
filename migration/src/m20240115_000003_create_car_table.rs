use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string_uniq(Car::Registration))
                    .col(string_null(Car::Brand))
                    .col(string_null(Car::Color))
                    .col(double(Car::Price))
                    .col(text_null(Car::Description))
                    .col(text_null(Car::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Registration,
    Brand,
    Color,
    Price,
    Description,
    Image,
}
