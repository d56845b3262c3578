use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys on user_id/car_id: references are validated at
        // creation time only, and a booking may outlive its user or car.
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_uniq(Booking::BookingReference))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::CarId))
                    .col(date(Booking::StartDate))
                    .col(date(Booking::EndDate))
                    .col(string_null(Booking::Status))
                    .col(text_null(Booking::Content))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    BookingReference,
    UserId,
    CarId,
    StartDate,
    EndDate,
    Status,
    Content,
}
