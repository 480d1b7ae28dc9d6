use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BadmintonSession::Table)
                    .if_not_exists()
                    .col(pk_auto(BadmintonSession::Id))
                    .col(string(BadmintonSession::Name))
                    .col(text_null(BadmintonSession::Description))
                    .col(timestamp_with_time_zone(BadmintonSession::StartTime))
                    .col(timestamp_with_time_zone_null(BadmintonSession::EndTime))
                    .col(string_len_null(BadmintonSession::Level, 16))
                    .col(integer(BadmintonSession::NumberOfPeople))
                    .col(string_null(BadmintonSession::VideoUrl))
                    .col(string_null(BadmintonSession::CoverImage))
                    .col(integer_null(BadmintonSession::CreatedById))
                    .col(string_len(BadmintonSession::PaymentType, 32))
                    .col(integer_null(BadmintonSession::FixedCost))
                    .col(integer_null(BadmintonSession::TotalBill))
                    .col(integer_null(BadmintonSession::PricePerShuttle))
                    .col(integer_null(BadmintonSession::TotalCourtFee))
                    .col(string_len(BadmintonSession::Status, 16).default("NEW"))
                    .col(
                        timestamp_with_time_zone(BadmintonSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(BadmintonSession::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(BadmintonSession::DeletedAt))
                    .col(integer_null(BadmintonSession::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_badminton_session_created_by_id")
                            .from(BadmintonSession::Table, BadmintonSession::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BadmintonSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BadmintonSession {
    #[sea_orm(iden = "badminton_sessions")]
    Table,
    Id,
    Name,
    Description,
    #[sea_orm(iden = "startTime")]
    StartTime,
    #[sea_orm(iden = "endTime")]
    EndTime,
    Level,
    #[sea_orm(iden = "numberOfPeople")]
    NumberOfPeople,
    #[sea_orm(iden = "videoUrl")]
    VideoUrl,
    #[sea_orm(iden = "coverImage")]
    CoverImage,
    #[sea_orm(iden = "createdById")]
    CreatedById,
    #[sea_orm(iden = "paymentType")]
    PaymentType,
    #[sea_orm(iden = "fixedCost")]
    FixedCost,
    #[sea_orm(iden = "totalBill")]
    TotalBill,
    #[sea_orm(iden = "pricePerShuttle")]
    PricePerShuttle,
    #[sea_orm(iden = "totalCourtFee")]
    TotalCourtFee,
    Status,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
    #[sea_orm(iden = "deletedAt")]
    DeletedAt,
    #[sea_orm(iden = "deletedBy")]
    DeletedBy,
}
