use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260301_000003_create_badminton_session_table::BadmintonSession,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer(Member::UserId))
                    .col(integer(Member::BadmintonSessionId))
                    .col(integer_null(Member::WinningAmount))
                    .col(integer_null(Member::Surcharge))
                    .col(integer_null(Member::TotalFee))
                    .col(integer_null(Member::ShuttlesUsed))
                    .col(string_len(Member::PaymentStatus, 16).default("Unpaid"))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Member::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Member::DeletedAt))
                    .col(integer_null(Member::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_user_id")
                            .from(Member::Table, Member::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_badminton_session_id")
                            .from(Member::Table, Member::BadmintonSessionId)
                            .to(BadmintonSession::Table, BadmintonSession::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    #[sea_orm(iden = "members")]
    Table,
    Id,
    #[sea_orm(iden = "userId")]
    UserId,
    #[sea_orm(iden = "badmintonSessionId")]
    BadmintonSessionId,
    #[sea_orm(iden = "winningAmount")]
    WinningAmount,
    Surcharge,
    #[sea_orm(iden = "totalFee")]
    TotalFee,
    #[sea_orm(iden = "shuttlesUsed")]
    ShuttlesUsed,
    #[sea_orm(iden = "paymentStatus")]
    PaymentStatus,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
    #[sea_orm(iden = "deletedAt")]
    DeletedAt,
    #[sea_orm(iden = "deletedBy")]
    DeletedBy,
}
