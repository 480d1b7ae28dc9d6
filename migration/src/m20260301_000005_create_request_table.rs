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
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(integer(Request::CreatedById))
                    .col(integer(Request::BadmintonSessionId))
                    .col(string_len(Request::Status, 16).default("Pending"))
                    .col(
                        timestamp_with_time_zone(Request::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Request::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Request::DeletedAt))
                    .col(integer_null(Request::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_created_by_id")
                            .from(Request::Table, Request::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_badminton_session_id")
                            .from(Request::Table, Request::BadmintonSessionId)
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
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    #[sea_orm(iden = "requests")]
    Table,
    Id,
    #[sea_orm(iden = "createdById")]
    CreatedById,
    #[sea_orm(iden = "badmintonSessionId")]
    BadmintonSessionId,
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
