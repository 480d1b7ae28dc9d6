use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_null(User::FirstName))
                    .col(string_null(User::LastName))
                    .col(string_null(User::DisplayName))
                    .col(string_null(User::Email).unique_key())
                    .col(string_null(User::PhoneNumber).unique_key())
                    .col(string(User::Password))
                    .col(timestamp_with_time_zone_null(User::DateOfBirth))
                    .col(string_null(User::Address))
                    .col(string_null(User::Avatar))
                    .col(string_null(User::Club))
                    .col(string_len_null(User::Gender, 16))
                    .col(string_len(User::State, 16).default("Inactive"))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(User::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    #[sea_orm(iden = "firstName")]
    FirstName,
    #[sea_orm(iden = "lastName")]
    LastName,
    #[sea_orm(iden = "displayName")]
    DisplayName,
    Email,
    #[sea_orm(iden = "phoneNumber")]
    PhoneNumber,
    Password,
    #[sea_orm(iden = "dateOfBirth")]
    DateOfBirth,
    Address,
    Avatar,
    Club,
    Gender,
    State,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
    #[sea_orm(iden = "deletedAt")]
    DeletedAt,
}
