use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RequestStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "createdById")]
    pub created_by_id: i32,
    #[sea_orm(column_name = "badmintonSessionId")]
    pub badminton_session_id: i32,
    pub status: RequestStatus,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
    #[sea_orm(column_name = "deletedAt")]
    pub deleted_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "deletedBy")]
    pub deleted_by: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id"
    )]
    CreatedBy,
    #[sea_orm(
        belongs_to = "super::badminton_session::Entity",
        from = "Column::BadmintonSessionId",
        to = "super::badminton_session::Column::Id"
    )]
    BadmintonSession,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::badminton_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BadmintonSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
