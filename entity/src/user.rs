use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{UserGender, UserState};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "firstName")]
    pub first_name: Option<String>,
    #[sea_orm(column_name = "lastName")]
    pub last_name: Option<String>,
    #[sea_orm(column_name = "displayName")]
    pub display_name: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    #[sea_orm(column_name = "phoneNumber", unique)]
    pub phone_number: Option<String>,
    pub password: String,
    #[sea_orm(column_name = "dateOfBirth")]
    pub date_of_birth: Option<DateTimeUtc>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub club: Option<String>,
    pub gender: Option<UserGender>,
    pub state: UserState,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
    #[sea_orm(column_name = "deletedAt")]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::badminton_session::Entity")]
    BadmintonSession,
    #[sea_orm(has_many = "super::member::Entity")]
    Member,
    #[sea_orm(has_many = "super::request::Entity")]
    Request,
}

impl Related<super::badminton_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BadmintonSession.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
