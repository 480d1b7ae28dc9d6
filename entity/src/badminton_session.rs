use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{SessionLevel, SessionPaymentType, SessionStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "badminton_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_name = "startTime")]
    pub start_time: DateTimeUtc,
    #[sea_orm(column_name = "endTime")]
    pub end_time: Option<DateTimeUtc>,
    pub level: Option<SessionLevel>,
    #[sea_orm(column_name = "numberOfPeople")]
    pub number_of_people: i32,
    #[sea_orm(column_name = "videoUrl")]
    pub video_url: Option<String>,
    #[sea_orm(column_name = "coverImage")]
    pub cover_image: Option<String>,
    #[sea_orm(column_name = "createdById")]
    pub created_by_id: Option<i32>,
    #[sea_orm(column_name = "paymentType")]
    pub payment_type: SessionPaymentType,
    #[sea_orm(column_name = "fixedCost")]
    pub fixed_cost: Option<i32>,
    #[sea_orm(column_name = "totalBill")]
    pub total_bill: Option<i32>,
    #[sea_orm(column_name = "pricePerShuttle")]
    pub price_per_shuttle: Option<i32>,
    #[sea_orm(column_name = "totalCourtFee")]
    pub total_court_fee: Option<i32>,
    pub status: SessionStatus,
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
    #[sea_orm(has_many = "super::member::Entity")]
    Member,
    #[sea_orm(has_many = "super::request::Entity")]
    Request,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
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
