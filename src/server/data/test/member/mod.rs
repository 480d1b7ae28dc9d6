use crate::{
    model::query::QuerySpecification,
    server::{
        data::{
            access::EntityDataAccess,
            hooks::EntityHooks,
            options::{DataConfig, QueryOptions},
        },
        error::data::DataError,
        service::member::MemberService,
    },
};
use entity::{member, sea_orm_active_enums::MemberPaymentStatus};
use sea_orm::{ColumnTrait, DeleteMany, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{self, member::MemberFactory},
};

mod delete;
mod hooks;
