use crate::server::{
    data::options::{DataConfig, QueryOptions},
    error::data::DataError,
    service::request::RequestService,
};
use entity::{request, sea_orm_active_enums::RequestStatus};
use sea_orm::ActiveValue;
use test_utils::{
    builder::TestBuilder,
    factory::{self, request::RequestFactory},
};
