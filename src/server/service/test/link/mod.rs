use crate::server::service::link::{LinkService, ParentLocks};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod booking_links;
