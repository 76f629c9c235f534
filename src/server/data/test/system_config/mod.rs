use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::system_config::SystemConfigRepository;

mod get;
mod upsert;
