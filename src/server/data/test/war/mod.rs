use super::snapshot;
use crate::server::data::war::WarRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod find_active;
mod get_page;
mod upsert_snapshot;
