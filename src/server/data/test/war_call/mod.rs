use crate::server::data::war_call::WarCallRepository;
use chrono::Utc;
use entity::war_call::CallStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod create;
