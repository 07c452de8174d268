use crate::server::data::tenant::TenantRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_with_leader;
mod get_active;
