use crate::server::data::membership::MembershipRepository;
use entity::membership::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod auth_context;
