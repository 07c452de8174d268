use super::snapshot;
use crate::server::data::{
    attack::AttackRepository, war::WarRepository, war_participant::WarParticipantRepository,
};
use chrono::Utc;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, fixture};

mod insert_if_absent;
