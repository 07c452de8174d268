use chrono::{DateTime, Utc};
use entity::war_call::CallStatus;

use crate::model::war_call::{CreateWarCallDto, WarCallDto};

/// Input for reserving a base.
#[derive(Debug, Clone)]
pub struct CreateWarCallParams {
    pub map_position: i32,
    /// Raw tag; canonicalized by the service.
    pub player_tag: String,
    pub player_name: String,
}

impl CreateWarCallParams {
    pub fn from_dto(dto: CreateWarCallDto) -> Self {
        Self {
            map_position: dto.map_position,
            player_tag: dto.player_tag,
            player_name: dto.player_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarCall {
    pub id: i32,
    pub tenant_id: i32,
    pub war_id: i32,
    pub map_position: i32,
    pub player_tag: String,
    pub player_name: String,
    pub status: CallStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WarCall {
    pub fn from_entity(entity: entity::war_call::Model) -> Self {
        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            war_id: entity.war_id,
            map_position: entity.map_position,
            player_tag: entity.player_tag,
            player_name: entity.player_name,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WarCallDto {
        WarCallDto {
            id: self.id,
            war_id: self.war_id,
            map_position: self.map_position,
            player_tag: self.player_tag,
            player_name: self.player_name,
            status: match self.status {
                CallStatus::Active => "active",
                CallStatus::Cancelled => "cancelled",
            }
            .to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
