use crate::{model::tenant::TenantDto, server::coc::payload::ClanPayload};

/// Registration input after the clan has been fetched from upstream.
#[derive(Debug, Clone)]
pub struct CreateTenantParams {
    /// Canonical clan tag.
    pub clan_tag: String,
    pub clan_name: String,
    pub clan_level: i32,
    pub member_count: i32,
    pub description: Option<String>,
}

impl CreateTenantParams {
    /// Takes clan facts from upstream, preferring a caller-supplied description.
    pub fn from_clan(clan_tag: String, clan: ClanPayload, description: Option<String>) -> Self {
        Self {
            clan_tag,
            clan_name: clan.name,
            clan_level: clan.clan_level,
            member_count: clan.members,
            description: description.or(clan.description),
        }
    }
}

pub fn tenant_into_dto(entity: entity::tenant::Model) -> TenantDto {
    TenantDto {
        id: entity.id,
        clan_tag: entity.clan_tag,
        clan_name: entity.clan_name,
        clan_level: entity.clan_level,
        member_count: entity.member_count,
        description: entity.description,
        is_active: entity.is_active,
        last_synced_at: entity.last_synced_at,
    }
}
