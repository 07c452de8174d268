use sea_orm::DatabaseConnection;

use crate::server::{
    coc::ClanDataSource,
    data::tenant::TenantRepository,
    error::AppError,
    model::tenant::CreateTenantParams,
    util::tag::normalize_tag,
};

pub struct TenantService<'a, S: ClanDataSource + ?Sized> {
    db: &'a DatabaseConnection,
    source: &'a S,
}

impl<'a, S: ClanDataSource + ?Sized> TenantService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, source: &'a S) -> Self {
        Self { db, source }
    }

    /// Registers a clan as a tenant led by `user_id`.
    ///
    /// The clan is fetched from upstream before anything is written. Registration of an
    /// already-registered clan is detected by the unique clan tag, not a prior lookup.
    ///
    /// # Arguments
    /// - `user_id` - Registering user, who becomes LEADER
    /// - `clan_tag` - Clan tag in any accepted spelling
    /// - `description` - Optional description overriding the upstream one
    ///
    /// # Returns
    /// - `Ok(entity::tenant::Model)` - Newly registered tenant
    /// - `Err(AppError::BadRequest)` - Malformed clan tag
    /// - `Err(AppError::FetchErr)` - Upstream lookup failed
    /// - `Err(AppError::Conflict)` - Clan already registered
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn register(
        &self,
        user_id: i32,
        clan_tag: &str,
        description: Option<String>,
    ) -> Result<entity::tenant::Model, AppError> {
        let clan_tag = normalize_tag(clan_tag)?;
        let clan = self.source.get_clan(&clan_tag).await?;

        let params = CreateTenantParams::from_clan(clan_tag, clan, description);
        let (tenant, _) = TenantRepository::new(self.db)
            .create_with_leader(params, user_id)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "This clan is already registered"))?;

        tracing::info!("Registered tenant {} for clan {}", tenant.id, tenant.clan_tag);

        Ok(tenant)
    }
}
