use sea_orm::DatabaseConnection;

use crate::server::{
    data::war::WarRepository,
    error::AppError,
    model::war::{War, WarDetail, WarPage},
};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct WarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the tenant's current war with roster and attacks, if one is in progress
    pub async fn get_active_war(&self, tenant_id: i32) -> Result<Option<WarDetail>, AppError> {
        let repo = WarRepository::new(self.db);

        match repo.find_active(tenant_id).await? {
            Some(war) => Ok(Some(repo.get_detail(war).await?)),
            None => Ok(None),
        }
    }

    /// Gets a specific war of the tenant with roster and attacks
    pub async fn get_war_by_id(
        &self,
        tenant_id: i32,
        war_id: i32,
    ) -> Result<Option<WarDetail>, AppError> {
        let repo = WarRepository::new(self.db);

        match repo.find_for_tenant(tenant_id, war_id).await? {
            Some(war) => Ok(Some(repo.get_detail(war).await?)),
            None => Ok(None),
        }
    }

    /// Lists the tenant's wars newest first using keyset pagination.
    ///
    /// # Arguments
    /// - `tenant_id` - Owning tenant
    /// - `limit` - Requested page size; clamped to `1..=100`, default 20
    /// - `cursor` - Id of the last war on the previous page
    ///
    /// # Returns
    /// - `Ok(WarPage)` - Page of wars and the cursor for the next page, if any
    /// - `Err(AppError::BadRequest)` - Cursor does not name a war of this tenant
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_wars(
        &self,
        tenant_id: i32,
        limit: Option<u64>,
        cursor: Option<i32>,
    ) -> Result<WarPage, AppError> {
        let repo = WarRepository::new(self.db);
        let limit = limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let after = match cursor {
            Some(id) => {
                let anchor = repo
                    .find_for_tenant(tenant_id, id)
                    .await?
                    .ok_or_else(|| AppError::BadRequest("Invalid cursor".to_string()))?;
                Some((anchor.start_time, anchor.id))
            }
            None => None,
        };

        let (wars, has_more) = repo.get_page(tenant_id, limit, after).await?;
        let next_cursor = if has_more {
            wars.last().map(|w| w.id)
        } else {
            None
        };

        Ok(WarPage {
            wars: wars.into_iter().map(War::from_entity).collect(),
            next_cursor,
        })
    }
}
