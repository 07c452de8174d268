//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! directly into the database and return the stored entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let tenant = factory::create_tenant(&db).await?;
//! let war = factory::create_war(&db, tenant.id).await?;
//!
//! // Tenant, user, and membership in one call
//! let (tenant, user, membership) =
//!     factory::helpers::create_member(&db, entity::membership::Role::Member).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let tenant = factory::tenant::TenantFactory::new(&db)
//!     .clan_tag("#ABC")
//!     .is_active(false)
//!     .build()
//!     .await?;
//! ```

pub mod app_user;
pub mod helpers;
pub mod ingestion_job;
pub mod membership;
pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;

pub use app_user::create_user;
pub use ingestion_job::create_job;
pub use membership::create_membership;
pub use player::create_player;
pub use tenant::create_tenant;
pub use war::create_war;
pub use war_call::create_call;
