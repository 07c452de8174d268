pub use super::app_user::Entity as AppUser;
pub use super::attack::Entity as Attack;
pub use super::ingestion_job::Entity as IngestionJob;
pub use super::membership::Entity as Membership;
pub use super::player::Entity as Player;
pub use super::tenant::Entity as Tenant;
pub use super::war::Entity as War;
pub use super::war_call::Entity as WarCall;
pub use super::war_participant::Entity as WarParticipant;
