//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Validation, tag canonicalization, and authorization rules
//! - **Orchestration**: Coordinating repository calls with the upstream data source
//! - **Error Translation**: Turning storage constraint violations into conflicts

pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;
