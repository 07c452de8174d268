//! HTTP request handlers.
//!
//! Handlers resolve the caller through `AuthGuard`, convert DTOs into params,
//! call a service, and convert the result back into a DTO. No business rules
//! live here.

pub mod admin;
pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;
