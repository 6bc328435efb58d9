//! Role-based access control for the simulated hospital system
//!
//! Provides the static permission table and a fail-closed decision engine.

mod engine;
mod table;

pub use engine::{Decision, PolicyEngine};
pub use table::{Action, PermissionTable, Role, RoleGrant, default_grants};
