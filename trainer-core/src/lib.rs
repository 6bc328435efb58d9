//! trainer-core - Policy and assessment core for the PHI training deck
//!
//! This crate holds the rules behind the deck's simulations: a fail-closed
//! role-based permission engine, a partial-credit quiz scorer, and the
//! bounded audit log both of them write to. Rendering and input handling
//! belong to the front ends.

pub mod audit;
pub mod config;
pub mod error;
pub mod policy;
pub mod scoring;
pub mod session;

pub use audit::{AUDIT_LOG_CAPACITY, AuditEntry, AuditLog};
pub use config::TrainerConfig;
pub use error::{ConfigError, Result, ScoringError, TrainerError};
pub use policy::{Decision, PermissionTable, PolicyEngine};
pub use scoring::{
    AssessmentResult, AssessmentStatus, Band, QuizBank, ScoringEngine, SubmissionResult,
    SubmitOutcome,
};
pub use session::TrainingSession;
