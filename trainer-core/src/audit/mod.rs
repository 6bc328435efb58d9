//! Audit trail for simulated actions
//!
//! Provides a bounded, newest-first, in-memory log shared by the policy
//! and scoring engines.

mod entry;
mod log;

pub use entry::{AuditContext, AuditEntry, EntryId};
pub use log::{AUDIT_LOG_CAPACITY, AuditLog};

/// Event codes recorded by the engines and the front ends
pub mod codes {
    /// Suffix appended to an action when a role is refused
    pub const DENIED_SUFFIX: &str = "_DENIED";
    pub const QUIZ_COMPLETED: &str = "QUIZ_COMPLETED";
    pub const ASSESSMENT_COMPLETE: &str = "ASSESSMENT_COMPLETE";
    pub const ROLE_SWITCH: &str = "ROLE_SWITCH";
    pub const SESSION_START: &str = "SESSION_START";
    pub const SLIDE_VIEW: &str = "SLIDE_VIEW";

    /// Code recorded for a refused `action`
    pub fn denied(action: &str) -> String {
        format!("{action}{DENIED_SUFFIX}")
    }
}
