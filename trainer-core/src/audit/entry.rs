//! Audit entry types

use chrono::{DateTime, Local, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 9;

/// UUIDv7 wrapper so entry ids sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new time-ordered entry ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simulated request metadata attached to every entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditContext {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl AuditContext {
    /// Fresh context with a newly generated session token
    pub fn generate(ip_address: Option<String>) -> Self {
        Self {
            session_id: session_token(),
            ip_address,
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    /// Who performed the action: a role name, `user`, `presenter`, ...
    pub actor: String,
    /// Event code, e.g. `viewRecord`, `prescribe_DENIED`, `QUIZ_COMPLETED`
    pub action: String,
    pub description: String,
    pub context: AuditContext,
}

impl AuditEntry {
    /// Serialize the entry as a single JSON line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let time = self.timestamp.with_timezone(&Local).format("%H:%M:%S");
        write!(
            f,
            "[{}] {} | {} | {}",
            time, self.actor, self.action, self.description
        )
    }
}

/// `sess_` followed by nine random base-36 characters
fn session_token() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect();
    format!("sess_{suffix}")
}
