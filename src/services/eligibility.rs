use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory set of chat ids opted in to proactive messages.
///
/// Membership only grows: a recipient opts in by issuing /start and there is
/// no opt-out path. State lives for the process lifetime only; a restart
/// starts from an empty set.
///
/// The mutex is never held across an await point, so scheduler jobs and
/// message handlers can interleave reads and inserts safely.
pub struct EligibilityRegistry {
    inner: Mutex<HashSet<i64>>,
}

impl EligibilityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashSet::new()),
        }
    }

    /// Marks a chat id as eligible. Idempotent; returns `true` only when the
    /// id was not already present.
    pub fn mark_eligible(&self, chat_id: i64) -> bool {
        match self.inner.lock() {
            Ok(mut set) => set.insert(chat_id),
            Err(poisoned) => poisoned.into_inner().insert(chat_id),
        }
    }

    /// Whether a chat id has opted in.
    pub fn is_eligible(&self, chat_id: i64) -> bool {
        match self.inner.lock() {
            Ok(set) => set.contains(&chat_id),
            Err(poisoned) => poisoned.into_inner().contains(&chat_id),
        }
    }
}

impl Default for EligibilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
