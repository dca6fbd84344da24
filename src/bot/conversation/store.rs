use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-progress alert submission for one user.
///
/// Invariant: `answers.len() == step - 1` whenever `step > 0`; each completed
/// prompt stores exactly one answer before the step advances.
#[derive(Debug, Clone)]
pub struct ConversationState {
    pub step: u8,
    pub answers: Vec<String>,
    pub display_name: String,
}

impl ConversationState {
    pub fn new(display_name: String) -> Self {
        Self {
            step: 0,
            answers: Vec::new(),
            display_name,
        }
    }
}

/// Map of active conversations keyed by Telegram user id.
///
/// At most one conversation exists per user; a second start is rejected
/// without touching the existing state. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct ConversationStore {
    inner: Arc<Mutex<HashMap<i64, ConversationState>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh step-0 state for the user. Returns false (leaving the
    /// existing conversation untouched) if one is already active.
    pub fn begin(&self, user_id: i64, display_name: &str) -> bool {
        let mut map = self.lock();
        if map.contains_key(&user_id) {
            return false;
        }
        map.insert(user_id, ConversationState::new(display_name.to_string()));
        true
    }

    /// Runs `f` against the user's state under the lock. Returns None when
    /// the user has no active conversation.
    pub fn with_state<R>(
        &self,
        user_id: i64,
        f: impl FnOnce(&mut ConversationState) -> R,
    ) -> Option<R> {
        self.lock().get_mut(&user_id).map(f)
    }

    /// Destroys the user's conversation. Returns whether one existed.
    pub fn remove(&self, user_id: i64) -> bool {
        self.lock().remove(&user_id).is_some()
    }

    pub fn is_active(&self, user_id: i64) -> bool {
        self.lock().contains_key(&user_id)
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, ConversationState>> {
        // A poisoned lock only means another handler panicked mid-update;
        // the map itself is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
