use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::Composer;

/// In-memory store of composer sessions, keyed by the draft id held in each
/// visitor's cookie session. Drafts are ephemeral: a restart discards them.
#[derive(Clone, Default)]
pub struct DraftStore {
    inner: Arc<Mutex<HashMap<Uuid, Composer>>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the draft for `id`, creating an idle composer on
    /// first touch.
    pub fn with<F, R>(&self, id: Uuid, f: F) -> R
    where
        F: FnOnce(&mut Composer) -> R,
    {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let composer = map.entry(id).or_default();
        f(composer)
    }

    pub fn snapshot(&self, id: Uuid) -> Composer {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(id).or_default().clone()
    }

    pub fn remove(&self, id: Uuid) {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&id);
    }
}
