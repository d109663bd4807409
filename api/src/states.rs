use crate::store::Store;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every handler; all clones point at the same [`Store`].
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
