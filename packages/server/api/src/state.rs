use database::Database;
use std::sync::Arc;

/// Immutable per-process state shared by all request handlers. Nothing here
/// is mutated after startup, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}
