//! Shared application context, constructed once at startup.

use mp_auth::SessionKeys;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Everything a request handler needs, injected through axum state.
/// There are no ambient globals: the pool, the session keys, and the
/// assets root all travel here.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionKeys>,
    pub assets_dir: PathBuf,
}
