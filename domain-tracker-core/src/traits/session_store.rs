//! Session storage abstraction trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Session;

/// Where the login session is kept between runs.
///
/// Platform implementations:
/// - TUI: `FileSessionStore` (JSON file in the data directory)
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stored session, or `None` when logged out.
    async fn load(&self) -> CoreResult<Option<Session>>;

    /// Replace the stored session.
    async fn save(&self, session: &Session) -> CoreResult<()>;

    /// Forget the session. Clearing an empty store is not an error.
    async fn clear(&self) -> CoreResult<()>;
}
