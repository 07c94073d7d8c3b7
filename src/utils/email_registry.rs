use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use super::email_cache::EmailCache;
use super::email_filter::EmailFilter;
use crate::db::{Store, StoreResult};

/// Fast pre-check for employee email uniqueness.
///
/// A miss skips the database lookup. A hit is only a hint: the store is asked before
/// an address is refused, and its unique constraint still guards the insert.
#[derive(Clone, Default)]
pub struct EmailRegistry {
    filter: Arc<EmailFilter>,
    cache: EmailCache,
}

impl EmailRegistry {
    /// Load every registered email from the store, in batches.
    pub async fn warmup(&self, store: &Store, batch_size: usize) -> Result<usize> {
        let emails = store.list_emails().await?;
        self.load(&emails, batch_size).await;

        info!(total = emails.len(), "Email registry warmup complete");
        Ok(emails.len())
    }

    pub async fn load(&self, emails: &[String], batch_size: usize) {
        for batch in emails.chunks(batch_size.max(1)) {
            self.filter.insert_batch(batch);
            self.cache.mark_batch(batch).await;
        }
    }

    pub async fn is_known_taken(&self, email: &str) -> bool {
        // a filter miss is definitive
        self.filter.might_exist(email) && self.cache.is_taken(email).await
    }

    /// Registry hits are confirmed with the store; stale entries are dropped.
    pub async fn is_taken(&self, store: &Store, email: &str) -> StoreResult<bool> {
        if !self.is_known_taken(email).await {
            return Ok(false);
        }
        if store.email_exists(email).await? {
            return Ok(true);
        }

        debug!(email, "Dropping stale registry entry");
        self.release(email).await;
        Ok(false)
    }

    pub async fn register(&self, email: &str) {
        self.filter.insert(email);
        self.cache.mark_taken(email).await;
    }

    pub async fn release(&self, email: &str) {
        self.filter.remove(email);
        self.cache.release(email).await;
    }
}
