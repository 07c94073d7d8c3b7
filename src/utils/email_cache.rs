use moka::future::Cache;
use std::time::Duration;

/// Emails known to be taken. Entries expire so a stale hit cannot block
/// a re-hire forever if an eviction was missed.
#[derive(Clone)]
pub struct EmailCache {
    taken: Cache<String, bool>,
}

impl Default for EmailCache {
    fn default() -> Self {
        Self {
            taken: Cache::builder()
                .max_capacity(500_000) // tune based on memory
                .time_to_live(Duration::from_secs(86400)) // 24h TTL
                .build(),
        }
    }
}

impl EmailCache {
    pub async fn mark_taken(&self, email: &str) {
        self.taken.insert(email.trim().to_lowercase(), true).await;
    }

    pub async fn is_taken(&self, email: &str) -> bool {
        self.taken
            .get(&email.trim().to_lowercase())
            .await
            .unwrap_or(false)
    }

    pub async fn release(&self, email: &str) {
        self.taken.invalidate(&email.trim().to_lowercase()).await;
    }

    /// Batch mark emails as taken
    pub async fn mark_batch(&self, emails: &[String]) {
        let futures: Vec<_> = emails
            .iter()
            .map(|e| self.taken.insert(e.trim().to_lowercase(), true))
            .collect();

        futures::future::join_all(futures).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn mark_check_and_release() {
        let cache = EmailCache::default();
        assert!(!cache.is_taken("a@example.com").await);

        cache.mark_taken("A@example.com").await;
        assert!(cache.is_taken("a@example.com").await);

        cache.release("a@EXAMPLE.com").await;
        assert!(!cache.is_taken("a@example.com").await);
    }

    #[actix_web::test]
    async fn batch_marks_every_entry() {
        let cache = EmailCache::default();
        cache
            .mark_batch(&["x@example.com".to_string(), "y@example.com".to_string()])
            .await;
        assert!(cache.is_taken("x@example.com").await);
        assert!(cache.is_taken("y@example.com").await);
    }
}
