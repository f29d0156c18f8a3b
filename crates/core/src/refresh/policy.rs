//! Snapshot staleness policy.

use crate::store::Snapshot;

/// Pure staleness predicate.
///
/// `true` when no snapshot exists or its age strictly exceeds
/// `max_age_ms`. Stateless and side-effect free; callers may evaluate it
/// at any time.
pub fn needs_update(snapshot: Option<&Snapshot>, now_ms: i64, max_age_ms: i64) -> bool {
    match snapshot {
        None => true,
        Some(snapshot) => now_ms - snapshot.timestamp_ms > max_age_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SNAPSHOT_VERSION;

    const DAY_MS: i64 = 86_400_000;

    fn snapshot_at(timestamp_ms: i64) -> Snapshot {
        Snapshot {
            timestamp_ms,
            products: vec![],
            version: SNAPSHOT_VERSION,
        }
    }

    #[test]
    fn test_absent_snapshot_needs_update() {
        assert!(needs_update(None, 0, DAY_MS));
    }

    #[test]
    fn test_fresh_snapshot_does_not_need_update() {
        let snapshot = snapshot_at(1_000);
        assert!(!needs_update(Some(&snapshot), 2_000, DAY_MS));
    }

    #[test]
    fn test_staleness_boundary() {
        let snapshot = snapshot_at(0);
        // Exactly at the interval: still fresh.
        assert!(!needs_update(Some(&snapshot), DAY_MS, DAY_MS));
        assert!(!needs_update(Some(&snapshot), DAY_MS - 1, DAY_MS));
        // One past the interval: stale.
        assert!(needs_update(Some(&snapshot), DAY_MS + 1, DAY_MS));
    }

    #[test]
    fn test_empty_products_is_not_stale_by_itself() {
        // An empty-but-recent snapshot is the runner's concern (full
        // crawl), not the policy's.
        let snapshot = snapshot_at(500);
        assert!(!needs_update(Some(&snapshot), 1_000, DAY_MS));
    }
}
