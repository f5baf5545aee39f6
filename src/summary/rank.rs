//! Importance ranking and top-8 selection within one bucket.

use crate::models::{Announcement, Bucket, RankedSelection};
use crate::summary::{HIGH_IMPORTANCE, MAX_NAMED};
use tracing::warn;

// ── Observability hook ────────────────────────────────────────────────────────

/// Injected sink for the ranker's non-fatal diagnostics. Keeps the ranker
/// itself free of side effects and testable without capturing log output.
pub trait RankObserver: Send + Sync {
    /// More than `MAX_NAMED` records in `bucket` scored above
    /// `HIGH_IMPORTANCE`; `count` of them were competing for 8 slots.
    /// Observational only, the selection is unchanged.
    fn high_importance_overflow(&self, bucket: Bucket, count: usize);
}

/// Default observer: structured warning via `tracing`.
pub struct TracingObserver;

impl RankObserver for TracingObserver {
    fn high_importance_overflow(&self, bucket: Bucket, count: usize) {
        warn!(
            bucket = bucket.label(),
            count, "more than {} companies reporting over importance {}", MAX_NAMED, HIGH_IMPORTANCE
        );
    }
}

// ── Ranker ────────────────────────────────────────────────────────────────────

/// Order a bucket by importance (descending, stable on ties) and truncate
/// to at most `MAX_NAMED` symbols. `others` counts the records beyond the
/// cutoff and is absent when nothing was cut.
pub fn rank(bucket: &[Announcement], which: Bucket, observer: &dyn RankObserver) -> RankedSelection {
    let mut sorted: Vec<&Announcement> = bucket.iter().collect();
    sorted.sort_by(|a, b| b.importance.cmp(&a.importance));

    let high = sorted
        .iter()
        .filter(|a| a.importance > HIGH_IMPORTANCE)
        .count();
    if high > MAX_NAMED {
        observer.high_importance_overflow(which, high);
    }

    let total = sorted.len();
    if total <= MAX_NAMED {
        RankedSelection {
            symbols: sorted.iter().map(|a| a.symbol.clone()).collect(),
            others: None,
        }
    } else {
        RankedSelection {
            symbols: sorted[..MAX_NAMED]
                .iter()
                .map(|a| a.symbol.clone())
                .collect(),
            others: Some(total - MAX_NAMED),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test observer that counts overflow notifications.
    #[derive(Default)]
    struct CountingObserver {
        overflows: AtomicUsize,
    }

    impl RankObserver for CountingObserver {
        fn high_importance_overflow(&self, _bucket: Bucket, _count: usize) {
            self.overflows.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn ann(symbol: &str, importance: i64) -> Announcement {
        Announcement {
            symbol: symbol.to_string(),
            time: "09:00:00".parse().unwrap(),
            importance,
        }
    }

    fn symbols(selection: &RankedSelection) -> Vec<&str> {
        selection.symbols.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_small_bucket_names_everyone() {
        let obs = CountingObserver::default();
        let bucket = vec![ann("A", 1), ann("B", 5), ann("C", 3)];
        let sel = rank(&bucket, Bucket::Am, &obs);

        assert_eq!(symbols(&sel), ["B", "C", "A"]);
        assert_eq!(sel.others, None);
    }

    #[test]
    fn test_large_bucket_truncates_and_counts_others() {
        let obs = CountingObserver::default();
        let bucket: Vec<_> = (0..11).map(|i| ann(&format!("S{i}"), 11 - i)).collect();
        let sel = rank(&bucket, Bucket::Pm, &obs);

        assert_eq!(sel.symbols.len(), 8);
        assert_eq!(sel.others, Some(3));
        assert_eq!(sel.symbols[0], "S0");
        assert_eq!(sel.symbols[7], "S7");
    }

    #[test]
    fn test_exactly_eight_has_no_others() {
        let obs = CountingObserver::default();
        let bucket: Vec<_> = (0..8).map(|i| ann(&format!("S{i}"), i)).collect();
        let sel = rank(&bucket, Bucket::Am, &obs);

        assert_eq!(sel.symbols.len(), 8);
        assert_eq!(sel.others, None);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let obs = CountingObserver::default();
        let bucket = vec![ann("FIRST", 3), ann("TOP", 7), ann("SECOND", 3)];
        let sel = rank(&bucket, Bucket::Am, &obs);

        assert_eq!(symbols(&sel), ["TOP", "FIRST", "SECOND"]);
    }

    #[test]
    fn test_empty_bucket() {
        let obs = CountingObserver::default();
        let sel = rank(&[], Bucket::Pm, &obs);
        assert!(sel.symbols.is_empty());
        assert_eq!(sel.others, None);
    }

    #[test]
    fn test_overflow_diagnostic_fires_without_changing_selection() {
        let obs = CountingObserver::default();
        let bucket: Vec<_> = (0..9).map(|i| ann(&format!("S{i}"), 5)).collect();
        let sel = rank(&bucket, Bucket::Am, &obs);

        assert_eq!(obs.overflows.load(Ordering::SeqCst), 1);
        assert_eq!(sel.symbols.len(), 8);
        assert_eq!(sel.others, Some(1));
    }

    #[test]
    fn test_no_overflow_diagnostic_at_exactly_eight_high() {
        let obs = CountingObserver::default();
        let bucket: Vec<_> = (0..8).map(|i| ann(&format!("S{i}"), 6)).collect();
        rank(&bucket, Bucket::Am, &obs);

        assert_eq!(obs.overflows.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_importance_at_threshold_is_not_high() {
        // importance == 4 does not count toward the diagnostic
        let obs = CountingObserver::default();
        let bucket: Vec<_> = (0..12).map(|i| ann(&format!("S{i}"), 4)).collect();
        rank(&bucket, Bucket::Pm, &obs);

        assert_eq!(obs.overflows.load(Ordering::SeqCst), 0);
    }
}
