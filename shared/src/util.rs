use std::sync::atomic::{AtomicU16, Ordering};

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: per-process sequence (wraps at 4096)
///
/// Ids are time-ordered, so `ORDER BY id` matches insertion order as long
/// as a single process generates them.
pub fn snowflake_id() -> i64 {
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    static SEQUENCE: AtomicU16 = AtomicU16::new(0);

    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let seq = (SEQUENCE.fetch_add(1, Ordering::Relaxed) & 0x0FFF) as i64; // 12 bits
    (ts << 12) | seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_a_sequence_cycle() {
        // 4096 ids is one full sequence cycle; even if they all land in
        // the same millisecond they must not collide.
        let ids: HashSet<i64> = (0..4096).map(|_| snowflake_id()).collect();
        assert_eq!(ids.len(), 4096);
    }

    #[test]
    fn ids_are_time_ordered_across_milliseconds() {
        let first = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(3));
        let second = snowflake_id();
        assert!(second > first);
    }

    #[test]
    fn ids_fit_in_js_safe_integer_range() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id <= (1_i64 << 53) - 1);
    }
}
