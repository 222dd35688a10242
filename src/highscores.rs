//! Best score persistence
//!
//! A single integer stored as its decimal string. Absent or unreadable
//! values count as 0, and the stored value only ever goes up.

use crate::persistence::KeyValueStore;

/// Storage key for the best score
pub const HIGHSCORE_KEY: &str = "loveRunnerHighscore";

/// Read the persisted best score (0 when absent or unreadable)
pub fn load_highscore(store: &impl KeyValueStore) -> u32 {
    match store.get(HIGHSCORE_KEY) {
        Ok(Some(raw)) => match raw.trim().parse::<u32>() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("Ignoring unreadable highscore {:?}", raw);
                0
            }
        },
        Ok(None) => 0,
        Err(e) => {
            log::warn!("Highscore read failed: {}", e);
            0
        }
    }
}

/// Persist `score` if it beats the stored best.
/// Returns true when the stored value changed.
pub fn record_highscore(store: &mut impl KeyValueStore, score: u32) -> bool {
    if score <= load_highscore(&*store) {
        return false;
    }
    match store.set(HIGHSCORE_KEY, &score.to_string()) {
        Ok(()) => {
            log::info!("Highscore saved ({})", score);
            true
        }
        Err(e) => {
            log::warn!("Highscore write failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    /// Store whose every read and write fails, like LocalStorage in a
    /// locked-down browser profile
    pub(crate) struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, GameError> {
            Err(GameError::Storage("read denied".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), GameError> {
            Err(GameError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_failed_read_counts_as_zero() {
        assert_eq!(load_highscore(&BrokenStore), 0);
    }

    #[test]
    fn test_failed_write_is_dropped() {
        let mut store = BrokenStore;
        assert!(!record_highscore(&mut store, 5));
    }

    #[test]
    fn test_absent_highscore_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(load_highscore(&store), 0);
    }

    #[test]
    fn test_garbage_highscore_is_zero() {
        let store = MemoryStore::with_entry(HIGHSCORE_KEY, "lots");
        assert_eq!(load_highscore(&store), 0);
    }

    #[test]
    fn test_record_stores_decimal_string() {
        let mut store = MemoryStore::new();
        assert!(record_highscore(&mut store, 12));
        assert_eq!(store.get(HIGHSCORE_KEY).unwrap().as_deref(), Some("12"));
        assert_eq!(load_highscore(&store), 12);
    }

    #[test]
    fn test_record_ignores_lower_score() {
        let mut store = MemoryStore::with_entry(HIGHSCORE_KEY, "7");
        assert!(!record_highscore(&mut store, 3));
        assert!(!record_highscore(&mut store, 7));
        assert_eq!(load_highscore(&store), 7);
    }

    proptest! {
        #[test]
        fn prop_persisted_highscore_never_decreases(scores in prop::collection::vec(0u32..1000, 1..50)) {
            let mut store = MemoryStore::new();
            let mut previous = 0;
            for score in scores {
                record_highscore(&mut store, score);
                let now = load_highscore(&store);
                prop_assert!(now >= previous);
                prop_assert!(now >= score);
                previous = now;
            }
        }
    }
}
