//! Per-day franchise membership counts.

use std::collections::BTreeMap;

use dugout_io::PlayerRecord;

/// Counts how many of the day's players spent time with each franchise.
///
/// A player who played for several franchises contributes one to each.
/// The map is ordered by franchise code, so iteration is deterministic.
pub fn franchise_counts(records: &[PlayerRecord]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for record in records {
        for franchise in &record.franchises {
            *counts.entry(franchise.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_franchises(name: &str, franchises: &[&str]) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            franchises: franchises.iter().map(|f| f.to_string()).collect(),
            ..PlayerRecord::default()
        }
    }

    #[test]
    fn counts_each_franchise_once_per_player() {
        let day = vec![
            with_franchises("a", &["NYY", "BOS"]),
            with_franchises("b", &["BOS"]),
            with_franchises("c", &["NYY"]),
        ];
        let counts = franchise_counts(&day);
        assert_eq!(counts.get("NYY"), Some(&2));
        assert_eq!(counts.get("BOS"), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn player_with_no_franchises_contributes_nothing() {
        let day = vec![with_franchises("a", &[])];
        assert!(franchise_counts(&day).is_empty());
    }

    #[test]
    fn iteration_is_sorted_by_code() {
        let day = vec![with_franchises("a", &["SEA", "ATL", "CHC"])];
        let counts = franchise_counts(&day);
        let codes: Vec<&String> = counts.keys().collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
