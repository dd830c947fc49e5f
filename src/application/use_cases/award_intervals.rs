use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::domain::awards::{IntervalAnalysis, ProducerInterval, WinningCredit};

static AND_SEPARATOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+and\s+").unwrap());

/// Splits a raw producer credit into individual producer names.
///
/// Credits list several people in free text, e.g.
/// `"Allan Carr, Jerry Weintraub and Bo Derek"`. The word "and" only
/// separates names when it stands alone between whitespace, so names like
/// "Sandy Howard" survive intact.
pub fn split_producer_credits(credit: &str) -> Vec<String> {
    // Normalize the "and" separator to a comma, then split once
    let normalized = AND_SEPARATOR_PATTERN.replace_all(credit, ",");

    normalized
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Computes the gap between consecutive wins for every producer with at
/// least two wins, then keeps every entry tied at the shortest gap and
/// every entry tied at the longest gap.
///
/// Entries are emitted in alphabetical producer order, chronological within
/// a producer, so repeated runs over the same records compare equal.
pub fn analyze_award_intervals(credits: &[WinningCredit]) -> IntervalAnalysis {
    let mut wins_by_producer: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    for credit in credits {
        for producer in split_producer_credits(&credit.producers) {
            wins_by_producer
                .entry(producer)
                .or_default()
                .push(credit.year);
        }
    }

    let mut entries: Vec<ProducerInterval> = Vec::new();
    for (producer, mut years) in wins_by_producer {
        if years.len() < 2 {
            continue;
        }
        years.sort_unstable();
        for pair in years.windows(2) {
            entries.push(ProducerInterval {
                producer: producer.clone(),
                interval: pair[1] - pair[0],
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    if entries.is_empty() {
        return IntervalAnalysis::default();
    }

    let mut shortest = entries[0].interval;
    let mut longest = entries[0].interval;
    for entry in &entries {
        shortest = shortest.min(entry.interval);
        longest = longest.max(entry.interval);
    }

    IntervalAnalysis {
        min: entries
            .iter()
            .filter(|entry| entry.interval == shortest)
            .cloned()
            .collect(),
        max: entries
            .iter()
            .filter(|entry| entry.interval == longest)
            .cloned()
            .collect(),
    }
}
