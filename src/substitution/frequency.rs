//*** START FILE: src/substitution/frequency.rs ***//
use std::collections::HashMap;

use serde::Serialize;

use super::record::ReplacementRecord;

/// Number of distinct candidate words that produced each French word,
/// in first-sight order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn count(&self, french: &str) -> u32 {
        self.counts.get(french).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.order.iter().map(|f| (f.as_str(), self.counts[f]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One line of the frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    #[serde(rename = "English word")]
    pub english: String,
    #[serde(rename = "French word")]
    pub french: String,
    #[serde(rename = "Frequency")]
    pub frequency: u32,
}

pub fn count_frequencies(record: &ReplacementRecord) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for (_, french) in record.iter() {
        match table.counts.get_mut(french) {
            Some(count) => *count += 1,
            None => {
                table.counts.insert(french.to_string(), 1);
                table.order.push(french.to_string());
            }
        }
    }
    table
}

/// Builds one row per record entry, each carrying the final total for its
/// French word.
pub fn frequency_rows(record: &ReplacementRecord) -> Vec<FrequencyRow> {
    let table = count_frequencies(record);
    record
        .iter()
        .map(|(english, french)| FrequencyRow {
            english: english.to_string(),
            french: french.to_string(),
            frequency: table.count(french),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> ReplacementRecord {
        let mut record = ReplacementRecord::new();
        for (e, f) in pairs {
            record.insert(e, f);
        }
        record
    }

    #[test]
    fn test_shared_french_word_reports_final_total() {
        let rows = frequency_rows(&record(&[("Cat", "chat"), ("Kitten", "chat")]));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.french == "chat" && r.frequency == 2));
        assert_eq!(rows[0].english, "Cat");
        assert_eq!(rows[1].english, "Kitten");
    }

    #[test]
    fn test_first_row_is_not_a_running_count() {
        let rows = frequency_rows(&record(&[
            ("big", "grand"),
            ("dog", "chien"),
            ("large", "grand"),
            ("tall", "grand"),
        ]));
        let freqs: Vec<u32> = rows.iter().map(|r| r.frequency).collect();
        assert_eq!(freqs, vec![3, 1, 3, 3]);
    }

    #[test]
    fn test_table_order_and_counts() {
        let table = count_frequencies(&record(&[("a", "x"), ("b", "y"), ("c", "x")]));
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("x", 2), ("y", 1)]);
        assert_eq!(table.count("z"), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_record() {
        assert!(count_frequencies(&ReplacementRecord::new()).is_empty());
        assert!(frequency_rows(&ReplacementRecord::new()).is_empty());
    }
}
//*** END FILE: src/substitution/frequency.rs ***//
