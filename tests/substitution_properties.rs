use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use weave_translate::substitution::{count_frequencies, frequency_rows};
use weave_translate::{replace_words, FrenchDictionary};

fn dictionary_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[a-c]{1,3}", "[a-z]{1,4}", 0..8)
}

fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C]{1,3}", 0..10)
}

fn to_dictionary(map: &HashMap<String, String>) -> FrenchDictionary {
    map.iter().map(|(e, f)| (e.clone(), f.clone())).collect()
}

proptest! {
    #[test]
    fn record_holds_exactly_the_dictionary_hits(
        map in dictionary_strategy(),
        candidates in candidates_strategy(),
        text in "[a-cA-C ]{0,40}",
    ) {
        let dictionary = to_dictionary(&map);
        let (_, record) = replace_words(&text, &dictionary, &candidates);

        for (english, french) in record.iter() {
            prop_assert!(candidates.iter().any(|c| c == english));
            prop_assert_eq!(Some(french), map.get(&english.to_lowercase()).map(String::as_str));
        }
        let expected: HashSet<&str> = candidates
            .iter()
            .filter(|c| map.contains_key(&c.to_lowercase()))
            .map(String::as_str)
            .collect();
        let recorded: HashSet<&str> = record.iter().map(|(e, _)| e).collect();
        prop_assert_eq!(recorded, expected);
    }

    #[test]
    fn text_matches_sequential_literal_replacement(
        map in dictionary_strategy(),
        candidates in candidates_strategy(),
        text in "[a-cA-C ]{0,40}",
    ) {
        let dictionary = to_dictionary(&map);
        let (modified, _) = replace_words(&text, &dictionary, &candidates);

        let expected = candidates.iter().fold(text.clone(), |acc, c| {
            match map.get(&c.to_lowercase()) {
                Some(french) => acc.replace(c.as_str(), french),
                None => acc,
            }
        });
        prop_assert_eq!(modified, expected);
    }

    #[test]
    fn frequency_counts_distinct_keys_per_french_word(
        map in dictionary_strategy(),
        candidates in candidates_strategy(),
    ) {
        let dictionary = to_dictionary(&map);
        let (_, record) = replace_words("", &dictionary, &candidates);
        let table = count_frequencies(&record);
        let rows = frequency_rows(&record);

        prop_assert_eq!(rows.len(), record.len());
        for row in &rows {
            let distinct = record.iter().filter(|(_, f)| *f == row.french).count() as u32;
            prop_assert_eq!(row.frequency, distinct);
            prop_assert_eq!(table.count(&row.french), distinct);
        }
    }
}
