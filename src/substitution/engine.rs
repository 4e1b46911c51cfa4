//*** START FILE: src/substitution/engine.rs ***//
use super::dictionary::FrenchDictionary;
use super::record::ReplacementRecord;

/// Replaces every candidate word found in the dictionary with its French word.
///
/// Candidates are applied one after the other over the evolving text, so a
/// later candidate sees the output of the earlier ones. Matching is a plain
/// case-sensitive substring search: "cat" also matches inside "category".
/// A candidate whose lowercase form is in the dictionary is recorded even if
/// it never occurs in the text.
pub fn replace_words<I, S>(
    text: &str,
    dictionary: &FrenchDictionary,
    candidates: I,
) -> (String, ReplacementRecord)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut modified_text = text.to_string();
    let mut replacements = ReplacementRecord::new();

    for candidate in candidates {
        let word = candidate.as_ref();
        let Some(french_word) = dictionary.lookup(word) else {
            continue;
        };

        if modified_text.contains(word) {
            modified_text = modified_text.replace(word, french_word);
        }
        replacements.insert(word, french_word);
    }

    tracing::debug!(
        replaced = replacements.len(),
        "substitution pass finished"
    );
    (modified_text, replacements)
}

//*** END FILE: src/substitution/engine.rs ***//
