//*** START FILE: src/substitution/dictionary.rs ***//
use std::collections::HashMap;

/// English to French lookup table. Read-only once a run starts.
#[derive(Debug, Default, Clone)]
pub struct FrenchDictionary {
    eng_to_fr: HashMap<String, String>,
}

impl FrenchDictionary {
    pub fn new() -> Self {
        FrenchDictionary {
            eng_to_fr: HashMap::new(),
        }
    }

    /// Inserts an entry. The English key is stored as given; a later insert
    /// of the same key overwrites the earlier French word.
    pub fn insert(&mut self, english: impl Into<String>, french: impl Into<String>) {
        self.eng_to_fr.insert(english.into(), french.into());
    }

    /// Looks up a candidate word. The candidate is lowercased before lookup,
    /// the stored keys are not.
    pub fn lookup(&self, candidate: &str) -> Option<&str> {
        self.eng_to_fr
            .get(&candidate.to_lowercase())
            .map(String::as_str)
    }

    /// Returns the number of distinct English keys.
    pub fn size(&self) -> usize {
        self.eng_to_fr.len()
    }
}

impl<E, F> FromIterator<(E, F)> for FrenchDictionary
where
    E: Into<String>,
    F: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (E, F)>>(iter: I) -> Self {
        let mut dictionary = FrenchDictionary::new();
        for (english, french) in iter {
            dictionary.insert(english, french);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_lowercases_candidate() {
        let dictionary: FrenchDictionary = [("cat", "chat")].into_iter().collect();
        assert_eq!(dictionary.lookup("Cat"), Some("chat"));
        assert_eq!(dictionary.lookup("CAT"), Some("chat"));
        assert_eq!(dictionary.lookup("cats"), None);
    }

    #[test]
    fn test_uppercase_keys_are_not_folded() {
        // Keys are kept verbatim, so an uppercase key can never be hit.
        let dictionary: FrenchDictionary = [("Dog", "chien")].into_iter().collect();
        assert_eq!(dictionary.lookup("Dog"), None);
        assert_eq!(dictionary.lookup("dog"), None);
    }

    #[test]
    fn test_later_insert_overwrites() {
        let dictionary: FrenchDictionary =
            [("house", "maison"), ("house", "domicile")].into_iter().collect();
        assert_eq!(dictionary.size(), 1);
        assert_eq!(dictionary.lookup("house"), Some("domicile"));
    }
}
//*** END FILE: src/substitution/dictionary.rs ***//
