//*** START FILE: src/parsing/mod.rs ***//
pub mod dictionary_csv;
pub mod find_words;

pub use dictionary_csv::load_dictionary;
pub use find_words::load_find_words;
//*** END FILE: src/parsing/mod.rs ***//
