//*** START FILE: src/parsing/find_words.rs ***//
use std::fs;
use std::path::Path;

use crate::error::TranslateError;

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits the candidate list into one word per line, keeping case, order,
/// duplicates and blank lines.
///
/// `\r\n` counts as one boundary; a lone `\r`, vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line and paragraph
/// separators also end a line. A final boundary adds no empty word.
pub fn parse_find_words(content: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        words.push(content[start..idx].to_string());
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }
    if start < content.len() {
        words.push(content[start..].to_string());
    }
    words
}

pub fn load_find_words(file_path: &Path) -> Result<Vec<String>, TranslateError> {
    let content = fs::read_to_string(file_path).map_err(|e| TranslateError::io(file_path, e))?;
    let find_words = parse_find_words(&content);
    tracing::info!(path = %file_path.display(), words = find_words.len(), "loaded find words");
    Ok(find_words)
}

//*** END FILE: src/parsing/find_words.rs ***//
