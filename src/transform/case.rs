//! Case conversion stage

use crate::config::CaseMode;

/// Applies the configured case mode to a name
pub fn convert_case(name: &str, case: CaseMode) -> String {
    match case {
        CaseMode::None => name.to_string(),
        CaseMode::Lower => name.to_lowercase(),
        CaseMode::Upper => name.to_uppercase(),
        CaseMode::CapWords => cap_words(name),
    }
}

/// Capitalises every whitespace delimited word
///
/// Leading punctuation of a word is skipped, the alphanumeric run that follows
/// gets an uppercase first character and lowercase rest, and whatever comes
/// after that run (an extension, for instance) is left as written.
/// Whitespace is preserved exactly.
pub fn cap_words(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut word = String::new();

    for c in name.chars() {
        if c.is_whitespace() {
            result.push_str(&capitalise_word(&word));
            word.clear();
            result.push(c);
        } else {
            word.push(c);
        }
    }
    result.push_str(&capitalise_word(&word));
    result
}

fn capitalise_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() {
            break;
        }
        result.push(c);
        chars.next();
    }

    let mut first = true;
    while let Some(&c) = chars.peek() {
        if !c.is_alphanumeric() {
            break;
        }
        if first {
            result.extend(c.to_uppercase());
            first = false;
        } else {
            result.extend(c.to_lowercase());
        }
        chars.next();
    }

    result.extend(chars);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_modes() {
        assert_eq!(convert_case("hello world", CaseMode::CapWords), "Hello World");
        assert_eq!(convert_case("MixedCase", CaseMode::Upper), "MIXEDCASE");
        assert_eq!(convert_case("MixedCase", CaseMode::Lower), "mixedcase");
        assert_eq!(convert_case("MixedCase", CaseMode::None), "MixedCase");
    }

    #[test]
    fn test_cap_words_lowercases_rest_of_word() {
        assert_eq!(cap_words("hELLO wORLD"), "Hello World");
        assert_eq!(cap_words("2ND edition"), "2nd Edition");
    }

    #[test]
    fn test_cap_words_skips_leading_punctuation_and_keeps_extension() {
        assert_eq!(cap_words("file -draft.TXT"), "File -Draft.TXT");
        assert_eq!(cap_words("(live) set.mp3"), "(Live) Set.mp3");
    }

    #[test]
    fn test_cap_words_preserves_whitespace() {
        assert_eq!(cap_words("  two  spaces "), "  Two  Spaces ");
        assert_eq!(cap_words(""), "");
    }

    #[test]
    fn test_cap_words_is_idempotent() {
        let once = cap_words("the quick-brown fox.JPG");
        assert_eq!(cap_words(&once), once);
    }
}
