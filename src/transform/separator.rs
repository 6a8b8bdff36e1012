//! Separator substitution stage

use crate::config::SeparatorPair;
use crate::constants::ILLEGAL_PATH_CHARACTERS;
use crate::errors::{Result, illegal_character_error};

/// Checks both sides of a separator pair against the platform's illegal path characters
///
/// # Errors
/// Returns an illegal character error naming the first offending character
pub fn validate_separator(separator: &SeparatorPair) -> Result<()> {
    for side in [&separator.from, &separator.to] {
        if let Some(c) = side.chars().find(|c| ILLEGAL_PATH_CHARACTERS.contains(*c)) {
            return Err(illegal_character_error(c, side));
        }
    }
    Ok(())
}

/// Replaces every literal occurrence of `from` with `to`
///
/// An empty `from` leaves the name untouched.
pub fn replace_separator(name: &str, separator: &SeparatorPair) -> Result<String> {
    validate_separator(separator)?;
    if separator.from.is_empty() {
        return Ok(name.to_string());
    }
    Ok(name.replace(&separator.from, &separator.to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_replace_separator() {
        let pair = SeparatorPair::new("_", " ");
        assert_eq!(replace_separator("a_b__c", &pair).unwrap(), "a b  c");

        let pair = SeparatorPair::new(" - ", "-");
        assert_eq!(replace_separator("a - b - c", &pair).unwrap(), "a-b-c");
    }

    #[test]
    fn test_empty_from_is_a_no_op() {
        let pair = SeparatorPair::new("", "x");
        assert_eq!(replace_separator("abc", &pair).unwrap(), "abc");
    }

    #[test]
    fn test_rejects_path_separator_on_either_side() {
        let sep = std::path::MAIN_SEPARATOR.to_string();

        let from_side = SeparatorPair::new(sep.clone(), "_");
        assert!(matches!(
            replace_separator("a_b", &from_side),
            Err(Error::IllegalCharacter { .. })
        ));

        let to_side = SeparatorPair::new("_", format!("x{sep}"));
        assert!(matches!(
            validate_separator(&to_side),
            Err(Error::IllegalCharacter { .. })
        ));
    }

    #[cfg(windows)]
    #[test]
    fn test_rejects_windows_reserved_characters() {
        for c in ['"', '*', ':', '<', '>', '?', '|'] {
            let pair = SeparatorPair::new("_", c.to_string());
            assert!(validate_separator(&pair).is_err(), "{c} should be rejected");
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_allows_characters_reserved_only_on_windows() {
        let pair = SeparatorPair::new("_", ":");
        assert!(validate_separator(&pair).is_ok());
    }
}
