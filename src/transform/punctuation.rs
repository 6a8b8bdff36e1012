//! Punctuation removal stage

use std::collections::BTreeSet;

/// Removes every ASCII punctuation character that is not in `ignore`
pub fn remove_punctuation(name: &str, ignore: &BTreeSet<char>) -> String {
    name.chars()
        .filter(|c| !c.is_ascii_punctuation() || ignore.contains(c))
        .collect()
}
