use std::{fs, path::Path};

use crate::dataset::DatasetError;

pub const DEFAULT_VOCABULARY: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "that", "have", "i", "it", "for",
    "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his",
    "by", "from", "they", "we", "say", "her", "she", "or", "an", "will", "my",
    "one", "all", "would", "there", "their", "what", "so", "up", "out", "if",
    "about", "who", "get", "which", "go", "when", "me", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year",
    "your", "good", "some", "could", "them", "see", "other", "than", "then",
    "now", "look", "only", "come", "its", "over", "think", "also", "back",
    "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most",
    "us",
];

pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_VOCABULARY.iter().map(|word| word.to_string()).collect()
}

/// Reads a whitespace separated word list.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>, DatasetError> {
    let contents = fs::read_to_string(path)?;
    let words = contents
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<String>>();
    if words.is_empty() {
        return Err(DatasetError::EmptyVocabulary);
    }

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_vocabulary_has_hundred_unique_words() {
        let mut words = default_vocabulary();
        assert_eq!(words.len(), 100);
        words.sort();
        words.dedup();
        assert_eq!(words.len(), 100);
    }

    #[test]
    fn test_load_vocabulary_splits_on_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha beta\n\tgamma\n\n delta ").unwrap();

        let words = load_vocabulary(file.path()).unwrap();
        assert_eq!(words, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn test_load_vocabulary_rejects_blank_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   \n\n").unwrap();

        let result = load_vocabulary(file.path());
        assert!(matches!(result, Err(DatasetError::EmptyVocabulary)));
    }
}
