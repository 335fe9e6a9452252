use rand::Rng;

use crate::dataset::DatasetError;

/// Average number of tokens a plain English word expands to.
///
/// Prompt word counts are derived from this ratio, so datasets generated
/// with the same seed and vocabulary only match across versions while it
/// stays at 1.3.
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Number of words needed to approximate `target_tokens` tokens.
///
/// Never returns zero: a zero-token target still yields a one-word prompt.
pub fn words_for_tokens(target_tokens: u64) -> usize {
    let words = (target_tokens as f64 / TOKENS_PER_WORD).floor() as usize;
    words.max(1)
}

/// Builds prompts of an approximate token length by sampling words
/// uniformly, with replacement, from a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct PromptSynthesizer {
    vocabulary: Vec<String>,
}

impl PromptSynthesizer {
    pub fn new(vocabulary: Vec<String>) -> Result<Self, DatasetError> {
        if vocabulary.is_empty() {
            return Err(DatasetError::EmptyVocabulary);
        }

        Ok(Self {
            vocabulary,
        })
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        target_tokens: u64,
        rng: &mut R,
    ) -> String {
        let words_count = words_for_tokens(target_tokens);

        let mut prompt = String::new();
        for index in 0..words_count {
            if index > 0 {
                prompt.push(' ');
            }
            let word_index = rng.random_range(0..self.vocabulary.len());
            prompt.push_str(&self.vocabulary[word_index]);
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::dataset::default_vocabulary;

    const TEST_SEED: u64 = 42;

    fn synthesizer() -> PromptSynthesizer {
        PromptSynthesizer::new(default_vocabulary()).unwrap()
    }

    #[test]
    fn test_words_for_tokens() {
        assert_eq!(words_for_tokens(0), 1);
        assert_eq!(words_for_tokens(1), 1);
        assert_eq!(words_for_tokens(2), 1);
        assert_eq!(words_for_tokens(100), 76);
        assert_eq!(words_for_tokens(128), 98);
        assert_eq!(words_for_tokens(1000), 769);
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let result = PromptSynthesizer::new(Vec::new());
        assert!(matches!(result, Err(DatasetError::EmptyVocabulary)));
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let synthesizer = synthesizer();
        let first =
            synthesizer.generate(256, &mut StdRng::seed_from_u64(TEST_SEED));
        let second =
            synthesizer.generate(256, &mut StdRng::seed_from_u64(TEST_SEED));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_only_uses_vocabulary_words() {
        let synthesizer =
            PromptSynthesizer::new(vec!["red".to_string(), "blue".to_string()])
                .unwrap();
        let mut rng = StdRng::seed_from_u64(TEST_SEED);

        let prompt = synthesizer.generate(64, &mut rng);
        assert!(prompt.split(' ').all(|word| word == "red" || word == "blue"));
        assert!(!prompt.starts_with(' '));
        assert!(!prompt.ends_with(' '));
    }

    #[test]
    fn test_single_word_vocabulary() {
        let synthesizer =
            PromptSynthesizer::new(vec!["token".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(TEST_SEED);

        assert_eq!(synthesizer.generate(4, &mut rng), "token token token");
    }
}
