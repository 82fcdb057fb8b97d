use rand::seq::SliceRandom;
use rand::Rng;
use crate::utils::{GameError, GameResult};

/// Common five-letter English words the secret word is drawn from.
pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "beach", "chair", "dance", "eagle", "flask", "grape", "house",
    "image", "juice", "knack", "lemon", "mouse", "noble", "ocean", "piano",
    "queen", "river", "snake", "table", "uncle", "voice", "water", "zebra",
    "bread", "clock", "dream", "earth", "flame", "green", "heart", "ivory",
    "jolly", "knife", "light", "music", "night", "olive", "peace", "quiet",
    "radio", "smile", "tiger", "urban", "video", "wheel", "youth", "cloud",
    "phone", "storm", "books", "faith", "happy", "magic", "paper", "world",
];

/// A fixed, non-empty list of candidate secret words.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary entries. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn new<I, S>(words: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }

        Ok(Self { words })
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction, the fallback is never taken.
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(DEFAULT_WORDS[0])
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|candidate| *candidate == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }
}
