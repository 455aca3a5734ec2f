//! Pronounceable random string generator.

use fill_core::{Value, ValueGenerator};
use rand::{Rng, RngCore};

const CONSONANTS: &[u8] = b"bcdfghjklmnprstvwz";
const VOWELS: &[u8] = b"aeiou";

/// Generates space-separated pronounceable words built from alternating
/// consonant/vowel pairs. The default generator for `text`.
#[derive(Debug, Clone)]
pub struct MnemonicString {
    words: usize,
}

impl MnemonicString {
    /// Create a generator producing the given number of words per value.
    pub fn new(words: usize) -> Self {
        Self { words }
    }

    fn word(rng: &mut dyn RngCore) -> String {
        let pairs = rng.gen_range(2..=4);
        let mut word = String::with_capacity(pairs * 2 + 1);
        for _ in 0..pairs {
            word.push(CONSONANTS[rng.gen_range(0..CONSONANTS.len())] as char);
            word.push(VOWELS[rng.gen_range(0..VOWELS.len())] as char);
        }
        if rng.gen_bool(0.3) {
            word.push(CONSONANTS[rng.gen_range(0..CONSONANTS.len())] as char);
        }
        word
    }
}

impl ValueGenerator for MnemonicString {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        let words: Vec<String> = (0..self.words).map(|_| Self::word(rng)).collect();
        Value::Text(words.join(" "))
    }
}
