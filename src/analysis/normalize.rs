// Spanish text normalization — lowercase, alphabet filter, Snowball stems.
//
// Every string that enters the vector space goes through the same
// normalizer, documents and queries alike. Text is lowercased, anything
// outside the Spanish alphabet becomes a separator, single-character tokens
// are dropped, and the survivors are reduced to Snowball stems so that
// morphological variants ("flores"/"flor") land on the same vocabulary term.

use rust_stemmers::{Algorithm, Stemmer};

/// Trait for turning raw text into a sequence of normalized stems.
///
/// The pipeline only depends on this seam, so the tokenization strategy can
/// be swapped without touching the vectorizer or the ranking code.
pub trait Normalizer {
    /// Produce the normalized stem sequence for `text`. May be empty;
    /// downstream vectorization treats that as a zero vector, not an error.
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Spanish normalizer backed by the Snowball stemmer.
pub struct SpanishNormalizer {
    stemmer: Stemmer,
}

impl SpanishNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Spanish),
        }
    }
}

impl Default for SpanishNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for SpanishNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_spanish_letter(c) { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.chars().count() > 1)
            .map(|token| self.stemmer.stem(token).to_string())
            .collect()
    }
}

/// The fixed alphabet: ASCII lowercase plus the accented vowels, ñ and ü.
/// Everything else (digits, punctuation, inverted marks) is a separator.
fn is_spanish_letter(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' | 'ñ')
}
