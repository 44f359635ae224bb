// Unit tests for the Spanish normalizer.
//
// Covers the fixed-alphabet filter, the single-character cutoff, Snowball
// stemming of morphological variants, and idempotence on text that is
// already normalized.

use faro::analysis::normalize::{Normalizer, SpanishNormalizer};

// ============================================================
// Alphabet filter and tokenization
// ============================================================

#[test]
fn lowercases_before_filtering() {
    let n = SpanishNormalizer::new();
    assert_eq!(n.normalize("VIENTO"), n.normalize("viento"));
    assert_eq!(n.normalize("Flores"), n.normalize("flores"));
}

#[test]
fn accented_words_stay_whole() {
    let n = SpanishNormalizer::new();
    // á é í ó ú ü ñ belong to the alphabet; none of these words may split
    for word in ["río", "pájaros", "árboles", "señal", "pingüino"] {
        let stems = n.normalize(word);
        assert_eq!(stems.len(), 1, "'{word}' should stay one token, got {stems:?}");
    }
}

#[test]
fn inverted_punctuation_is_stripped() {
    let n = SpanishNormalizer::new();
    assert_eq!(
        n.normalize("¿Qué sucede con las flores?"),
        n.normalize("qué sucede con las flores")
    );
    assert_eq!(n.normalize("¡sopla!"), n.normalize("sopla"));
}

#[test]
fn digits_split_tokens() {
    let n = SpanishNormalizer::new();
    let stems = n.normalize("casa123casa");
    assert_eq!(stems.len(), 2);
    assert_eq!(stems[0], stems[1]);
}

#[test]
fn single_character_tokens_are_discarded() {
    let n = SpanishNormalizer::new();
    // "a" and "y" vanish; "el" and "mar" survive the length cutoff
    let stems = n.normalize("el mar y a");
    assert_eq!(stems.len(), 2, "Expected [el, mar], got {stems:?}");
}

// ============================================================
// Stemming
// ============================================================

#[test]
fn stems_collapse_morphological_variants() {
    let n = SpanishNormalizer::new();
    assert_eq!(n.normalize("flores"), vec!["flor".to_string()]);
    assert_eq!(n.normalize("flores"), n.normalize("flor"));
    assert_eq!(n.normalize("montañas"), n.normalize("montaña"));
}

#[test]
fn whole_sentence_stems_in_order() {
    let n = SpanishNormalizer::new();
    let stems = n.normalize("El viento sopla entre las hojas del parque.");
    // One stem per surviving token, input order preserved
    assert_eq!(stems.len(), 8, "Expected 8 stems, got {stems:?}");
    assert_eq!(stems[0], "el");
}

// ============================================================
// Idempotence and empty output
// ============================================================

#[test]
fn idempotent_on_already_normalized_text() {
    let n = SpanishNormalizer::new();
    let first = n.normalize("El viento sopla entre las hojas del parque");
    let again = n.normalize(&first.join(" "));
    assert_eq!(first, again, "Re-normalizing stemmed output must be a no-op");
}

#[test]
fn empty_and_unusable_input_yield_empty_output() {
    let n = SpanishNormalizer::new();
    assert!(n.normalize("").is_empty());
    assert!(n.normalize("   ").is_empty());
    assert!(n.normalize("42 + 17 = 59").is_empty());
    assert!(n.normalize("a e i o u").is_empty());
}
