// Demo corpus, preset queries, and document-set parsing.
//
// The demo material mirrors the original: six short Spanish sentences and
// the five questions that go with them. `parse_documents` is the single
// place raw multi-line input becomes an ordered document set.

/// The six demo documents, one per line. Used whenever the user supplies
/// no documents of their own.
pub const DEMO_DOCUMENTS: &str = "\
El sol brilla sobre las montañas al amanecer.
El río fluye lentamente hacia el mar.
Los árboles crecen altos en el bosque verde.
Las flores se abren cuando llega la primavera.
El viento sopla entre las hojas del parque.
Los pájaros vuelan en grupos buscando el cielo despejado.";

/// Preset queries offered as one-keystroke shortcuts.
pub const PRESET_QUERIES: [&str; 5] = [
    "¿Dónde sopla el viento?",
    "¿Qué sucede con las flores en primavera?",
    "¿Qué hacen los pájaros en el cielo?",
    "¿Cómo se comporta el río?",
    "¿Qué elementos hay en el bosque?",
];

/// Split raw multi-line input into an ordered document set.
///
/// One document per non-blank line, trimmed. Order is preserved; it
/// drives the "Texto N" display labels and the stable tie-break in ranking.
/// Duplicate lines are allowed.
pub fn parse_documents(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Display label for the document at `index` (zero-based).
pub fn document_label(index: usize) -> String {
    format!("Texto {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let docs = parse_documents("  uno  \n\n   \ndos\n");
        assert_eq!(docs, vec!["uno".to_string(), "dos".to_string()]);
    }

    #[test]
    fn parse_preserves_order_and_duplicates() {
        let docs = parse_documents("igual\nigual\notro");
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0], docs[1]);
    }

    #[test]
    fn demo_corpus_has_six_documents() {
        assert_eq!(parse_documents(DEMO_DOCUMENTS).len(), 6);
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(document_label(0), "Texto 1");
        assert_eq!(document_label(5), "Texto 6");
    }
}
