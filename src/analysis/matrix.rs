// TF-IDF term-document matrix.
//
// Built from scratch on every analysis request — a pure function of the
// current document set, never an incrementally patched structure. The
// vocabulary is the sorted set of stems appearing in at least one document;
// each document row is raw term counts scaled by a smooth inverse document
// frequency and L2-normalized. Queries are projected with the same IDF
// vector, so cosine similarity reduces to a dot product of unit vectors.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

/// Weighted term-document matrix over one document set.
#[derive(Debug, Clone, Serialize)]
pub struct TermDocumentMatrix {
    /// Sorted vocabulary — the column order of every row.
    pub vocabulary: Vec<String>,
    /// One L2-normalized weight row per document, same order as the input.
    pub rows: Vec<Vec<f64>>,
    /// Smooth IDF per vocabulary term, kept to project queries.
    #[serde(skip_serializing)]
    idf: Vec<f64>,
}

impl TermDocumentMatrix {
    /// Build the matrix from pre-normalized documents (one stem sequence
    /// per document).
    pub fn build(documents: &[Vec<String>]) -> Self {
        let doc_count = documents.len() as f64;

        let mut vocabulary: Vec<String> = documents
            .iter()
            .flatten()
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        vocabulary.sort();

        // Document frequency: in how many documents does each term appear?
        let mut doc_freq = vec![0usize; vocabulary.len()];
        for stems in documents {
            let unique: HashSet<&str> = stems.iter().map(String::as_str).collect();
            for term in unique {
                if let Some(column) = column_of(&vocabulary, term) {
                    doc_freq[column] += 1;
                }
            }
        }

        // Smooth IDF: ln((1 + n) / (1 + df)) + 1. Never zero, never infinite.
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + doc_count) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows: Vec<Vec<f64>> = documents
            .iter()
            .map(|stems| weigh(stems, &vocabulary, &idf))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Built term-document matrix"
        );

        Self {
            vocabulary,
            rows,
            idf,
        }
    }

    /// Project a pre-normalized query into this matrix's vector space.
    ///
    /// Out-of-vocabulary stems contribute nothing; a query sharing no
    /// vocabulary with the corpus projects to the zero vector, which is a
    /// valid outcome rather than an error.
    pub fn project(&self, stems: &[String]) -> Vec<f64> {
        weigh(stems, &self.vocabulary, &self.idf)
    }

    pub fn doc_count(&self) -> usize {
        self.rows.len()
    }

    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Raw term counts scaled by IDF, then L2-normalized. Terms not present in
/// the vocabulary are silently dropped.
fn weigh(stems: &[String], vocabulary: &[String], idf: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for stem in stems {
        *counts.entry(stem.as_str()).or_insert(0) += 1;
    }

    let mut weights = vec![0.0; vocabulary.len()];
    for (term, count) in counts {
        if let Some(column) = column_of(vocabulary, term) {
            weights[column] = count as f64 * idf[column];
        }
    }

    l2_normalize(&mut weights);
    weights
}

/// Column index of `term` in the sorted vocabulary.
fn column_of(vocabulary: &[String], term: &str) -> Option<usize> {
    vocabulary.binary_search_by(|v| v.as_str().cmp(term)).ok()
}

/// Scale a vector to unit length. All-zero vectors stay all-zero.
fn l2_normalize(weights: &mut [f64]) {
    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for w in weights.iter_mut() {
            *w /= norm;
        }
    }
}
