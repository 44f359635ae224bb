// The analysis pipeline — validation, vectorization, ranking.
//
// One call per user action, rebuilt from scratch every time. The two
// validation failures (no documents, blank query) are the only error paths;
// everything else, including a query sharing no vocabulary with the corpus,
// is a valid analysis with well-defined scores.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::matrix::TermDocumentMatrix;
use super::normalize::{Normalizer, SpanishNormalizer};
use super::similarity::{self, Confidence};

/// The selected best match.
#[derive(Debug, Clone, Serialize)]
pub struct BestMatch {
    pub index: usize,
    pub text: String,
    pub score: f64,
    pub confidence: Confidence,
}

/// Complete result of one analysis request. Owned by the caller and
/// discarded after display; nothing here persists between requests.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub query: String,
    pub documents: Vec<String>,
    pub matrix: TermDocumentMatrix,
    pub scores: Vec<f64>,
    pub best: BestMatch,
}

/// Runs the full pipeline over a document set and a query.
pub struct Analyzer<N: Normalizer> {
    normalizer: N,
    threshold: f64,
}

impl Default for Analyzer<SpanishNormalizer> {
    fn default() -> Self {
        Self::new(SpanishNormalizer::new(), similarity::DEFAULT_THRESHOLD)
    }
}

impl<N: Normalizer> Analyzer<N> {
    pub fn new(normalizer: N, threshold: f64) -> Self {
        Self {
            normalizer,
            threshold,
        }
    }

    /// Analyze `documents` against `query`.
    ///
    /// Rejects an empty document set and a blank query before any
    /// computation; both are user-correctable input errors, reported and
    /// retried without residual state.
    pub fn analyze(&self, documents: &[String], query: &str) -> Result<Analysis> {
        if documents.is_empty() {
            anyhow::bail!("No hay textos para analizar. Ingresa al menos una línea.");
        }
        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("Escribe una pregunta antes de continuar.");
        }

        let normalized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.normalizer.normalize(doc))
            .collect();
        let matrix = TermDocumentMatrix::build(&normalized);

        let query_vec = matrix.project(&self.normalizer.normalize(query));
        let scores = similarity::score_documents(&query_vec, &matrix.rows);

        let index = similarity::best_index(&scores).unwrap_or(0);
        let score = scores[index];
        let confidence = Confidence::classify(score, self.threshold);

        info!(
            documents = documents.len(),
            vocabulary = matrix.term_count(),
            best_index = index,
            best_score = score,
            "Analysis complete"
        );

        Ok(Analysis {
            query: query.to_string(),
            documents: documents.to_vec(),
            matrix,
            scores,
            best: BestMatch {
                index,
                text: documents[index].clone(),
                score,
                confidence,
            },
        })
    }
}
