// Cosine similarity and best-match selection.
//
// Scores are cosine similarities between the projected query vector and
// each document row. With non-negative weights the score lands in [0, 1];
// an all-zero vector on either side scores 0.0 by definition.

use serde::Serialize;

/// Fixed cutoff between a confident and a weak match.
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// Display-only classification of a best-match score. A weak match is
/// still a valid result, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Confident,
    Weak,
}

impl Confidence {
    /// Classify a score against `threshold`. The score must be strictly
    /// above the cutoff to count as confident.
    pub fn classify(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Self::Confident
        } else {
            Self::Weak
        }
    }
}

/// Cosine similarity of two equal-length weight vectors.
///
/// Defined as 0.0 when either vector is all-zero; clamped to [0, 1] so
/// float noise never nudges a score past the boundaries.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denominator = norm_a * norm_b;
    if denominator < f64::EPSILON {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}

/// Score every document row against the query vector.
pub fn score_documents(query: &[f64], rows: &[Vec<f64>]) -> Vec<f64> {
    rows.iter()
        .map(|row| cosine_similarity(query, row))
        .collect()
}

/// Stable argmax: the earliest index holding the maximum score.
///
/// With an all-zero score vector this is index 0, the degrade-gracefully
/// policy for queries sharing no vocabulary with the corpus.
pub fn best_index(scores: &[f64]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    Some(best)
}
