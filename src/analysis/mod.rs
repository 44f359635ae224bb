// Analysis pipeline — normalization, TF-IDF weighting, similarity ranking.

pub mod engine;
pub mod matrix;
pub mod normalize;
pub mod similarity;
