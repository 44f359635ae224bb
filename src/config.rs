use std::env;

use anyhow::Result;

use crate::analysis::similarity;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// field has a default; the tool runs with no configuration at all.
pub struct Config {
    /// Cutoff between a confident and a weak match (FARO_THRESHOLD).
    pub threshold: f64,
    /// Documents file used when --docs is absent (FARO_DOCS). Falls back
    /// to the built-in demo corpus when unset.
    pub docs_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let threshold = match env::var("FARO_THRESHOLD") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => value,
                _ => anyhow::bail!("FARO_THRESHOLD must be a number in [0, 1], got: {raw}"),
            },
            Err(_) => similarity::DEFAULT_THRESHOLD,
        };

        Ok(Self {
            threshold,
            docs_path: env::var("FARO_DOCS").ok(),
        })
    }
}
