use anyhow::Result;
use clap::{Parser, Subcommand};

use faro::analysis::engine::Analyzer;
use faro::analysis::normalize::SpanishNormalizer;
use faro::config::Config;
use faro::corpus;
use faro::output::{json, terminal};
use faro::session;

/// Faro: TF-IDF similarity explorer for Spanish text.
///
/// Ranks a set of short documents by lexical similarity to a question and
/// highlights the best match, alongside the full weighted term table.
#[derive(Parser)]
#[command(name = "faro", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one analysis and print the weighted table and best match
    Analyze {
        /// File with one document per non-blank line (default: demo corpus)
        #[arg(long)]
        docs: Option<String>,

        /// The question to rank documents against
        #[arg(long)]
        query: Option<String>,

        /// Use one of the preset queries (1-5) instead of --query
        #[arg(long, conflicts_with = "query")]
        preset: Option<usize>,

        /// Print the full analysis as pretty JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive query loop
    Interactive {
        /// File with one document per non-blank line (default: demo corpus)
        #[arg(long)]
        docs: Option<String>,
    },

    /// List the preset queries
    Presets,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("faro=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            docs,
            query,
            preset,
            json: as_json,
        } => {
            let documents = load_documents(docs.as_deref(), &config)?;
            let query = resolve_query(query, preset)?;

            let analyzer = Analyzer::new(SpanishNormalizer::new(), config.threshold);
            let analysis = analyzer.analyze(&documents, &query)?;

            if as_json {
                println!("{}", json::render(&analysis)?);
            } else {
                terminal::display_analysis(&analysis);
            }
        }

        Commands::Interactive { docs } => {
            let documents = load_documents(docs.as_deref(), &config)?;
            let analyzer = Analyzer::new(SpanishNormalizer::new(), config.threshold);
            session::run(&analyzer, documents)?;
        }

        Commands::Presets => {
            terminal::display_presets();
        }
    }

    Ok(())
}

/// Load the document set: --docs file, FARO_DOCS file, or the demo corpus.
fn load_documents(docs: Option<&str>, config: &Config) -> Result<Vec<String>> {
    let raw = match docs.or(config.docs_path.as_deref()) {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("No se pudo leer el archivo de textos {path}: {e}"))?,
        None => corpus::DEMO_DOCUMENTS.to_string(),
    };
    Ok(corpus::parse_documents(&raw))
}

/// Resolve the effective query from --query or --preset. Empty when neither
/// is given; the engine rejects it with the empty-query message.
fn resolve_query(query: Option<String>, preset: Option<usize>) -> Result<String> {
    match preset {
        Some(n) => match n.checked_sub(1).and_then(|i| corpus::PRESET_QUERIES.get(i)) {
            Some(q) => Ok(q.to_string()),
            None => anyhow::bail!(
                "--preset debe estar entre 1 y {}",
                corpus::PRESET_QUERIES.len()
            ),
        },
        None => Ok(query.unwrap_or_default()),
    }
}
