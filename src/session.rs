// Interactive session — the read-eval loop over documents and queries.
//
// State is explicit: a SessionState owned by the loop and handed to every
// render cycle. Preset selection and free-typed text are events that update
// the query and return to the idle prompt; the pipeline only runs on the
// explicit run action. Validation errors are printed and the loop
// continues, so the user corrects the input and retries.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::analysis::engine::Analyzer;
use crate::analysis::normalize::SpanishNormalizer;
use crate::corpus;
use crate::output::terminal;

/// Explicit session state passed into every render cycle.
pub struct SessionState {
    pub documents: Vec<String>,
    pub query: String,
}

/// Run the interactive loop on stdin until `:quit` or end of input.
pub fn run(analyzer: &Analyzer<SpanishNormalizer>, documents: Vec<String>) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(analyzer, documents, &mut stdin.lock().lines())
}

fn run_with_input(
    analyzer: &Analyzer<SpanishNormalizer>,
    documents: Vec<String>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let mut state = SessionState {
        documents,
        // The first preset pre-populates the query, like the original form
        query: corpus::PRESET_QUERIES[0].to_string(),
    };

    print_banner(&state);

    loop {
        prompt(&state)?;
        let Some(line) = lines.next() else { break };
        let input = line?;
        let input = input.trim();

        match input {
            ":quit" | ":q" => break,
            ":run" | "" => match analyzer.analyze(&state.documents, &state.query) {
                Ok(analysis) => terminal::display_analysis(&analysis),
                Err(e) => terminal::display_error(&e.to_string()),
            },
            ":list" => display_documents(&state),
            ":presets" => terminal::display_presets(),
            ":docs" => {
                let raw = read_documents(lines)?;
                state.documents = corpus::parse_documents(&raw);
                println!("  {} textos cargados.", state.documents.len());
            }
            _ => {
                state.query = match parse_preset(input) {
                    Some(preset) => preset.to_string(),
                    None => input.to_string(),
                };
                println!("  Pregunta actual: {}", state.query.bold());
            }
        }
    }

    Ok(())
}

fn print_banner(state: &SessionState) {
    println!("{}", "=== Faro: análisis de similitud TF-IDF ===".bold());
    println!("Textos cargados: {}", state.documents.len());
    println!("\nComandos:");
    println!("  Enter / :run   analizar la pregunta actual");
    println!("  1-5            elegir una pregunta sugerida");
    println!("  :docs          reemplazar los textos (termina con una línea vacía)");
    println!("  :list          mostrar los textos actuales");
    println!("  :presets       mostrar las preguntas sugeridas");
    println!("  :quit          salir");
    println!("\nCualquier otra entrada se toma como nueva pregunta.");
    terminal::display_presets();
}

/// Render the idle prompt with the current query state.
fn prompt(state: &SessionState) -> Result<()> {
    print!(
        "\n[{} textos] pregunta: {} > ",
        state.documents.len(),
        state.query.cyan()
    );
    io::stdout().flush()?;
    Ok(())
}

fn display_documents(state: &SessionState) {
    if state.documents.is_empty() {
        println!("  (sin textos)");
        return;
    }
    for (i, doc) in state.documents.iter().enumerate() {
        println!("  {}: {}", corpus::document_label(i).dimmed(), doc);
    }
}

/// Read replacement documents, one per line, until a blank line.
fn read_documents(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    println!("Ingresa tus textos (uno por línea, termina con una línea vacía):");
    let mut raw = String::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        raw.push_str(&line);
        raw.push('\n');
    }
    Ok(raw)
}

/// Map "1".."5" to the corresponding preset query.
fn parse_preset(input: &str) -> Option<&'static str> {
    let n: usize = input.parse().ok()?;
    corpus::PRESET_QUERIES.get(n.checked_sub(1)?).copied()
}
