// Colored terminal rendering of analysis results.
//
// All terminal-specific formatting lives here: the weighted term table,
// the best-match panel, the preset listing, and validation errors. Wide
// vocabularies are split into column blocks so rows never wrap.

use colored::Colorize;

use crate::analysis::engine::Analysis;
use crate::analysis::similarity::Confidence;
use crate::corpus;

/// Vocabulary columns per table block.
const COLUMNS_PER_BLOCK: usize = 8;
/// Width of one numeric column.
const COLUMN_WIDTH: usize = 9;

/// Display the full analysis: weighted table, query echo, best match.
pub fn display_analysis(analysis: &Analysis) {
    display_matrix(analysis);
    display_best_match(analysis);
}

/// Display the TF-IDF table: rows = documents, columns = vocabulary terms,
/// weights to 3 decimal places.
pub fn display_matrix(analysis: &Analysis) {
    println!("\n{}", "=== Resultados TF-IDF ===".bold());

    let vocabulary = &analysis.matrix.vocabulary;
    if vocabulary.is_empty() {
        println!("  (vocabulario vacío: ningún texto produjo términos)");
        return;
    }

    let label_width = analysis
        .documents
        .iter()
        .enumerate()
        .map(|(i, _)| corpus::document_label(i).chars().count())
        .max()
        .unwrap_or(0);

    for (block, terms) in vocabulary.chunks(COLUMNS_PER_BLOCK).enumerate() {
        let offset = block * COLUMNS_PER_BLOCK;

        // Column headers — pad before coloring so the ANSI escapes don't
        // count toward the column width
        print!("\n  {:label_width$}", "");
        for term in terms {
            let header = format!("{:>COLUMN_WIDTH$}", super::fit_column(term, COLUMN_WIDTH));
            print!("  {}", header.dimmed());
        }
        println!();

        for (i, row) in analysis.matrix.rows.iter().enumerate() {
            print!("  {:<label_width$}", corpus::document_label(i));
            for column in offset..offset + terms.len() {
                print!("  {:>COLUMN_WIDTH$.3}", row[column]);
            }
            println!();
        }
    }
}

/// Display the query echo and the highlighted best match.
pub fn display_best_match(analysis: &Analysis) {
    let best = &analysis.best;

    println!("\n{}", "=== Resultado del análisis ===".bold());
    println!("  Tu pregunta: {}", analysis.query.bold());

    match best.confidence {
        Confidence::Confident => {
            println!(
                "  {} {}",
                "Respuesta más similar:".green().bold(),
                best.text
            );
            println!(
                "  Nivel de similitud: {} ({})",
                format!("{:.3}", best.score).green(),
                corpus::document_label(best.index).dimmed()
            );
        }
        Confidence::Weak => {
            println!(
                "  {} {}",
                "Respuesta con baja coincidencia:".yellow().bold(),
                best.text
            );
            println!(
                "  Nivel de similitud: {} ({})",
                format!("{:.3}", best.score).yellow(),
                corpus::document_label(best.index).dimmed()
            );
        }
    }
}

/// List the preset queries as numbered shortcuts.
pub fn display_presets() {
    println!("\n{}", "=== Preguntas sugeridas ===".bold());
    for (i, preset) in corpus::PRESET_QUERIES.iter().enumerate() {
        println!("  {}. {}", i + 1, preset);
    }
}

/// Print a validation error without exiting; the user corrects the input
/// and retries.
pub fn display_error(message: &str) {
    println!("  {} {}", "Error:".red().bold(), message);
}
