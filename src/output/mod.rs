// Output formatting — terminal display and JSON export.

pub mod json;
pub mod terminal;

/// Fit a term into a fixed-width column, truncating with an ellipsis when
/// it is too long. Counts characters, not bytes, so accented letters never
/// split a column boundary.
pub fn fit_column(term: &str, width: usize) -> String {
    if term.chars().count() <= width {
        term.to_string()
    } else {
        let mut fitted: String = term.chars().take(width.saturating_sub(1)).collect();
        fitted.push('…');
        fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_terms_pass_through() {
        assert_eq!(fit_column("sol", 8), "sol");
    }

    #[test]
    fn long_terms_are_truncated_with_ellipsis() {
        let fitted = fit_column("lentament", 6);
        assert_eq!(fitted.chars().count(), 6);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn accented_terms_respect_char_boundaries() {
        // Byte slicing would panic here; char-based truncation must not
        let fitted = fit_column("pájaróñü", 4);
        assert_eq!(fitted.chars().count(), 4);
    }
}
