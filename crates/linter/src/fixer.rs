//! Textual fix application
//!
//! Each [`Fix`] is locally correct against the unedited source. Applying a
//! batch means sorting by start offset, dropping any fix that overlaps an
//! already-applied one, and splicing the replacements in a single pass.

use crate::diagnostic::{Diagnostic, Fix};

/// Collect every fix proposed by a set of diagnostics
pub fn collect_fixes(diagnostics: &[Diagnostic]) -> Vec<Fix> {
    diagnostics
        .iter()
        .flat_map(|d| d.fixes.iter().cloned())
        .collect()
}

/// Apply fixes to the original source text
///
/// Overlapping fixes are skipped (first writer wins after sorting by start
/// offset); callers that need conflict resolution across passes re-run the
/// linter on the output.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> String {
    let mut sorted: Vec<&Fix> = fixes.iter().collect();
    sorted.sort_by_key(|f| (f.start, f.end));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for fix in sorted {
        let start = fix.start as usize;
        let end = fix.end as usize;
        if start < cursor || end > source.len() || start > end {
            // Overlaps an applied fix or falls outside the text
            continue;
        }
        out.push_str(&source[cursor..start]);
        out.push_str(&fix.replacement);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_span::Span;

    #[test]
    fn test_apply_single_fix() {
        let source = "let a = foo.bar;";
        let fixes = vec![Fix::new(Span::new(8, 15), "bar")];
        assert_eq!(apply_fixes(source, &fixes), "let a = bar;");
    }

    #[test]
    fn test_apply_multiple_fixes_in_order() {
        let source = "aa bb cc";
        let fixes = vec![
            Fix::new(Span::new(6, 8), "C"),
            Fix::new(Span::new(0, 2), "A"),
        ];
        assert_eq!(apply_fixes(source, &fixes), "A bb C");
    }

    #[test]
    fn test_overlapping_fix_skipped() {
        let source = "abcdef";
        let fixes = vec![
            Fix::new(Span::new(0, 4), "X"),
            Fix::new(Span::new(2, 6), "Y"),
        ];
        assert_eq!(apply_fixes(source, &fixes), "Xef");
    }

    #[test]
    fn test_deletion() {
        let source = "import x from 'y';\nrest";
        let fixes = vec![Fix::delete(Span::new(0, 18))];
        assert_eq!(apply_fixes(source, &fixes), "\nrest");
    }
}
