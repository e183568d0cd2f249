//! Import-style lint rules
//!
//! This crate provides lint rules enforcing import and top-level function
//! conventions over an oxc AST. Rules can be used:
//! 1. Standalone with oxc AST for custom tooling
//! 2. Integrated with oxlint as a plugin (future)

pub mod alias;
pub mod fixer;
pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use fixer::{apply_fixes, collect_fixes};
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that suggest improvements
    Pedantic,
    /// Rules that encourage best practices
    Style,
    /// Rules that may have false positives (experimental)
    Nursery,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!(
            "https://github.com/import-style/import-style-oxc/blob/main/docs/{}.md",
            Self::NAME
        )
    }
}
