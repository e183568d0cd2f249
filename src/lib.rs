//! Import Style OXC
//!
//! OXC-based lint rules for import and top-level declaration style.
//! This crate bundles parsing, semantic analysis and the rules from
//! `import-style-linter` behind a single entry point.
//!
//! ## Usage
//!
//! ```rust
//! use import_style_oxc::{lint_source, LintOptions};
//!
//! let source = r#"import utils from "./utils"; utils.format();"#;
//! let output = lint_source(source, &LintOptions::default());
//! for diagnostic in &output.diagnostics {
//!     println!("{}: {}", diagnostic.rule, diagnostic.message);
//! }
//! ```

pub mod presets;

pub use import_style_linter::{
    apply_fixes, collect_fixes, Diagnostic, DiagnosticSeverity, Fix, LintContext, LintResult,
    LintRunner, RulesConfig,
};
pub use presets::{Preset, Severity};

use std::path::PathBuf;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;

/// Options for a single lint invocation
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Absolute path of the file being linted; drives source-type detection
    /// and the prefer-import-alias rule
    pub file_path: Option<PathBuf>,
    /// Project root for alias-config discovery; without it the
    /// prefer-import-alias rule stays silent
    pub project_root: Option<PathBuf>,
    pub rules: RulesConfig,
}

impl LintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }
}

/// Result of linting one source file
#[derive(Debug)]
pub struct LintOutput {
    pub diagnostics: Vec<Diagnostic>,
    /// Parse errors, rendered as strings. Rules still run on the partial
    /// AST the parser recovered.
    pub parse_errors: Vec<String>,
}

impl LintOutput {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.parse_errors.is_empty()
    }
}

/// Parse and lint a single source file
pub fn lint_source(source: &str, options: &LintOptions) -> LintOutput {
    let allocator = Allocator::default();
    let source_type = options
        .file_path
        .as_deref()
        .and_then(|path| SourceType::from_path(path).ok())
        .unwrap_or_else(SourceType::tsx);

    let ret = Parser::new(&allocator, source, source_type).parse();
    let parse_errors = ret.errors.iter().map(|e| e.to_string()).collect();

    let semantic_ret = SemanticBuilder::new().build(&ret.program);

    let mut ctx =
        LintContext::new(source, source_type).with_semantic(&semantic_ret.semantic);
    if let Some(path) = options.file_path.as_deref() {
        ctx = ctx.with_file_path(path);
    }
    if let Some(root) = options.project_root.as_deref() {
        ctx = ctx.with_project_root(root);
    }

    let result = LintRunner::new(ctx, options.rules.clone()).run(&ret.program);

    LintOutput {
        diagnostics: result.diagnostics,
        parse_errors,
    }
}

/// Parse, lint and apply every non-overlapping fix, returning the rewritten
/// source along with the diagnostics that produced it
pub fn lint_and_fix(source: &str, options: &LintOptions) -> (LintOutput, String) {
    let output = lint_source(source, options);
    let fixed = apply_fixes(source, &collect_fixes(&output.diagnostics));
    (output, fixed)
}
