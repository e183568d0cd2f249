//! Unified visitor for running all rules in a single AST pass
//!
//! The `LintRunner` traverses the AST once in pre-order, dispatching node
//! callbacks to the enabled rules, then finalizes the cross-node evidence
//! gathered along the way into deferred summary diagnostics. A runner is
//! built fresh per file; no rule state survives it.

use oxc_ast::ast::{
    CallExpression, ImportDeclaration, ImportExpression, Program, StaticMemberExpression,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::rules::{
    AliasSession, ImportUsage, PreferFunctionDeclaration, PreferImportAlias, PreferNamedImport,
};

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub prefer_named_import: Option<PreferNamedImport>,
    pub prefer_function_declaration: Option<PreferFunctionDeclaration>,
    pub prefer_import_alias: Option<PreferImportAlias>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            prefer_named_import: Some(PreferNamedImport::new()),
            prefer_function_declaration: Some(PreferFunctionDeclaration::new()),
            prefer_import_alias: Some(PreferImportAlias::new()),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            prefer_named_import: None,
            prefer_function_declaration: None,
            prefer_import_alias: None,
        }
    }

    pub fn with_prefer_named_import(mut self, rule: PreferNamedImport) -> Self {
        self.prefer_named_import = Some(rule);
        self
    }

    pub fn with_prefer_function_declaration(mut self, rule: PreferFunctionDeclaration) -> Self {
        self.prefer_function_declaration = Some(rule);
        self
    }

    pub fn with_prefer_import_alias(mut self, rule: PreferImportAlias) -> Self {
        self.prefer_import_alias = Some(rule);
        self
    }
}

/// Runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    diagnostics: Vec<Diagnostic>,
    /// Cross-node evidence for prefer-named-import, fresh per run
    import_usage: ImportUsage,
    /// Alias table for prefer-import-alias, resolved before traversal and
    /// immutable afterwards
    alias_session: Option<AliasSession>,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        let alias_session = config
            .prefer_import_alias
            .as_ref()
            .and_then(|rule| rule.session(&ctx));
        Self {
            ctx,
            config,
            diagnostics: Vec::new(),
            import_usage: ImportUsage::default(),
            alias_session,
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        // prefer-function-declaration only judges top-level statements
        if let Some(rule) = &self.config.prefer_function_declaration {
            for stmt in &program.body {
                let diagnostics = rule.check_statement(stmt, &self.ctx);
                self.diagnostics.extend(diagnostics);
            }
        }

        self.visit_program(program);

        // Deferred judgment once traversal is complete
        if let Some(rule) = &self.config.prefer_named_import {
            let diagnostics = rule.finish(&self.import_usage);
            self.diagnostics.extend(diagnostics);
        }

        LintResult {
            diagnostics: self.diagnostics,
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_import_declaration(&mut self, import: &ImportDeclaration<'a>) {
        if let Some(rule) = &self.config.prefer_named_import {
            rule.collect_import(import, &self.ctx, &mut self.import_usage);
        }
        if let Some(session) = &self.alias_session {
            if let Some(diagnostic) = session.check_import(import) {
                self.diagnostics.push(diagnostic);
            }
        }
        walk::walk_import_declaration(self, import);
    }

    fn visit_static_member_expression(&mut self, member: &StaticMemberExpression<'a>) {
        if let Some(rule) = &self.config.prefer_named_import {
            let diagnostics = rule.check_member_access(member, &self.ctx, &mut self.import_usage);
            self.diagnostics.extend(diagnostics);
        }
        walk::walk_static_member_expression(self, member);
    }

    fn visit_import_expression(&mut self, import: &ImportExpression<'a>) {
        if let Some(session) = &self.alias_session {
            if let Some(diagnostic) = session.check_dynamic_import(import) {
                self.diagnostics.push(diagnostic);
            }
        }
        walk::walk_import_expression(self, import);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Some(session) = &self.alias_session {
            if let Some(diagnostic) = session.check_call(call) {
                self.diagnostics.push(diagnostic);
            }
        }
        walk::walk_call_expression(self, call);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
) -> LintResult {
    lint_with_config(source_text, source_type, program, RulesConfig::default())
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}
