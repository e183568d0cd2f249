//! import-style/prefer-function-declaration
//!
//! Require that top-level bindings holding function values use a named
//! function declaration instead of an anonymous function expression. UI
//! components (PascalCase bindings) are always flagged; other bindings only
//! when `allowArrowFunctions` is false. Initializers wrapped in a
//! higher-order call (e.g. `memo(() => ...)`) are exempt.
//!
//! Message-only: rewriting an arrow body into a declaration form cannot be
//! done safely as a textual fix because of expression-statement boundaries.

use oxc_ast::ast::{
    BindingPattern, Declaration, Expression, Statement, VariableDeclaration,
};
use serde::{Deserialize, Serialize};

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::utils::{
    arrow_returns_jsx, body_returns_jsx, first_argument_is_function, is_pascal_case,
};
use crate::{RuleCategory, RuleMeta};

/// Configuration for prefer-function-declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferFunctionDeclarationConfig {
    /// Permit non-component bindings to hold arrow functions
    #[serde(default)]
    pub allow_arrow_functions: bool,
}

/// prefer-function-declaration rule
#[derive(Debug, Clone, Default)]
pub struct PreferFunctionDeclaration {
    pub config: PreferFunctionDeclarationConfig,
}

impl RuleMeta for PreferFunctionDeclaration {
    const NAME: &'static str = "prefer-function-declaration";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl PreferFunctionDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreferFunctionDeclarationConfig) -> Self {
        Self { config }
    }

    /// Check one top-level statement. Nested declarations never reach this
    /// rule; the runner only feeds it program-body statements.
    pub fn check_statement<'a>(
        &self,
        stmt: &Statement<'a>,
        ctx: &LintContext<'a>,
    ) -> Vec<Diagnostic> {
        match stmt {
            Statement::VariableDeclaration(decl) => self.check_declaration(decl, ctx),
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::VariableDeclaration(decl)) => self.check_declaration(decl, ctx),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn check_declaration<'a>(
        &self,
        decl: &VariableDeclaration<'a>,
        ctx: &LintContext<'a>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for declarator in &decl.declarations {
            let BindingPattern::BindingIdentifier(ident) = &declarator.id else {
                continue;
            };
            let Some(init) = &declarator.init else {
                continue;
            };

            // Higher-order wrapping is exempt outright, component or not
            if let Expression::CallExpression(call) = init {
                if first_argument_is_function(call) {
                    continue;
                }
            }

            let is_function_value = match init {
                Expression::ArrowFunctionExpression(_) => true,
                Expression::FunctionExpression(func) => func.id.is_none(),
                _ => false,
            };
            if !is_function_value {
                continue;
            }

            let name = ident.name.as_str();

            if is_pascal_case(name) {
                let renders_jsx = ctx.is_jsx()
                    && match init {
                        Expression::ArrowFunctionExpression(arrow) => arrow_returns_jsx(arrow),
                        Expression::FunctionExpression(func) => {
                            func.body.as_ref().is_some_and(|body| body_returns_jsx(body))
                        }
                        _ => false,
                    };
                diagnostics.push(
                    Diagnostic::warning(
                        Self::NAME,
                        declarator.span,
                        component_message(name, ctx.is_typescript(), renders_jsx),
                    )
                    .with_help(format!("Declare it as `function {}() {{ ... }}`.", name)),
                );
                continue;
            }

            if !self.config.allow_arrow_functions {
                let message = if ctx.is_typescript() {
                    format!(
                        "Top-level binding `{}` holds a function value. Use a function declaration and type the signature on the declaration itself.",
                        name
                    )
                } else {
                    format!(
                        "Top-level binding `{}` holds a function value. Use a function declaration.",
                        name
                    )
                };
                diagnostics.push(
                    Diagnostic::warning(Self::NAME, declarator.span, message)
                        .with_help(format!("Declare it as `function {}() {{ ... }}`.", name)),
                );
            }
        }

        diagnostics
    }
}

fn component_message(name: &str, typescript: bool, renders_jsx: bool) -> String {
    match (typescript, renders_jsx) {
        (true, true) => format!(
            "Component `{}` renders JSX. Declare it as `function {}(props): JSX.Element` instead of an arrow function.",
            name, name
        ),
        (true, false) => format!(
            "Component `{}` should be a typed function declaration, not an arrow function bound to a variable.",
            name
        ),
        (false, _) => format!(
            "Component `{}` should be a function declaration, not an arrow function bound to a variable.",
            name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(PreferFunctionDeclaration::NAME, "prefer-function-declaration");
    }

    #[test]
    fn test_config_defaults() {
        let config = PreferFunctionDeclarationConfig::default();
        assert!(!config.allow_arrow_functions);
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{"allowArrowFunctions": true}"#;
        let config: PreferFunctionDeclarationConfig = serde_json::from_str(json).unwrap();
        assert!(config.allow_arrow_functions);
    }
}
