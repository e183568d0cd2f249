//! import-style/prefer-import-alias
//!
//! Require that deep relative imports use a configured short alias. The
//! alias table comes from the rule options, a TypeScript project config, or
//! a bundler config scan (see [`crate::alias`]); when no table can be found
//! the rule is a no-op for the file. Static imports, `import()` expressions
//! and `require()` calls are all checked the same way.

use std::collections::BTreeMap;
use std::path::PathBuf;

use oxc_ast::ast::{
    CallExpression, Expression, ImportDeclaration, ImportExpression, StringLiteral,
};
use oxc_span::Span;
use serde::{Deserialize, Serialize};

use crate::alias::{normalize_path, AliasResolution, AliasSources};
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{is_relative_specifier, sole_string_argument};
use crate::{RuleCategory, RuleMeta};

/// How far below the base directory an import must reach to be flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasDepth {
    /// Only imports into an immediate child folder of the base directory.
    /// Deeper imports stay untouched to avoid over-aggressive suggestions
    /// for same-subtree siblings.
    DirectChildren,
    /// Any import resolving under the base directory
    #[default]
    All,
}

/// Configuration for prefer-import-alias
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferImportAliasConfig {
    /// Explicit alias mapping; skips config-file auto-detection
    #[serde(default)]
    pub paths: Option<BTreeMap<String, Vec<String>>>,
    /// Base directory for depth checks, relative to the project root
    #[serde(default)]
    pub base_dir: Option<String>,
    #[serde(default)]
    pub depth: AliasDepth,
    /// Folders whose imports are never flagged, relative to the project root
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    /// Project config file name, defaults to `tsconfig.json`
    #[serde(default)]
    pub config_file: Option<String>,
}

/// prefer-import-alias rule
#[derive(Debug, Clone, Default)]
pub struct PreferImportAlias {
    pub config: PreferImportAliasConfig,
}

impl RuleMeta for PreferImportAlias {
    const NAME: &'static str = "prefer-import-alias";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl PreferImportAlias {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreferImportAliasConfig) -> Self {
        Self { config }
    }

    /// Build the per-file session before traversal. Returns `None` when the
    /// host did not provide the file path and project root the resolver
    /// needs.
    pub fn session(&self, ctx: &LintContext<'_>) -> Option<AliasSession> {
        let project_root = ctx.project_root()?;
        let file_dir = ctx.file_path()?.parent()?.to_path_buf();
        let resolution = AliasResolution::resolve(
            project_root,
            AliasSources {
                explicit_paths: self.config.paths.as_ref(),
                base_dir: self.config.base_dir.as_deref(),
                excluded_folders: &self.config.excluded_folders,
                config_file: self.config.config_file.as_deref(),
            },
        );
        Some(AliasSession {
            resolution,
            file_dir,
            depth: self.config.depth,
        })
    }
}

/// Per-file alias checking state: the resolved patterns plus the importing
/// file's directory. Immutable for the duration of the traversal.
#[derive(Debug, Clone)]
pub struct AliasSession {
    resolution: AliasResolution,
    file_dir: PathBuf,
    depth: AliasDepth,
}

impl AliasSession {
    pub fn check_import(&self, import: &ImportDeclaration<'_>) -> Option<Diagnostic> {
        self.check_specifier(&import.source)
    }

    pub fn check_dynamic_import(&self, import: &ImportExpression<'_>) -> Option<Diagnostic> {
        match &import.source {
            Expression::StringLiteral(literal) => self.check_specifier(literal),
            _ => None,
        }
    }

    pub fn check_call(&self, call: &CallExpression<'_>) -> Option<Diagnostic> {
        let Expression::Identifier(callee) = &call.callee else {
            return None;
        };
        if callee.name != "require" {
            return None;
        }
        let literal = sole_string_argument(call)?;
        self.check_specifier(literal)
    }

    /// Core check shared by static imports, `import()` and `require()`
    pub fn check_specifier(&self, literal: &StringLiteral<'_>) -> Option<Diagnostic> {
        if self.resolution.is_empty() {
            return None;
        }
        let specifier = literal.value.as_str();
        if !is_relative_specifier(specifier) {
            return None;
        }

        let resolved = normalize_path(&self.file_dir.join(specifier));
        if self.resolution.is_excluded(&resolved) {
            return None;
        }

        let depth = self.resolution.depth_below_base(&resolved)?;
        if self.depth == AliasDepth::DirectChildren && depth != 2 {
            return None;
        }

        let suggestion = self.resolution.suggest(&resolved)?;

        // Replace only the literal's content, keeping the quotes as written
        let content = Span::new(literal.span.start + 1, literal.span.end - 1);
        Some(
            Diagnostic::warning(
                PreferImportAlias::NAME,
                literal.span,
                format!(
                    "Import path \"{}\" can use the \"{}\" alias.",
                    specifier, suggestion
                ),
            )
            .with_help(format!("Replace it with \"{}\".", suggestion))
            .with_fix(Fix::new(content, suggestion).with_message("Use the path alias")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(PreferImportAlias::NAME, "prefer-import-alias");
    }

    #[test]
    fn test_config_defaults() {
        let config = PreferImportAliasConfig::default();
        assert!(config.paths.is_none());
        assert!(config.base_dir.is_none());
        assert_eq!(config.depth, AliasDepth::All);
        assert!(config.excluded_folders.is_empty());
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{
            "paths": { "@/*": ["./src/*"] },
            "baseDir": "./src",
            "depth": "direct-children",
            "excludedFolders": ["src/legacy"]
        }"#;
        let config: PreferImportAliasConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.depth, AliasDepth::DirectChildren);
        assert_eq!(config.base_dir.as_deref(), Some("./src"));
        assert_eq!(
            config.paths.unwrap().get("@/*"),
            Some(&vec!["./src/*".to_string()])
        );
        assert_eq!(config.excluded_folders, vec!["src/legacy"]);
    }
}
