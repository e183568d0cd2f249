//! import-style/prefer-named-import
//!
//! Flag default imports whose binding is used as a namespace, i.e. named
//! exports accessed as properties of the default binding. Each access site
//! gets an inline diagnostic with a fix to the bare property name; at the
//! end of traversal the import declaration itself gets a summary diagnostic
//! with a fix rewriting it into named-import form.

use std::collections::BTreeSet;

use indexmap::{IndexMap, IndexSet};
use oxc_ast::ast::{
    Expression, ImportDeclaration, ImportDeclarationSpecifier, StaticMemberExpression,
};
use oxc_span::Span;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// How many accessed names the summary message lists before eliding
const SUMMARY_NAME_LIMIT: usize = 3;

/// Configuration for prefer-named-import
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferNamedImportConfig {
    /// Modules exempt from checking
    #[serde(default)]
    pub allowed_libraries: Vec<String>,
    /// When non-empty, restricts checking to exactly these modules
    #[serde(default)]
    pub target_libraries: Vec<String>,
    /// Whether type-only imports are also checked
    #[serde(default)]
    pub check_type_script_types: bool,
    /// Exempt type-only imports from reporting even when they are checked
    #[serde(default)]
    pub allow_type_namespaces: bool,
}

/// prefer-named-import rule
#[derive(Debug, Clone, Default)]
pub struct PreferNamedImport {
    pub config: PreferNamedImportConfig,
}

impl RuleMeta for PreferNamedImport {
    const NAME: &'static str = "prefer-named-import";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

/// One tracked default-style import
#[derive(Debug, Clone)]
struct ImportRecord {
    /// Source literal exactly as written, quotes included
    source_raw: String,
    type_only: bool,
    /// False when `allowTypeNamespaces` exempts this record from reporting
    reportable: bool,
    decl_span: Span,
    /// Pre-existing named specifiers, rendered as written
    existing_named: Vec<String>,
    /// Used as a namespace at least once
    namespace_used: bool,
    /// Distinct property names seen, in encounter order
    accessed: FxIndexSet<String>,
}

/// Per-file evidence, keyed by the default binding's local name
///
/// Owned by one lint run and discarded with it; never shared across files.
#[derive(Debug, Default)]
pub struct ImportUsage {
    records: FxIndexMap<String, ImportRecord>,
}

impl PreferNamedImport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreferNamedImportConfig) -> Self {
        Self { config }
    }

    fn module_in_scope(&self, source: &str) -> bool {
        if self.config.allowed_libraries.iter().any(|lib| lib == source) {
            return false;
        }
        if !self.config.target_libraries.is_empty()
            && !self.config.target_libraries.iter().any(|lib| lib == source)
        {
            return false;
        }
        true
    }

    /// Record a default-style import for later matching. Imports with no
    /// default binding never produce a record.
    pub fn collect_import<'a>(
        &self,
        import: &ImportDeclaration<'a>,
        ctx: &LintContext<'a>,
        usage: &mut ImportUsage,
    ) {
        let source = import.source.value.as_str();
        if !self.module_in_scope(source) {
            return;
        }

        let type_only = import.import_kind.is_type();
        if type_only && !self.config.check_type_script_types {
            return;
        }
        let reportable = !(type_only && self.config.allow_type_namespaces);

        let Some(specifiers) = &import.specifiers else {
            return;
        };
        let mut default_local = None;
        let mut existing_named = Vec::new();
        for specifier in specifiers {
            match specifier {
                ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
                    default_local = Some(default.local.name.to_string());
                }
                ImportDeclarationSpecifier::ImportSpecifier(named) => {
                    existing_named.push(ctx.span_text(named.span).to_string());
                }
                // `import * as ns` is already an explicit namespace form, and
                // the summary rewrite cannot carry the `ns` binding. Leave the
                // whole declaration alone.
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => return,
            }
        }
        let Some(local) = default_local else {
            return;
        };

        usage.records.insert(
            local,
            ImportRecord {
                source_raw: ctx.span_text(import.source.span).to_string(),
                type_only,
                reportable,
                decl_span: import.span,
                existing_named,
                namespace_used: false,
                accessed: FxIndexSet::default(),
            },
        );
    }

    /// Check a static member access against the recorded bindings, emitting
    /// an inline diagnostic per qualifying access site. Inline diagnostics
    /// are intentionally not deduplicated.
    pub fn check_member_access<'a>(
        &self,
        member: &StaticMemberExpression<'a>,
        ctx: &LintContext<'a>,
        usage: &mut ImportUsage,
    ) -> Vec<Diagnostic> {
        let Expression::Identifier(object) = &member.object else {
            return Vec::new();
        };
        let name = object.name.as_str();

        // With semantic analysis available, resolve the reference in its own
        // scope; a name bound locally (e.g. a shadowing parameter) is not the
        // tracked import even when an import of the same name exists.
        if let Some(semantic) = ctx.semantic() {
            let scoping = semantic.scoping();
            if let Some(reference_id) = object.reference_id.get() {
                match scoping.get_reference(reference_id).symbol_id() {
                    Some(symbol_id) => {
                        if scoping.symbol_scope_id(symbol_id) != scoping.root_scope_id() {
                            return Vec::new();
                        }
                    }
                    // Unresolved references are globals, never imports
                    None => return Vec::new(),
                }
            }
        }

        let Some(record) = usage.records.get_mut(name) else {
            return Vec::new();
        };

        let property = member.property.name.to_string();
        record.namespace_used = true;
        record.accessed.insert(property.clone());

        if !record.reportable {
            return Vec::new();
        }

        let message = if record.type_only {
            format!(
                "`{}.{}` reaches the type `{}` through the default import of {}. Import the type directly.",
                name, property, property, record.source_raw
            )
        } else {
            format!(
                "`{}.{}` reaches `{}` through the default import of {}. Import it directly.",
                name, property, property, record.source_raw
            )
        };

        vec![Diagnostic::warning(Self::NAME, member.span, message).with_fix(
            Fix::new(member.span, property).with_message("Use the bare property name"),
        )]
    }

    /// Emit one summary diagnostic per namespace-used record, anchored at
    /// the import declaration, with a fix rewriting it to named-import form.
    pub fn finish(&self, usage: &ImportUsage) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (local, record) in &usage.records {
            if !record.namespace_used || !record.reportable {
                continue;
            }

            let mut listed = record
                .accessed
                .iter()
                .take(SUMMARY_NAME_LIMIT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if record.accessed.len() > SUMMARY_NAME_LIMIT {
                listed.push_str(", ...");
            }

            // Union of pre-existing named imports and observed accesses,
            // sorted for a deterministic rewrite
            let mut names: BTreeSet<String> = record.existing_named.iter().cloned().collect();
            names.extend(record.accessed.iter().cloned());

            let fix = if names.is_empty() {
                Fix::delete(record.decl_span).with_message("Remove the import")
            } else {
                let keyword = if record.type_only {
                    "import type"
                } else {
                    "import"
                };
                let joined = names.into_iter().collect::<Vec<_>>().join(", ");
                Fix::new(
                    record.decl_span,
                    format!("{} {{ {} }} from {};", keyword, joined, record.source_raw),
                )
                .with_message("Rewrite as a named import")
            };

            diagnostics.push(
                Diagnostic::warning(
                    Self::NAME,
                    record.decl_span,
                    format!(
                        "Default import `{}` of {} is used as a namespace (accessing {}).",
                        local, record.source_raw, listed
                    ),
                )
                .with_help("Import the named exports directly instead.")
                .with_fix(fix),
            );
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(PreferNamedImport::NAME, "prefer-named-import");
    }

    #[test]
    fn test_config_defaults() {
        let config = PreferNamedImportConfig::default();
        assert!(config.allowed_libraries.is_empty());
        assert!(config.target_libraries.is_empty());
        assert!(!config.check_type_script_types);
        assert!(!config.allow_type_namespaces);
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{
            "allowedLibraries": ["react"],
            "targetLibraries": ["lodash"],
            "checkTypeScriptTypes": true,
            "allowTypeNamespaces": true
        }"#;
        let config: PreferNamedImportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.allowed_libraries, vec!["react"]);
        assert_eq!(config.target_libraries, vec!["lodash"]);
        assert!(config.check_type_script_types);
        assert!(config.allow_type_namespaces);
    }

    #[test]
    fn test_module_scope_precedence() {
        // Allow-listing wins even when the module is also targeted
        let rule = PreferNamedImport::with_config(PreferNamedImportConfig {
            allowed_libraries: vec!["react".to_string()],
            target_libraries: vec!["react".to_string()],
            ..PreferNamedImportConfig::default()
        });
        assert!(!rule.module_in_scope("react"));

        // Empty target list means every non-allowed module is in scope
        let rule = PreferNamedImport::with_config(PreferNamedImportConfig {
            allowed_libraries: vec!["react".to_string()],
            ..PreferNamedImportConfig::default()
        });
        assert!(rule.module_in_scope("lodash"));
        assert!(!rule.module_in_scope("react"));

        // Non-empty target list excludes everything else
        let rule = PreferNamedImport::with_config(PreferNamedImportConfig {
            target_libraries: vec!["lodash".to_string()],
            ..PreferNamedImportConfig::default()
        });
        assert!(rule.module_in_scope("lodash"));
        assert!(!rule.module_in_scope("underscore"));
    }
}
