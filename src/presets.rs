//! Rule presets
//!
//! A preset names a severity per rule and materializes into a
//! [`RulesConfig`] plus a severity pass over the produced diagnostics.
//! `recommended` keeps the two low-noise rules on; `strict` turns
//! everything on and promotes the import rules to errors.

use serde::{Deserialize, Serialize};

use import_style_linter::{
    Diagnostic, DiagnosticSeverity, PreferFunctionDeclaration, PreferImportAlias,
    PreferNamedImport, RuleMeta, RulesConfig,
};

/// Per-rule severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    #[default]
    Warn,
    Error,
}

/// A named bundle of rule severities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub prefer_named_import: Severity,
    pub prefer_function_declaration: Severity,
    pub prefer_import_alias: Severity,
}

impl Preset {
    /// Import hygiene with default options; the alias rule stays off since
    /// it needs project-level configuration to be useful
    pub fn recommended() -> Self {
        Self {
            prefer_named_import: Severity::Warn,
            prefer_function_declaration: Severity::Warn,
            prefer_import_alias: Severity::Off,
        }
    }

    /// Everything on, import rules as errors
    pub fn strict() -> Self {
        Self {
            prefer_named_import: Severity::Error,
            prefer_function_declaration: Severity::Warn,
            prefer_import_alias: Severity::Error,
        }
    }

    /// Build the rule set this preset enables
    pub fn rules_config(&self) -> RulesConfig {
        let mut config = RulesConfig::none();
        if self.prefer_named_import != Severity::Off {
            config = config.with_prefer_named_import(PreferNamedImport::new());
        }
        if self.prefer_function_declaration != Severity::Off {
            config = config.with_prefer_function_declaration(PreferFunctionDeclaration::new());
        }
        if self.prefer_import_alias != Severity::Off {
            config = config.with_prefer_import_alias(PreferImportAlias::new());
        }
        config
    }

    /// Re-level diagnostics according to this preset's severities
    pub fn apply_severities(&self, diagnostics: &mut [Diagnostic]) {
        for diagnostic in diagnostics {
            let severity = match diagnostic.rule.as_str() {
                r if r == PreferNamedImport::NAME => self.prefer_named_import,
                r if r == PreferFunctionDeclaration::NAME => self.prefer_function_declaration,
                r if r == PreferImportAlias::NAME => self.prefer_import_alias,
                _ => continue,
            };
            if severity == Severity::Error {
                diagnostic.severity = DiagnosticSeverity::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_disables_alias_rule() {
        let config = Preset::recommended().rules_config();
        assert!(config.prefer_named_import.is_some());
        assert!(config.prefer_function_declaration.is_some());
        assert!(config.prefer_import_alias.is_none());
    }

    #[test]
    fn test_strict_enables_all_rules() {
        let config = Preset::strict().rules_config();
        assert!(config.prefer_named_import.is_some());
        assert!(config.prefer_function_declaration.is_some());
        assert!(config.prefer_import_alias.is_some());
    }

    #[test]
    fn test_severity_deserialize() {
        let severity: Severity = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(severity, Severity::Error);
        let severity: Severity = serde_json::from_str(r#""off""#).unwrap();
        assert_eq!(severity, Severity::Off);
    }

    #[test]
    fn test_apply_severities_promotes_errors() {
        use crate::{lint_source, LintOptions};

        let preset = Preset::strict();
        let options = LintOptions::new().with_rules(preset.rules_config());
        let mut output = lint_source(
            r#"import utils from "./utils"; const x = utils.thing;"#,
            &options,
        );
        preset.apply_severities(&mut output.diagnostics);
        assert!(output
            .diagnostics
            .iter()
            .all(|d| d.severity == DiagnosticSeverity::Error));
    }
}
