//! Lint context for rule execution

use std::path::Path;

use oxc_semantic::Semantic;
use oxc_span::SourceType;

/// Context passed to rules during linting
///
/// Everything here is host-provided and read-only: the source text and type,
/// the path of the file under analysis, the project root used for alias
/// resolution, and (optionally) semantic analysis for scope-aware checks.
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Path of the file being linted, if known
    file_path: Option<&'a Path>,
    /// Project root / working directory, if known
    project_root: Option<&'a Path>,
    /// Semantic analysis (scopes, symbols, etc.)
    semantic: Option<&'a Semantic<'a>>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            file_path: None,
            project_root: None,
            semantic: None,
        }
    }

    pub fn with_file_path(mut self, file_path: &'a Path) -> Self {
        self.file_path = Some(file_path);
        self
    }

    pub fn with_project_root(mut self, project_root: &'a Path) -> Self {
        self.project_root = Some(project_root);
        self
    }

    pub fn with_semantic(mut self, semantic: &'a Semantic<'a>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Check if the source is JSX
    pub fn is_jsx(&self) -> bool {
        self.source_type.is_jsx()
    }

    /// Check if the source is TypeScript
    pub fn is_typescript(&self) -> bool {
        self.source_type.is_typescript()
    }

    /// Path of the file being linted, if the host supplied one
    pub fn file_path(&self) -> Option<&'a Path> {
        self.file_path
    }

    /// Project root, if the host supplied one
    pub fn project_root(&self) -> Option<&'a Path> {
        self.project_root
    }

    /// Get semantic analysis if available
    pub fn semantic(&self) -> Option<&'a Semantic<'a>> {
        self.semantic
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: oxc_span::Span) -> &'a str {
        &self.source_text[span.start as usize..span.end as usize]
    }
}
