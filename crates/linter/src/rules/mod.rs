//! Import-style lint rules

pub mod prefer_function_declaration;
pub mod prefer_import_alias;
pub mod prefer_named_import;

pub use prefer_function_declaration::{PreferFunctionDeclaration, PreferFunctionDeclarationConfig};
pub use prefer_import_alias::{AliasDepth, AliasSession, PreferImportAlias, PreferImportAliasConfig};
pub use prefer_named_import::{ImportUsage, PreferNamedImport, PreferNamedImportConfig};
