//! Alias-pattern resolution for the prefer-import-alias rule
//!
//! The alias table comes from one of three sources, tried in order: an
//! explicit `paths` mapping in the rule options, a TypeScript project config
//! (including recursively referenced sub-projects), or a best-effort textual
//! scan of a bundler config. Every read failure along the chain collapses
//! silently to "no mapping found at this source" and the next source is
//! tried; with no mapping at all the rule is a no-op for the file.
//!
//! The bundler scan is regex-based by design. The config's own language is
//! out of scope for this engine, so the scan only recognizes the common
//! `alias: { ... }` idioms (literal relative paths and
//! `path.resolve(__dirname, "...")` forms) and ignores everything else. It
//! sits behind the same fallible interface as the JSON path, so a real
//! parser can replace it without touching rule logic.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use regex::Regex;
use serde_json::Value;

/// Bundler config file names, tried in order
const BUNDLER_CONFIG_FILES: &[&str] = &[
    "webpack.config.js",
    "webpack.config.ts",
    "webpack.config.mjs",
    "webpack.config.cjs",
];

/// Conventional source directories probed when no base directory is configured
const BASE_DIR_CANDIDATES: &[&str] = &["src", "lib", "app"];

/// Fallback base directory when probing finds nothing
const DEFAULT_BASE_DIR: &str = "src";

/// Cap on transitive project references, guards against reference cycles
const MAX_REFERENCE_DEPTH: usize = 8;

/// How an alias pattern matches a resolved import target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMatch {
    /// Target had a trailing wildcard; the pattern covers the whole subtree
    Prefix,
    /// Target named a single module; only an identical path matches
    Exact,
}

/// One configured alias, immutable once constructed
#[derive(Debug, Clone)]
pub struct AliasPattern {
    /// Alias prefix with its `/*` suffix stripped, e.g. `@`
    pub alias: String,
    /// Resolved absolute target directory (or module, for exact matches)
    pub target: PathBuf,
    pub matcher: AliasMatch,
}

/// Inputs to alias resolution, borrowed from the rule configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasSources<'a> {
    /// Explicit alias mapping; skips config-file detection entirely
    pub explicit_paths: Option<&'a BTreeMap<String, Vec<String>>>,
    /// Explicit base directory, relative to the project root
    pub base_dir: Option<&'a str>,
    /// Folders (relative to the project root) whose imports are never flagged
    pub excluded_folders: &'a [String],
    /// Project config file name, defaults to `tsconfig.json`
    pub config_file: Option<&'a str>,
}

/// The alias table for one file-analysis session
///
/// Computed once before traversal; immutable afterwards. Recomputed per file
/// so that config edits mid-run are picked up.
#[derive(Debug, Clone)]
pub struct AliasResolution {
    pub patterns: Vec<AliasPattern>,
    pub base_dir: PathBuf,
    excluded: Vec<PathBuf>,
}

impl AliasResolution {
    pub fn resolve(project_root: &Path, sources: AliasSources<'_>) -> Self {
        let mut base_url: Option<String> = None;
        let mut mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();

        if let Some(paths) = sources.explicit_paths {
            mapping = paths.clone();
        } else {
            let config_name = sources.config_file.unwrap_or("tsconfig.json");
            read_project_config(
                &project_root.join(config_name),
                &mut mapping,
                &mut base_url,
                0,
            );

            if mapping.is_empty() {
                for name in BUNDLER_CONFIG_FILES {
                    if let Ok(text) = fs::read_to_string(project_root.join(name)) {
                        mapping = scan_bundler_config(&text);
                        if !mapping.is_empty() {
                            break;
                        }
                    }
                }
            }
        }

        // tsconfig path targets resolve relative to baseUrl; explicit and
        // bundler-derived targets resolve relative to the project root.
        let target_root = match base_url.as_deref() {
            Some(url) => normalize_path(&project_root.join(url)),
            None => project_root.to_path_buf(),
        };

        let base_dir = detect_base_dir(project_root, sources.base_dir, base_url.as_deref());

        let mut patterns = Vec::with_capacity(mapping.len());
        for (alias, targets) in &mapping {
            let Some(target) = targets.first() else {
                continue;
            };
            let alias_prefix = alias.strip_suffix("/*").unwrap_or(alias);
            let (stripped, matcher) = match target.strip_suffix("/*") {
                Some(dir) => (dir, AliasMatch::Prefix),
                None => (target.as_str(), AliasMatch::Exact),
            };
            patterns.push(AliasPattern {
                alias: alias_prefix.to_string(),
                target: normalize_path(&target_root.join(stripped)),
                matcher,
            });
        }

        let excluded = sources
            .excluded_folders
            .iter()
            .map(|folder| normalize_path(&project_root.join(folder)))
            .collect();

        Self {
            patterns,
            base_dir,
            excluded,
        }
    }

    /// An empty resolution; the rule becomes a no-op
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether a resolved import target falls under an excluded folder
    pub fn is_excluded(&self, resolved: &Path) -> bool {
        self.excluded.iter().any(|e| resolved.starts_with(e))
    }

    /// Number of path components of the resolved target below the base
    /// directory, or `None` when the target is outside the base
    pub fn depth_below_base(&self, resolved: &Path) -> Option<usize> {
        let rest = resolved.strip_prefix(&self.base_dir).ok()?;
        Some(rest.components().count())
    }

    /// Find the aliased form of a resolved import target, if any pattern
    /// covers it
    pub fn suggest(&self, resolved: &Path) -> Option<String> {
        for pattern in &self.patterns {
            match pattern.matcher {
                AliasMatch::Exact => {
                    if resolved == pattern.target {
                        return Some(pattern.alias.clone());
                    }
                }
                AliasMatch::Prefix => {
                    if let Ok(rest) = resolved.strip_prefix(&pattern.target) {
                        if rest.as_os_str().is_empty() {
                            return Some(pattern.alias.clone());
                        }
                        return Some(format!("{}/{}", pattern.alias, forward_slashes(rest)));
                    }
                }
            }
        }
        None
    }
}

/// Lexically normalize a path: resolve `.` and `..` segments without
/// touching the file system (imports usually point at files that only exist
/// with an extension appended)
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render a relative path with forward slashes regardless of platform
fn forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read a TypeScript-style project config, merging `compilerOptions.paths`
/// from the config itself and, recursively, from its `references`.
/// First writer wins per alias key; all errors are swallowed.
fn read_project_config(
    path: &Path,
    mapping: &mut BTreeMap<String, Vec<String>>,
    base_url: &mut Option<String>,
    depth: usize,
) {
    if depth > MAX_REFERENCE_DEPTH {
        return;
    }
    let Ok(text) = fs::read_to_string(path) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<Value>(&strip_jsonc_comments(&text)) else {
        return;
    };

    if let Some(opts) = value.get("compilerOptions") {
        if base_url.is_none() {
            if let Some(url) = opts.get("baseUrl").and_then(Value::as_str) {
                *base_url = Some(url.to_string());
            }
        }
        if let Some(paths) = opts.get("paths").and_then(Value::as_object) {
            for (alias, targets) in paths {
                if mapping.contains_key(alias) {
                    continue;
                }
                let targets: Vec<String> = targets
                    .as_array()
                    .map(|arr| {
                        arr.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                if !targets.is_empty() {
                    mapping.insert(alias.clone(), targets);
                }
            }
        }
    }

    if let Some(references) = value.get("references").and_then(Value::as_array) {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        for reference in references {
            let Some(ref_path) = reference.get("path").and_then(Value::as_str) else {
                continue;
            };
            let mut target = dir.join(ref_path);
            if target.is_dir() {
                target = target.join("tsconfig.json");
            }
            read_project_config(&target, mapping, base_url, depth + 1);
        }
    }
}

/// Strip `//` and `/* */` comments so tsconfig files with comments still
/// parse as JSON. String contents are left untouched.
fn strip_jsonc_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                    out.push(' ');
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Extract an alias table from bundler config text
///
/// Matches `alias: { ... }` blocks whose entries are either literal string
/// paths or `path.resolve(__dirname, "...")` / `path.join(__dirname, "...")`
/// calls. Entries are normalized to the wildcard form used by tsconfig paths
/// since bundler aliases are directory prefixes; a trailing `$` on the key
/// (webpack's exact-match marker) is dropped.
pub fn scan_bundler_config(text: &str) -> BTreeMap<String, Vec<String>> {
    let mut mapping = BTreeMap::new();
    let Ok(block_re) = Regex::new(r"(?s)alias\s*:\s*\{(.*?)\}") else {
        return mapping;
    };
    let Some(block) = block_re.captures(text).and_then(|c| c.get(1)) else {
        return mapping;
    };
    let Ok(entry_re) = Regex::new(
        r#"['"]?([@~\w$./-]+)['"]?\s*:\s*(?:['"]([^'"]+)['"]|path\.(?:resolve|join)\(\s*__dirname\s*,\s*['"]([^'"]+)['"]\s*\))"#,
    ) else {
        return mapping;
    };

    for caps in entry_re.captures_iter(block.as_str()) {
        let Some(key) = caps.get(1) else {
            continue;
        };
        let Some(value) = caps.get(2).or_else(|| caps.get(3)) else {
            continue;
        };
        let alias = format!("{}/*", key.as_str().trim_end_matches('$'));
        let target = format!("{}/*", value.as_str().trim_end_matches('/'));
        mapping.entry(alias).or_insert_with(|| vec![target]);
    }
    mapping
}

/// Pick the base directory for depth checks: explicit option, then a
/// meaningful tsconfig `baseUrl`, then the first conventional directory
/// containing source files, then the `src` fallback
fn detect_base_dir(project_root: &Path, explicit: Option<&str>, base_url: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit {
        return normalize_path(&project_root.join(dir));
    }
    if let Some(url) = base_url {
        if !url.is_empty() && url != "." && url != "./" {
            return normalize_path(&project_root.join(url));
        }
    }
    for name in BASE_DIR_CANDIDATES {
        let dir = project_root.join(name);
        if dir_has_source_files(&dir) {
            return dir;
        }
    }
    project_root.join(DEFAULT_BASE_DIR)
}

/// Check whether a directory directly contains at least one source file
fn dir_has_source_files(dir: &Path) -> bool {
    const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if SOURCE_EXTENSIONS.contains(&ext) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn explicit_mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/root/src/components/../utils/helpers")),
            PathBuf::from("/root/src/utils/helpers")
        );
        assert_eq!(
            normalize_path(Path::new("/root/./src/./a")),
            PathBuf::from("/root/src/a")
        );
    }

    #[test]
    fn test_strip_jsonc_comments() {
        let text = "{\n  // line comment\n  \"a\": \"http://not/a/comment\", /* block */ \"b\": 1\n}";
        let stripped = strip_jsonc_comments(text);
        let value: Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["a"], "http://not/a/comment");
        assert_eq!(value["b"], 1);
    }

    #[test]
    fn test_explicit_paths_prefix_suggestion() {
        let mapping = explicit_mapping(&[("@/*", "./src/*")]);
        let sources = AliasSources {
            explicit_paths: Some(&mapping),
            base_dir: Some("./src"),
            ..AliasSources::default()
        };
        let resolution = AliasResolution::resolve(Path::new("/proj"), sources);
        assert_eq!(
            resolution.suggest(Path::new("/proj/src/utils/helpers")),
            Some("@/utils/helpers".to_string())
        );
        assert_eq!(resolution.suggest(Path::new("/proj/other/thing")), None);
    }

    #[test]
    fn test_exact_pattern_only_matches_identical_path() {
        let mapping = explicit_mapping(&[("@config", "./src/config.ts")]);
        let sources = AliasSources {
            explicit_paths: Some(&mapping),
            ..AliasSources::default()
        };
        let resolution = AliasResolution::resolve(Path::new("/proj"), sources);
        assert_eq!(
            resolution.suggest(Path::new("/proj/src/config.ts")),
            Some("@config".to_string())
        );
        assert_eq!(resolution.suggest(Path::new("/proj/src/config/extra.ts")), None);
    }

    #[test]
    fn test_depth_below_base() {
        let mapping = explicit_mapping(&[("@/*", "./src/*")]);
        let sources = AliasSources {
            explicit_paths: Some(&mapping),
            base_dir: Some("src"),
            ..AliasSources::default()
        };
        let resolution = AliasResolution::resolve(Path::new("/proj"), sources);
        assert_eq!(
            resolution.depth_below_base(Path::new("/proj/src/utils/helpers")),
            Some(2)
        );
        assert_eq!(
            resolution.depth_below_base(Path::new("/proj/src/a/b/c")),
            Some(3)
        );
        assert_eq!(resolution.depth_below_base(Path::new("/proj/elsewhere")), None);
    }

    #[test]
    fn test_excluded_folders() {
        let mapping = explicit_mapping(&[("@/*", "./src/*")]);
        let excluded = vec!["src/legacy".to_string()];
        let sources = AliasSources {
            explicit_paths: Some(&mapping),
            excluded_folders: &excluded,
            ..AliasSources::default()
        };
        let resolution = AliasResolution::resolve(Path::new("/proj"), sources);
        assert!(resolution.is_excluded(Path::new("/proj/src/legacy/old")));
        assert!(!resolution.is_excluded(Path::new("/proj/src/utils/helpers")));
    }

    #[test]
    fn test_scan_bundler_config_literals_and_resolve() {
        let text = r#"
            const path = require('path');
            module.exports = {
                resolve: {
                    alias: {
                        '@': path.resolve(__dirname, './src'),
                        components: './src/components',
                        'utils$': "./src/utils",
                    },
                },
            };
        "#;
        let mapping = scan_bundler_config(text);
        assert_eq!(mapping.get("@/*"), Some(&vec!["./src/*".to_string()]));
        assert_eq!(
            mapping.get("components/*"),
            Some(&vec!["./src/components/*".to_string()])
        );
        assert_eq!(
            mapping.get("utils/*"),
            Some(&vec!["./src/utils/*".to_string()])
        );
    }

    #[test]
    fn test_scan_bundler_config_without_alias_block() {
        assert!(scan_bundler_config("module.exports = { mode: 'production' };").is_empty());
    }

    #[test]
    fn test_tsconfig_resolution_with_references() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("tsconfig.json"),
            r#"{
                // root project config
                "compilerOptions": {
                    "baseUrl": ".",
                    "paths": { "@/*": ["./src/*"] }
                },
                "references": [{ "path": "./packages/ui" }]
            }"#,
        )
        .unwrap();
        fs::create_dir_all(root.join("packages/ui")).unwrap();
        fs::write(
            root.join("packages/ui/tsconfig.json"),
            r#"{
                "compilerOptions": {
                    "paths": {
                        "@/*": ["./should-not-win/*"],
                        "@ui/*": ["./packages/ui/src/*"]
                    }
                }
            }"#,
        )
        .unwrap();

        let resolution = AliasResolution::resolve(root, AliasSources::default());
        // Root entry wins over the referenced project's entry for "@/*"
        assert_eq!(
            resolution.suggest(&root.join("src").join("utils").join("helpers")),
            Some("@/utils/helpers".to_string())
        );
        assert_eq!(
            resolution.suggest(&root.join("packages/ui/src/Button")),
            Some("@ui/Button".to_string())
        );
    }

    #[test]
    fn test_missing_configs_give_empty_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let resolution = AliasResolution::resolve(dir.path(), AliasSources::default());
        assert!(resolution.is_empty());
        assert!(resolution.suggest(Path::new("/anything/src/x")).is_none());
    }

    #[test]
    fn test_malformed_tsconfig_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{ not json").unwrap();
        let resolution = AliasResolution::resolve(dir.path(), AliasSources::default());
        assert!(resolution.is_empty());
    }

    #[test]
    fn test_bundler_fallback_when_tsconfig_has_no_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tsconfig.json"), r#"{ "compilerOptions": {} }"#).unwrap();
        fs::write(
            root.join("webpack.config.js"),
            r#"module.exports = { resolve: { alias: { '@': './src' } } };"#,
        )
        .unwrap();
        let resolution = AliasResolution::resolve(root, AliasSources::default());
        assert_eq!(
            resolution.suggest(&root.join("src").join("pages").join("Home")),
            Some("@/pages/Home".to_string())
        );
    }

    #[test]
    fn test_base_dir_probe_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::write(root.join("lib/index.ts"), "export {};").unwrap();
        let resolution = AliasResolution::resolve(root, AliasSources::default());
        assert_eq!(resolution.base_dir, root.join("lib"));

        let empty = tempfile::tempdir().unwrap();
        let fallback = AliasResolution::resolve(empty.path(), AliasSources::default());
        assert_eq!(fallback.base_dir, empty.path().join("src"));
    }
}
