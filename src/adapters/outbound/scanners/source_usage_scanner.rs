use super::tool_config::tool_references;
use crate::maintenance::domain::{DependencyKind, Manifest, UnusedReport, MANIFEST_FILENAME};
use crate::maintenance::services::ModuleSpecifier;
use crate::ports::outbound::UsageScanner;
use crate::shared::error::PatrolError;
use crate::shared::security::read_bounded_file;
use crate::shared::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Directories never scanned for sources
const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".hg",
    ".svn",
    "dist",
    "build",
    "coverage",
    ".next",
    "out",
    ".cache",
];

const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts", "vue", "svelte",
];

const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// Manifest fields whose strings are metadata, not package references
const NON_CONFIG_FIELDS: &[&str] = &[
    "name",
    "version",
    "description",
    "keywords",
    "homepage",
    "bugs",
    "license",
    "author",
    "contributors",
    "repository",
    "scripts",
    "main",
    "module",
    "types",
    "files",
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
    "bundledDependencies",
    "engines",
    "eslintConfig",
    "babel",
];

/// Options for the source usage scan
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Package names (or `*` globs) never reported as unused
    pub ignore_unused: Vec<String>,
    /// Extra directory names skipped during the walk
    pub ignore_dirs: Vec<String>,
}

/// SourceUsageScanner adapter finding dependencies no source file references
///
/// A dependency counts as used when any of these hold:
/// - a source file imports or requires it
/// - one of its binaries is invoked from a `scripts` entry
/// - a configuration field of the manifest names it (`"jest": {"preset": "ts-jest"}`)
/// - an ESLint, Babel or TypeScript config loads it, shorthand names expanded
/// - it is `@types/<x>` and `<x>` is used (`@types/node` whenever TypeScript is present)
/// - it matches an `ignore_unused` pattern
pub struct SourceUsageScanner {
    options: ScanOptions,
    ignore_set: GlobSet,
}

/// What the walk over the project sources found
#[derive(Debug, Default)]
struct SourceUsage {
    packages: BTreeSet<String>,
    has_typescript: bool,
}

impl SourceUsageScanner {
    pub fn new(options: ScanOptions) -> Result<Self> {
        let ignore_set = build_globset(&options.ignore_unused)?;
        Ok(Self {
            options,
            ignore_set,
        })
    }

    fn is_ignored_dir(&self, name: &str) -> bool {
        DEFAULT_IGNORED_DIRS.contains(&name) || self.options.ignore_dirs.iter().any(|d| d == name)
    }

    fn collect_source_usage(&self, project_root: &Path) -> SourceUsage {
        let mut usage = SourceUsage::default();

        let walker = WalkDir::new(project_root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self.is_ignored_dir(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable path during source scan");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let extension = match entry.path().extension().and_then(|e| e.to_str()) {
                Some(extension) => extension.to_lowercase(),
                None => continue,
            };
            if !SOURCE_EXTENSIONS.contains(&extension.as_str()) {
                continue;
            }
            if TYPESCRIPT_EXTENSIONS.contains(&extension.as_str()) {
                usage.has_typescript = true;
            }

            match read_bounded_file(entry.path(), "source file") {
                Ok(source) => usage
                    .packages
                    .extend(ModuleSpecifier::referenced_names(&source)),
                Err(e) => {
                    tracing::warn!(path = %entry.path().display(), error = %e, "skipping source file")
                }
            }
        }

        tracing::debug!(
            packages = usage.packages.len(),
            typescript = usage.has_typescript,
            "source scan finished"
        );
        usage
    }

    fn is_used(
        &self,
        name: &str,
        usage: &SourceUsage,
        config_references: &BTreeSet<String>,
        scripts: &[&str],
        project_root: &Path,
    ) -> bool {
        if usage.packages.contains(name) || config_references.contains(name) {
            return true;
        }
        if self.ignore_set.is_match(name) {
            return true;
        }
        if let Some(typed) = name.strip_prefix("@types/") {
            let package = typed_package_name(typed);
            if usage.packages.contains(&package) || config_references.contains(&package) {
                return true;
            }
            if package == "node" && usage.has_typescript {
                return true;
            }
        }

        let binaries = installed_binaries(project_root, name);
        scripts
            .iter()
            .any(|script| binaries.iter().any(|bin| script_invokes(script, bin)))
    }
}

impl UsageScanner for SourceUsageScanner {
    fn scan(&self, project_root: &Path, manifest: &Manifest) -> Result<UnusedReport> {
        let usage = self.collect_source_usage(project_root);
        let mut config_references = manifest_config_references(manifest);
        config_references.extend(tool_references(project_root, manifest));
        let scripts = manifest.scripts();

        let unused_for = |kind: DependencyKind| -> Vec<String> {
            manifest
                .dependency_names(kind)
                .into_iter()
                .filter(|name| {
                    !self.is_used(name, &usage, &config_references, &scripts, project_root)
                })
                .collect()
        };

        Ok(UnusedReport::new(
            unused_for(DependencyKind::Production),
            unused_for(DependencyKind::Development),
        ))
    }
}

/// `babel__core` names the types of `@babel/core`
fn typed_package_name(typed: &str) -> String {
    match typed.split_once("__") {
        Some((scope, package)) => format!("@{}/{}", scope, package),
        None => typed.to_string(),
    }
}

/// Package names referenced from configuration fields of the manifest
fn manifest_config_references(manifest: &Manifest) -> BTreeSet<String> {
    let mut references = BTreeSet::new();
    for (field, value) in manifest.document() {
        if NON_CONFIG_FIELDS.contains(&field.as_str()) {
            continue;
        }
        collect_strings(value, &mut |text| {
            if let Some(name) = ModuleSpecifier::package_name(text) {
                references.insert(name);
            }
        });
    }
    references
}

fn collect_strings(value: &Value, visit: &mut impl FnMut(&str)) {
    match value {
        Value::String(text) => visit(text),
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, visit)),
        Value::Object(object) => object.values().for_each(|item| collect_strings(item, visit)),
        _ => {}
    }
}

/// Binary names a dependency exposes; falls back to its unscoped name.
fn installed_binaries(project_root: &Path, name: &str) -> Vec<String> {
    let unscoped = name.rsplit('/').next().unwrap_or(name).to_string();
    let manifest_path = project_root
        .join("node_modules")
        .join(name)
        .join(MANIFEST_FILENAME);

    let declared = read_bounded_file(&manifest_path, MANIFEST_FILENAME)
        .ok()
        .and_then(|content| Manifest::from_json(&content).ok())
        .and_then(|manifest| match manifest.document().get("bin") {
            Some(Value::String(_)) => Some(vec![unscoped.clone()]),
            Some(Value::Object(bins)) => Some(bins.keys().cloned().collect()),
            _ => None,
        });

    let mut binaries = declared.unwrap_or_default();
    if !binaries.contains(&unscoped) {
        binaries.push(unscoped);
    }
    binaries
}

/// Whether `script` runs the binary `bin` as one of its words
fn script_invokes(script: &str, bin: &str) -> bool {
    let suffix = format!("/{}", bin);
    script
        .split(|c: char| c.is_whitespace() || matches!(c, '&' | '|' | ';' | '(' | ')' | '"' | '\''))
        .filter(|word| !word.is_empty())
        .any(|word| word == bin || word.ends_with(&suffix))
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| PatrolError::Config {
            message: format!("invalid ignore_unused pattern '{}': {}", pattern, e),
        })?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
