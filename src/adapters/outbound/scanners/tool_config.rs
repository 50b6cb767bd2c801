//! Package references hidden in tool configuration
//!
//! ESLint, Babel and TypeScript load packages by (often abbreviated) name
//! from their own config files. Those packages never show up as imports, so
//! the names are recovered here and expanded the way each tool resolves them.

use crate::maintenance::domain::Manifest;
use crate::maintenance::services::ModuleSpecifier;
use crate::shared::security::read_bounded_file;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

const ESLINT_FILES: &[&str] = &[".eslintrc", ".eslintrc.json", ".eslintrc.yaml", ".eslintrc.yml"];
const BABEL_FILES: &[&str] = &[".babelrc", ".babelrc.json", "babel.config.json"];
const TSCONFIG_FILE: &str = "tsconfig.json";

/// How a tool turns a short name into a package name
#[derive(Debug, Clone, Copy)]
struct Shorthand {
    /// Prefix of unscoped packages: `eslint-config` for `airbnb`
    prefix: &'static str,
    /// Scope with its own naming: `@babel/env` means `@babel/preset-env`
    home_scope: Option<(&'static str, &'static str)>,
}

const ESLINT_CONFIG: Shorthand = Shorthand {
    prefix: "eslint-config",
    home_scope: None,
};
const ESLINT_PLUGIN: Shorthand = Shorthand {
    prefix: "eslint-plugin",
    home_scope: None,
};
const BABEL_PRESET: Shorthand = Shorthand {
    prefix: "babel-preset",
    home_scope: Some(("@babel", "preset")),
};
const BABEL_PLUGIN: Shorthand = Shorthand {
    prefix: "babel-plugin",
    home_scope: Some(("@babel", "plugin")),
};

/// Packages referenced by the tool configs in `project_root` and by the
/// `eslintConfig` / `babel` fields of the manifest
pub fn tool_references(project_root: &Path, manifest: &Manifest) -> BTreeSet<String> {
    let mut references = BTreeSet::new();

    for file in ESLINT_FILES {
        if let Some(config) = read_config(&project_root.join(file)) {
            eslint_references(&config, &mut references);
        }
    }
    for file in BABEL_FILES {
        if let Some(config) = read_config(&project_root.join(file)) {
            babel_references(&config, &mut references);
        }
    }
    if let Some(config) = read_config(&project_root.join(TSCONFIG_FILE)) {
        tsconfig_references(&config, &mut references);
    }

    if let Some(config) = manifest.document().get("eslintConfig") {
        eslint_references(config, &mut references);
    }
    if let Some(config) = manifest.document().get("babel") {
        babel_references(config, &mut references);
    }

    references
}

/// Reads a JSON (comments allowed) or YAML config file; absent or
/// unparsable files yield `None`.
fn read_config(path: &Path) -> Option<Value> {
    if !path.is_file() {
        return None;
    }
    let content = match read_bounded_file(path, "tool config") {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable tool config");
            return None;
        }
    };

    let parsed = serde_json::from_str::<Value>(&strip_json_comments(&content))
        .ok()
        .or_else(|| serde_yaml_ng::from_str::<Value>(&content).ok());
    match parsed {
        Some(config) => {
            tracing::debug!(path = %path.display(), "read tool config");
            Some(config)
        }
        None => {
            tracing::warn!(path = %path.display(), "skipping unparsable tool config");
            None
        }
    }
}

fn eslint_references(config: &Value, references: &mut BTreeSet<String>) {
    for name in string_or_list(config.get("extends")) {
        let expanded = match name.strip_prefix("plugin:") {
            Some(plugin) => expand(plugin_of_config(plugin), ESLINT_PLUGIN),
            None if name.starts_with("eslint:") => None,
            None => expand(name, ESLINT_CONFIG),
        };
        references.extend(expanded);
    }
    for name in string_or_list(config.get("plugins")) {
        references.extend(expand(name, ESLINT_PLUGIN));
    }
    if let Some(parser) = config.get("parser").and_then(Value::as_str) {
        references.extend(ModuleSpecifier::package_name(parser));
    }
    if let Some(Value::Array(overrides)) = config.get("overrides") {
        for nested in overrides {
            eslint_references(nested, references);
        }
    }
}

fn babel_references(config: &Value, references: &mut BTreeSet<String>) {
    for (field, shorthand) in [("presets", BABEL_PRESET), ("plugins", BABEL_PLUGIN)] {
        let Some(Value::Array(entries)) = config.get(field) else {
            continue;
        };
        for entry in entries {
            // "name" or ["name", { options }]
            let name = match entry {
                Value::String(name) => Some(name.as_str()),
                Value::Array(pair) => pair.first().and_then(Value::as_str),
                _ => None,
            };
            if let Some(name) = name {
                references.extend(expand(name, shorthand));
            }
        }
    }
    if let Some(Value::Object(envs)) = config.get("env") {
        for nested in envs.values() {
            babel_references(nested, references);
        }
    }
    if let Some(Value::Array(overrides)) = config.get("overrides") {
        for nested in overrides {
            babel_references(nested, references);
        }
    }
}

fn tsconfig_references(config: &Value, references: &mut BTreeSet<String>) {
    let types = config
        .get("compilerOptions")
        .and_then(|options| options.get("types"));
    for name in string_or_list(types) {
        let typed = match name.strip_prefix('@').and_then(|n| n.split_once('/')) {
            Some((scope, package)) => format!("@types/{}__{}", scope, package),
            None => format!("@types/{}", name),
        };
        references.insert(typed);
    }
    for base in string_or_list(config.get("extends")) {
        references.extend(ModuleSpecifier::package_name(base));
    }
}

fn string_or_list(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// The plugin part of `plugin:<plugin>/<config>`: everything before the last slash
fn plugin_of_config(reference: &str) -> &str {
    match reference.rfind('/') {
        Some(i) => &reference[..i],
        None => reference,
    }
}

/// Expands a tool shorthand into the package it loads
fn expand(name: &str, shorthand: Shorthand) -> Option<String> {
    let name = name.trim();
    if let Some(module) = name.strip_prefix("module:") {
        return ModuleSpecifier::package_name(module);
    }
    if name.is_empty() || name.starts_with('.') || name.starts_with('/') || name.contains(':') {
        return None;
    }

    let prefix = shorthand.prefix;
    if let Some(scoped) = name.strip_prefix('@') {
        let (scope, rest) = match scoped.split_once('/') {
            Some((scope, rest)) => (scope, rest.split('/').next().unwrap_or(rest)),
            None => (scoped, ""),
        };
        let scope = format!("@{}", scope);

        if let Some((home, kind)) = shorthand.home_scope {
            if scope == home {
                if rest.is_empty() {
                    return None;
                }
                let package = if rest.starts_with(&format!("{}-", kind)) {
                    rest.to_string()
                } else {
                    format!("{}-{}", kind, rest)
                };
                return Some(format!("{}/{}", scope, package));
            }
        }

        let package = if rest.is_empty() {
            prefix.to_string()
        } else if rest.starts_with(prefix) {
            rest.to_string()
        } else {
            format!("{}-{}", prefix, rest)
        };
        return Some(format!("{}/{}", scope, package));
    }

    let package = name.split('/').next().unwrap_or(name);
    if package.starts_with(&format!("{}-", prefix)) {
        Some(package.to_string())
    } else {
        Some(format!("{}-{}", prefix, package))
    }
}

/// Removes `//` and `/* */` comments outside string literals.
fn strip_json_comments(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            output.push(c);
            match c {
                '\\' => output.extend(chars.next()),
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                output.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        output.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            _ => output.push(c),
        }
    }
    output
}
