use crate::shared::Result;
use serde_json::{Map, Value};

/// File name of the manifest at the project root
pub const MANIFEST_FILENAME: &str = "package.json";

/// The two dependency classes a manifest tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Production,
    Development,
}

impl DependencyKind {
    /// Both classes, in the order actions visit them
    pub const ALL: [DependencyKind; 2] = [DependencyKind::Production, DependencyKind::Development];

    /// Top-level manifest field holding this class
    pub fn field(self) -> &'static str {
        match self {
            DependencyKind::Production => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field())
    }
}

/// Parsed `package.json` document
///
/// The whole JSON object is kept so fields the tool does not understand
/// survive a rewrite untouched and in their original position.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    pub fn new(document: Map<String, Value>) -> Self {
        Self { document }
    }

    /// Parses manifest text; the top level must be a JSON object.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => anyhow::bail!(
                "expected a JSON object at the top level, found {}",
                json_type_name(&other)
            ),
        }
    }

    /// Serializes with two-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&self.document)?;
        output.push('\n');
        Ok(output)
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.document.get("version").and_then(Value::as_str)
    }

    /// The dependency map for `kind`, if the field exists and is an object
    pub fn dependencies(&self, kind: DependencyKind) -> Option<&Map<String, Value>> {
        self.document.get(kind.field()).and_then(Value::as_object)
    }

    pub fn dependencies_mut(&mut self, kind: DependencyKind) -> Option<&mut Map<String, Value>> {
        self.document
            .get_mut(kind.field())
            .and_then(Value::as_object_mut)
    }

    /// Replaces the dependency map for `kind`.
    ///
    /// An existing field keeps its position among the top-level keys.
    pub fn set_dependencies(&mut self, kind: DependencyKind, dependencies: Map<String, Value>) {
        self.document
            .insert(kind.field().to_string(), Value::Object(dependencies));
    }

    /// Package names declared for `kind`, in manifest order
    pub fn dependency_names(&self, kind: DependencyKind) -> Vec<String> {
        self.dependencies(kind)
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The command strings of the `scripts` field
    pub fn scripts(&self) -> Vec<&str> {
        self.document
            .get("scripts")
            .and_then(Value::as_object)
            .map(|scripts| scripts.values().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
  "name": "sample",
  "version": "1.0.0",
  "scripts": {
    "test": "jest --ci",
    "lint": "eslint ."
  },
  "dependencies": {
    "react": "^18.2.0",
    "axios": "^1.6.0"
  },
  "devDependencies": {
    "jest": "^29.0.0"
  },
  "license": "MIT"
}
"#;

    #[test]
    fn test_from_json_reads_fields() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.name(), Some("sample"));
        assert_eq!(manifest.version(), Some("1.0.0"));
        assert_eq!(
            manifest.dependency_names(DependencyKind::Production),
            vec!["react", "axios"]
        );
        assert_eq!(
            manifest.dependency_names(DependencyKind::Development),
            vec!["jest"]
        );
        assert_eq!(manifest.scripts(), vec!["jest --ci", "eslint ."]);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Manifest::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(Manifest::from_json("{ not json").is_err());
    }

    #[test]
    fn test_round_trip_keeps_layout() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.to_pretty_json().unwrap(), SAMPLE);
    }

    #[test]
    fn test_set_dependencies_keeps_field_position() {
        let mut manifest = Manifest::from_json(SAMPLE).unwrap();
        manifest.set_dependencies(DependencyKind::Production, Map::new());

        let keys: Vec<&str> = manifest.document().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["name", "version", "scripts", "dependencies", "devDependencies", "license"]
        );
    }

    #[test]
    fn test_missing_dependency_fields() {
        let manifest = Manifest::from_json(r#"{"name": "bare"}"#).unwrap();
        assert!(manifest.dependencies(DependencyKind::Production).is_none());
        assert!(manifest
            .dependency_names(DependencyKind::Development)
            .is_empty());
        assert!(manifest.scripts().is_empty());
    }

    #[test]
    fn test_dependency_kind_field() {
        assert_eq!(DependencyKind::Production.field(), "dependencies");
        assert_eq!(DependencyKind::Development.field(), "devDependencies");
        assert_eq!(DependencyKind::Development.to_string(), "devDependencies");
    }
}
