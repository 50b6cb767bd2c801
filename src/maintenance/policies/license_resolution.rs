use serde_json::{Map, Value};

/// License reported when nothing better is known
pub const UNKNOWN_LICENSE: &str = "UNKNOWN";

/// LicenseResolution policy for naming the license of an installed package
///
/// Priority order:
/// 1. `license` field (a string, or the `type` of an object)
/// 2. legacy `licenses` array, joined with ", "
/// 3. a license recognised in LICENSE/COPYING/README text, suffixed with `*`
/// 4. `UNKNOWN`
pub struct LicenseResolution;

impl LicenseResolution {
    /// The license declared in a package manifest, if any
    pub fn declared(document: &Map<String, Value>) -> Option<String> {
        Self::license_field(document.get("license"))
            .or_else(|| Self::licenses_field(document.get("licenses")))
    }

    /// Resolves the license from the declared value or, failing that,
    /// from the text of the package's license files (in priority order).
    pub fn resolve(declared: Option<String>, license_texts: &[String]) -> String {
        declared
            .or_else(|| {
                license_texts
                    .iter()
                    .find_map(|text| Self::classify_text(text))
                    .map(|guess| format!("{}*", guess))
            })
            .unwrap_or_else(|| UNKNOWN_LICENSE.to_string())
    }

    /// Recognises a handful of common license texts
    pub fn classify_text(text: &str) -> Option<&'static str> {
        let text = text.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if has("permission is hereby granted, free of charge") || has("mit license") {
            Some("MIT")
        } else if has("permission to use, copy, modify, and/or distribute this software") {
            Some("ISC")
        } else if has("apache license") && has("version 2.0") {
            Some("Apache-2.0")
        } else if has("redistribution and use in source and binary forms") {
            if has("neither the name") {
                Some("BSD-3-Clause")
            } else {
                Some("BSD-2-Clause")
            }
        } else if has("gnu general public license") {
            if has("version 3") {
                Some("GPL-3.0")
            } else if has("version 2") {
                Some("GPL-2.0")
            } else {
                Some("GPL")
            }
        } else if has("this is free and unencumbered software released into the public domain")
        {
            Some("Unlicense")
        } else {
            None
        }
    }

    fn license_field(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(license) => non_empty(license),
            Value::Object(object) => object.get("type").and_then(Value::as_str).and_then(non_empty),
            _ => None,
        }
    }

    fn licenses_field(value: Option<&Value>) -> Option<String> {
        let names: Vec<String> = match value? {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(license) => non_empty(license),
                    Value::Object(object) => {
                        object.get("type").and_then(Value::as_str).and_then(non_empty)
                    }
                    _ => None,
                })
                .collect(),
            Value::String(license) => non_empty(license).into_iter().collect(),
            _ => Vec::new(),
        };

        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_declared_string() {
        let doc = document(json!({"license": "MIT"}));
        assert_eq!(LicenseResolution::declared(&doc), Some("MIT".to_string()));
    }

    #[test]
    fn test_declared_object_type() {
        let doc = document(json!({"license": {"type": "Apache-2.0", "url": "x"}}));
        assert_eq!(LicenseResolution::declared(&doc), Some("Apache-2.0".to_string()));
    }

    #[test]
    fn test_declared_legacy_array() {
        let doc = document(json!({"licenses": [{"type": "MIT"}, {"type": "GPL-2.0"}]}));
        assert_eq!(
            LicenseResolution::declared(&doc),
            Some("MIT, GPL-2.0".to_string())
        );
    }

    #[test]
    fn test_declared_prefers_license_over_licenses() {
        let doc = document(json!({"license": "ISC", "licenses": [{"type": "MIT"}]}));
        assert_eq!(LicenseResolution::declared(&doc), Some("ISC".to_string()));
    }

    #[test]
    fn test_declared_ignores_blank() {
        let doc = document(json!({"license": "  ", "licenses": []}));
        assert_eq!(LicenseResolution::declared(&doc), None);
    }

    #[test]
    fn test_resolve_falls_back_to_text_guess() {
        let texts = vec![
            "# Some readme".to_string(),
            "Permission is hereby granted, free of charge, to any person".to_string(),
        ];
        assert_eq!(LicenseResolution::resolve(None, &texts), "MIT*");
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(LicenseResolution::resolve(None, &[]), UNKNOWN_LICENSE);
        assert_eq!(
            LicenseResolution::resolve(Some("MIT".to_string()), &[]),
            "MIT"
        );
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(
            LicenseResolution::classify_text(
                "Permission to use, copy, modify, and/or distribute this software for any purpose"
            ),
            Some("ISC")
        );
        assert_eq!(
            LicenseResolution::classify_text("Apache License\nVersion 2.0, January 2004"),
            Some("Apache-2.0")
        );
        assert_eq!(
            LicenseResolution::classify_text(
                "Redistribution and use in source and binary forms ... Neither the name of"
            ),
            Some("BSD-3-Clause")
        );
        assert_eq!(
            LicenseResolution::classify_text("GNU GENERAL PUBLIC LICENSE\nVersion 3, 29 June 2007"),
            Some("GPL-3.0")
        );
        assert_eq!(LicenseResolution::classify_text("All rights reserved."), None);
    }
}
