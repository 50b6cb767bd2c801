use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Node.js core modules; imports of these never name a dependency
const BUILTIN_MODULES: &[&str] = &[
    "assert", "async_hooks", "buffer", "child_process", "cluster", "console", "constants",
    "crypto", "dgram", "diagnostics_channel", "dns", "domain", "events", "fs", "http", "http2",
    "https", "inspector", "module", "net", "os", "path", "perf_hooks", "process", "punycode",
    "querystring", "readline", "repl", "stream", "string_decoder", "sys", "timers", "tls",
    "trace_events", "tty", "url", "util", "v8", "vm", "wasi", "worker_threads", "zlib",
];

static IMPORT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // import x, { y } from 'pkg' / import type { T } from 'pkg'
        r#"\bimport\s+(?:type\s+)?[\w*{}\s,$]+?\s+from\s*['"`]([^'"`]+)['"`]"#,
        // import 'pkg'
        r#"\bimport\s*['"`]([^'"`]+)['"`]"#,
        // export * from 'pkg' / export { x } from 'pkg'
        r#"\bexport\s+(?:type\s+)?[\w*{}\s,$]+?\s+from\s*['"`]([^'"`]+)['"`]"#,
        // require('pkg'), require.resolve('pkg'), import('pkg')
        r#"\b(?:require(?:\.resolve)?|import)\s*\(\s*['"`]([^'"`]+)['"`]"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static import pattern is valid"))
    .collect()
});

/// Extraction of package names from JavaScript/TypeScript module specifiers
pub struct ModuleSpecifier;

impl ModuleSpecifier {
    /// All raw module specifiers referenced by `source`
    pub fn extract(source: &str) -> Vec<String> {
        IMPORT_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.captures_iter(source))
            .filter_map(|captures| captures.get(1))
            .map(|specifier| specifier.as_str().to_string())
            .collect()
    }

    /// Distinct package names referenced by `source`, core module names included
    ///
    /// `events` may be the core module or the userland polyfill; only the
    /// declared dependencies tell them apart, so both readings are kept here.
    pub fn referenced_names(source: &str) -> BTreeSet<String> {
        Self::extract(source)
            .iter()
            .filter_map(|specifier| Self::bare_name(specifier))
            .collect()
    }

    /// The package a specifier resolves to, or `None` for relative paths,
    /// URLs, protocol imports (`node:fs`) and core modules.
    ///
    /// `lodash/fp` resolves to `lodash`, `@scope/pkg/sub` to `@scope/pkg`.
    /// A trailing slash (`punycode/`) bypasses the core module of that name.
    pub fn package_name(specifier: &str) -> Option<String> {
        let name = Self::bare_name(specifier)?;
        if is_builtin(&name) && !specifier.trim().ends_with('/') {
            return None;
        }
        Some(name)
    }

    fn bare_name(specifier: &str) -> Option<String> {
        // webpack-style loader chains: the last segment is the module
        let specifier = specifier.rsplit('!').next().unwrap_or(specifier).trim();

        if specifier.is_empty()
            || specifier.starts_with('.')
            || specifier.starts_with('/')
            || specifier.starts_with('#')
            || specifier.contains(':')
        {
            return None;
        }

        let mut segments = specifier.split('/');
        let first = segments.next().filter(|s| !s.is_empty())?;
        if first.starts_with('@') {
            let second = segments.next().filter(|s| !s.is_empty())?;
            Some(format!("{}/{}", first, second))
        } else {
            Some(first.to_string())
        }
    }
}

fn is_builtin(name: &str) -> bool {
    BUILTIN_MODULES.contains(&name)
}
