use crate::shared::error::PatrolError;
use crate::shared::Result;

/// Maximum length npm accepts for a package name
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// NewType wrapper for an npm package name with validation
///
/// Names end up as arguments of `npm`/`yarn`, so anything that could be read
/// as an option or a path is rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| -> anyhow::Error {
            PatrolError::InvalidPackageName {
                name: name.clone(),
                reason: reason.to_string(),
            }
            .into()
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid("name is longer than 214 characters"));
        }
        if name.starts_with('-') || name.starts_with('.') {
            return Err(invalid("name cannot start with '-' or '.'"));
        }

        let bare = match name.strip_prefix('@') {
            Some(scoped) => {
                let (scope, package) = scoped
                    .split_once('/')
                    .ok_or_else(|| invalid("scoped name must look like @scope/name"))?;
                if scope.is_empty() || package.is_empty() || package.contains('/') {
                    return Err(invalid("scoped name must look like @scope/name"));
                }
                if !scope.chars().all(is_name_char) {
                    return Err(invalid("scope contains invalid characters"));
                }
                package
            }
            None => name.as_str(),
        };

        if !bare.chars().all(is_name_char) {
            return Err(invalid(
                "only alphanumerics and '-', '.', '_', '~' are allowed",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
