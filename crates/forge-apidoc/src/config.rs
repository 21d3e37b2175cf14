//! Extraction options
//!
//! Options are plain top-level TOML keys:
//!
//! ```toml
//! concatMultipleLeadingComments = false
//! ignoreExportsMatching = ["/^_/", "___esModule"]
//! hidePrivateMembers = true
//! ```
//!
//! An ignore pattern wrapped in slashes is a regex; any other pattern names
//! one export exactly.

use crate::diagnostics::{ApiDocError, ApiDocResult};
use crate::host::Host;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options of an [`Extractor`](crate::extractor::Extractor) run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractorConfig {
    /// Join every leading doc comment of a declaration
    pub concat_multiple_leading_comments: bool,

    /// Export names matching any of these patterns are not documented
    ///
    /// `/regex/` matches by regex, anything else the whole name.
    pub ignore_exports_matching: Vec<String>,

    /// Drop `private` members from classes
    pub hide_private_members: bool,

    /// Order container members by name
    pub sort_class_members: bool,

    /// Document classes with an `@internal` constructor as interfaces
    pub convert_private_classes_to_interfaces: bool,

    /// Emit an `InjectableReference` const for every converted class
    pub add_injectable_references: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            concat_multiple_leading_comments: true,
            ignore_exports_matching: vec!["___esModule".to_string()],
            hide_private_members: false,
            sort_class_members: false,
            convert_private_classes_to_interfaces: false,
            add_injectable_references: false,
        }
    }
}

impl ExtractorConfig {
    /// Parse options from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> ApiDocResult<Self> {
        toml::from_str(text).map_err(|e| ApiDocError::config(e.to_string()))
    }

    /// Read options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ApiDocResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| ApiDocError::config(format!("{}: {}", path.display(), e)))
    }

    /// The rendering host these options describe
    pub fn host(&self) -> Host {
        Host::new(self.concat_multiple_leading_comments)
    }

    /// Compile `ignore_exports_matching`
    pub fn ignore_patterns(&self) -> ApiDocResult<Vec<Regex>> {
        self.ignore_exports_matching
            .iter()
            .map(|pattern| {
                let source = match pattern
                    .strip_prefix('/')
                    .and_then(|p| p.strip_suffix('/'))
                {
                    Some(regex) => regex.to_string(),
                    None => format!("^{}$", regex::escape(pattern)),
                };
                Regex::new(&source).map_err(|e| {
                    ApiDocError::config(format!("invalid ignore pattern '{}': {}", pattern, e))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert!(config.concat_multiple_leading_comments);
        assert_eq!(config.ignore_exports_matching, vec!["___esModule"]);
        assert_eq!(config.host(), Host::default());
        assert_eq!(ExtractorConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ExtractorConfig::from_toml_str(
            r#"
concatMultipleLeadingComments = false
ignoreExportsMatching = ["/^_/"]
convertPrivateClassesToInterfaces = true
addInjectableReferences = true
"#,
        )
        .unwrap();
        assert!(!config.concat_multiple_leading_comments);
        assert_eq!(config.ignore_exports_matching, vec!["/^_/"]);
        assert!(config.convert_private_classes_to_interfaces);
        assert!(config.add_injectable_references);
        assert!(!config.hide_private_members);
        assert!(!config.host().concat_multiple_leading_comments);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"sortClassMembers = true\n").unwrap();
        let config = ExtractorConfig::from_file(file.path()).unwrap();
        assert!(config.sort_class_members);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            ExtractorConfig::from_toml_str("hidePrivateMembers = 'yes'"),
            Err(ApiDocError::Config(_))
        ));
        let config = ExtractorConfig {
            ignore_exports_matching: vec!["/(/".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.ignore_patterns(), Err(ApiDocError::Config(_))));
    }

    #[test]
    fn test_ignore_pattern_forms() {
        let config = ExtractorConfig {
            ignore_exports_matching: vec![
                "___esModule".to_string(),
                "/^_[a-z]/".to_string(),
                "a.b".to_string(),
            ],
            ..Default::default()
        };
        let patterns = config.ignore_patterns().unwrap();
        let ignored = |name: &str| patterns.iter().any(|p| p.is_match(name));

        assert!(ignored("___esModule"));
        assert!(!ignored("___esModuleInterop"));
        assert!(!ignored("is___esModule"));
        assert!(ignored("_private"));
        assert!(!ignored("_Private"));
        assert!(ignored("a.b"));
        assert!(!ignored("axb"));
    }
}
