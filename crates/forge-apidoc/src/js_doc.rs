//! JSDoc tag parsing
//!
//! Content extracted by the host is already stripped of comment delimiters
//! and `*` gutters. This module splits it into a description and block tags
//! so flags such as `@internal` can be read off a declaration.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// A block tag at the start of a line: `@name rest of line`
    static ref TAG_REGEX: Regex = Regex::new(r"^@([A-Za-z][\w-]*)\s*(.*)$").unwrap();
}

/// One block tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocTag {
    /// Tag name without `@`
    pub name: String,
    /// Tag text, continuation lines included
    #[serde(default)]
    pub text: String,
}

/// Parsed documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDoc {
    /// Text before the first tag
    #[serde(default)]
    pub description: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<JsDocTag>,
}

impl JsDoc {
    /// Parse cleaned comment content
    pub fn parse(content: &str) -> Self {
        let mut description = Vec::new();
        let mut tags: Vec<JsDocTag> = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if let Some(caps) = TAG_REGEX.captures(trimmed) {
                tags.push(JsDocTag {
                    name: caps[1].to_string(),
                    text: caps[2].trim().to_string(),
                });
            } else if let Some(tag) = tags.last_mut() {
                if !trimmed.is_empty() {
                    if !tag.text.is_empty() {
                        tag.text.push('\n');
                    }
                    tag.text.push_str(trimmed);
                }
            } else {
                description.push(line);
            }
        }

        Self {
            description: description.join("\n").trim().to_string(),
            tags,
        }
    }

    pub fn tag(&self, name: &str) -> Option<&JsDocTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tag(name).is_some()
    }

    /// Marked `@internal`
    pub fn is_internal(&self) -> bool {
        self.has_tag("internal")
    }
}
