//! Class and interface documentation
//!
//! Classes and interfaces share one payload so the internal-class transform
//! can move a document from one kind to the other without rebuilding it.

use crate::decorators::DecoratorDoc;
use crate::function::{OverloadDoc, Parameterized};
use crate::members::{Accessibility, MemberDoc};
use crate::node::DeclarationRef;
use crate::params::ParamDoc;
use serde::{Deserialize, Serialize};

/// One entry of an `extends` or `implements` clause
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeritageInfo {
    /// Referenced type name (`Base`, `ns.Base`)
    pub name: String,
    /// Full clause text including type arguments (`Base<string>`)
    pub text: String,
}

impl HeritageInfo {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Class constructor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDoc {
    /// Parameters of the implementation (or first) signature
    #[serde(default)]
    pub parameters: Vec<ParamDoc>,

    /// Remaining constructor signatures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overloads: Vec<OverloadDoc>,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub accessibility: Accessibility,

    /// Not part of the public contract (`@internal`)
    #[serde(default)]
    pub internal: bool,
}

impl Parameterized for ConstructorDoc {
    fn parameters(&self) -> &[ParamDoc] {
        &self.parameters
    }

    fn type_parameters(&self) -> &str {
        ""
    }
}

/// Payload of `class` and `interface` documents
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLikeDef {
    /// Bracketed type parameter list, empty when not generic
    #[serde(default)]
    pub type_parameters: String,

    /// Base class (classes) or base interfaces (interfaces)
    #[serde(default)]
    pub extends_clauses: Vec<HeritageInfo>,

    /// Implemented interfaces; always empty for interfaces
    #[serde(default)]
    pub implements_clauses: Vec<HeritageInfo>,

    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<MemberDoc>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub constructor_doc: Option<ConstructorDoc>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDoc>,

    #[serde(default)]
    pub is_abstract: bool,

    /// Declarations merged into this one (interface blocks, namespaces)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_declarations: Vec<DeclarationRef>,
}

impl ClassLikeDef {
    /// Whether the constructor is flagged internal
    pub fn has_internal_constructor(&self) -> bool {
        self.constructor_doc.as_ref().is_some_and(|c| c.internal)
    }

    /// Find a member by name
    pub fn member(&self, name: &str) -> Option<&MemberDoc> {
        self.members.iter().find(|m| m.name == name)
    }
}
