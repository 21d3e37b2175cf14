//! Variable documentation
//!
//! `const`, `let` and `var` exports share one payload; the declaration
//! keyword selects the document kind.

use deno_ast::swc::ast::VarDeclKind;
use serde::{Deserialize, Serialize};

/// Type text of the companion marker emitted for internal classes
pub const INJECTABLE_REFERENCE: &str = "InjectableReference";

/// Variable declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableKind {
    /// var declaration
    Var,
    /// let declaration
    Let,
    /// const declaration
    #[default]
    Const,
}

impl From<VarDeclKind> for VariableKind {
    fn from(kind: VarDeclKind) -> Self {
        match kind {
            VarDeclKind::Var => VariableKind::Var,
            VarDeclKind::Let => VariableKind::Let,
            VarDeclKind::Const => VariableKind::Const,
        }
    }
}

/// Payload of `const`, `let` and `var` documents
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDef {
    /// Rendered type text
    #[serde(rename = "type", default)]
    pub type_text: String,

    /// Marker left behind for a class converted to an interface
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub injectable_reference: bool,
}

impl VariableDef {
    pub fn new(type_text: impl Into<String>) -> Self {
        Self {
            type_text: type_text.into(),
            injectable_reference: false,
        }
    }

    /// Payload of the companion marker document
    pub fn injectable_reference() -> Self {
        Self {
            type_text: INJECTABLE_REFERENCE.to_string(),
            injectable_reference: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_from_swc() {
        assert_eq!(VariableKind::from(VarDeclKind::Let), VariableKind::Let);
        assert_eq!(VariableKind::from(VarDeclKind::Const), VariableKind::Const);
        assert_eq!(VariableKind::from(VarDeclKind::Var), VariableKind::Var);
    }

    #[test]
    fn test_marker_serialization() {
        let value = serde_json::to_value(VariableDef::injectable_reference()).unwrap();
        assert_eq!(value["type"], serde_json::json!("InjectableReference"));
        assert_eq!(value["injectableReference"], serde_json::json!(true));

        let plain = serde_json::to_value(VariableDef::new("number")).unwrap();
        assert!(plain.get("injectableReference").is_none());
    }
}
