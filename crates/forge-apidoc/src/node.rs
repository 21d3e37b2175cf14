//! Core documentation node types
//!
//! This module provides `ApiDoc`, the record produced for every documented
//! export. Shared fields (identity, location, content) live on the record
//! itself; kind-specific fields live in the `ApiDocDef` variant payload,
//! tagged by `docType` when serialized.

use crate::class::ClassLikeDef;
use crate::function::FunctionDef;
use crate::r#enum::EnumDef;
use crate::type_alias::TypeAliasDef;
use crate::variable::{VariableDef, VariableKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// 1-indexed line number
    pub line: usize,
    /// 0-indexed column number
    pub character: usize,
}

impl Position {
    /// Line reported for a declaration whose leading trivia starts here
    ///
    /// A full start in the middle of a line belongs to the previous token, so
    /// the declaration's lines begin on the next one, unless the declaration
    /// itself starts on that same line (`first_line`).
    pub fn starting_line(self, first_line: usize) -> usize {
        (self.line + usize::from(self.character > 0)).min(first_line)
    }
}

/// Start and end of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// Where a documented declaration lives
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Absolute path of the source file
    pub file_path: String,
    /// Base path module ids are relative to
    pub base_path: String,
    /// Source path relative to the base path, with extension
    pub project_relative_path: String,
    /// Source extension (`ts`, `d.ts`, ...)
    pub extension: String,
    /// Span of the declaration including leading trivia
    pub location: SourceLocation,
}

/// Syntax kind of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    Class,
    Interface,
    Function,
    Enum,
    TypeAlias,
    Variable,
    Namespace,
    /// Expression of `export default <expr>`
    ExportExpression,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Function => "function",
            DeclarationKind::Enum => "enum",
            DeclarationKind::TypeAlias => "type-alias",
            DeclarationKind::Variable => "variable",
            DeclarationKind::Namespace => "namespace",
            DeclarationKind::ExportExpression => "export-expression",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned handle to the declaration a document was built from
///
/// Documents outlive the AST of the parse pass, so they keep the
/// declaration's kind and position rather than the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRef {
    pub kind: DeclarationKind,
    pub module_id: String,
    pub start: Position,
    pub end: Position,
}

/// Documentation kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocKind {
    Class,
    Interface,
    Function,
    Enum,
    TypeAlias,
    Const,
    Let,
    Var,
}

impl DocKind {
    /// The tag string used in serialized documents
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Class => "class",
            DocKind::Interface => "interface",
            DocKind::Function => "function",
            DocKind::Enum => "enum",
            DocKind::TypeAlias => "type-alias",
            DocKind::Const => "const",
            DocKind::Let => "let",
            DocKind::Var => "var",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name-derived identity of a document
///
/// `id` and the aliases are always computed from the name and the owning
/// module id; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocIdentity {
    name: String,
    id: String,
    aliases: Vec<String>,
    module_id: String,
}

impl DocIdentity {
    pub fn new(module_id: impl Into<String>, name: impl Into<String>) -> Self {
        let module_id = module_id.into();
        let name = name.into();
        let id = format!("{}/{}", module_id, name);
        let aliases = vec![name.clone(), id.clone()];
        Self {
            name,
            id,
            aliases,
            module_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable id: `<moduleId>/<name>`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }
}

/// Kind-specific payload of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "docType", rename_all = "kebab-case")]
pub enum ApiDocDef {
    #[serde(rename_all = "camelCase")]
    Class { class_def: ClassLikeDef },

    #[serde(rename_all = "camelCase")]
    Interface { interface_def: ClassLikeDef },

    #[serde(rename_all = "camelCase")]
    Function { function_def: FunctionDef },

    #[serde(rename_all = "camelCase")]
    Enum { enum_def: EnumDef },

    #[serde(rename_all = "camelCase")]
    TypeAlias { type_alias_def: TypeAliasDef },

    #[serde(rename_all = "camelCase")]
    Const { variable_def: VariableDef },

    #[serde(rename_all = "camelCase")]
    Let { variable_def: VariableDef },

    #[serde(rename_all = "camelCase")]
    Var { variable_def: VariableDef },
}

impl ApiDocDef {
    /// Wrap a variable payload in the variant matching its kind
    pub fn variable(kind: VariableKind, variable_def: VariableDef) -> Self {
        match kind {
            VariableKind::Const => ApiDocDef::Const { variable_def },
            VariableKind::Let => ApiDocDef::Let { variable_def },
            VariableKind::Var => ApiDocDef::Var { variable_def },
        }
    }

    pub fn kind(&self) -> DocKind {
        match self {
            ApiDocDef::Class { .. } => DocKind::Class,
            ApiDocDef::Interface { .. } => DocKind::Interface,
            ApiDocDef::Function { .. } => DocKind::Function,
            ApiDocDef::Enum { .. } => DocKind::Enum,
            ApiDocDef::TypeAlias { .. } => DocKind::TypeAlias,
            ApiDocDef::Const { .. } => DocKind::Const,
            ApiDocDef::Let { .. } => DocKind::Let,
            ApiDocDef::Var { .. } => DocKind::Var,
        }
    }

    /// Class or interface payload
    pub fn class_like(&self) -> Option<&ClassLikeDef> {
        match self {
            ApiDocDef::Class { class_def } => Some(class_def),
            ApiDocDef::Interface { interface_def } => Some(interface_def),
            _ => None,
        }
    }

    pub fn function_def(&self) -> Option<&FunctionDef> {
        match self {
            ApiDocDef::Function { function_def } => Some(function_def),
            _ => None,
        }
    }

    pub fn enum_def(&self) -> Option<&EnumDef> {
        match self {
            ApiDocDef::Enum { enum_def } => Some(enum_def),
            _ => None,
        }
    }

    pub fn type_alias_def(&self) -> Option<&TypeAliasDef> {
        match self {
            ApiDocDef::TypeAlias { type_alias_def } => Some(type_alias_def),
            _ => None,
        }
    }

    pub fn variable_def(&self) -> Option<&VariableDef> {
        match self {
            ApiDocDef::Const { variable_def }
            | ApiDocDef::Let { variable_def }
            | ApiDocDef::Var { variable_def } => Some(variable_def),
            _ => None,
        }
    }

    /// Whether this is a companion marker left behind for an internal class
    pub fn is_injectable_reference(&self) -> bool {
        matches!(self, ApiDocDef::Const { variable_def } if variable_def.injectable_reference)
    }
}

/// A documented export
///
/// Every produced record carries the same shared fields; what differs per
/// kind lives in [`ApiDocDef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDoc {
    #[serde(flatten)]
    identity: DocIdentity,

    /// Source path, filled in by a later pipeline stage
    #[serde(default)]
    pub path: String,

    /// Rendered output path, filled in by a later pipeline stage
    #[serde(default)]
    pub output_path: String,

    /// Leading documentation comment
    #[serde(default)]
    pub content: String,

    /// Name of the symbol where it is declared (differs from `name` for aliases)
    pub symbol_name: String,

    /// Exported as the module's default export
    #[serde(default)]
    pub is_default: bool,

    /// The declaration this document was built from
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub declaration: Option<DeclarationRef>,

    pub file_info: FileInfo,

    /// 1-based line the documentation starts on
    pub starting_line: usize,

    /// 1-based line the declaration ends on
    pub ending_line: usize,

    /// Project-relative path without extension
    pub original_module: String,

    #[serde(flatten)]
    pub def: ApiDocDef,
}

impl ApiDoc {
    /// Create a document with empty location data
    pub fn new(identity: DocIdentity, def: ApiDocDef) -> Self {
        let symbol_name = identity.name().to_string();
        let original_module = identity.module_id().to_string();
        Self {
            identity,
            path: String::new(),
            output_path: String::new(),
            content: String::new(),
            symbol_name,
            is_default: false,
            declaration: None,
            file_info: FileInfo::default(),
            starting_line: 1,
            ending_line: 1,
            original_module,
            def,
        }
    }

    pub fn identity(&self) -> &DocIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn id(&self) -> &str {
        self.identity.id()
    }

    pub fn aliases(&self) -> &[String] {
        self.identity.aliases()
    }

    pub fn module_id(&self) -> &str {
        self.identity.module_id()
    }

    pub fn kind(&self) -> DocKind {
        self.def.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassLikeDef, HeritageInfo};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_identity_is_derived_from_name() {
        let identity = DocIdentity::new("core/index", "Widget");
        assert_eq!(identity.name(), "Widget");
        assert_eq!(identity.id(), "core/index/Widget");
        assert_eq!(
            identity.aliases(),
            &["Widget".to_string(), "core/index/Widget".to_string()]
        );
    }

    #[test]
    fn test_doc_kind_tags() {
        assert_eq!(DocKind::TypeAlias.to_string(), "type-alias");
        assert_eq!(DocKind::Var.as_str(), "var");
    }

    #[test]
    fn test_serialize_class_document() {
        let mut class_def = ClassLikeDef::default();
        class_def.implements_clauses.push(HeritageInfo::new("Runnable", "Runnable"));
        let doc = ApiDoc::new(
            DocIdentity::new("index", "Task"),
            ApiDocDef::Class { class_def },
        );

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["docType"], json!("class"));
        assert_eq!(value["id"], json!("index/Task"));
        assert_eq!(value["aliases"], json!(["Task", "index/Task"]));
        assert_eq!(value["moduleId"], json!("index"));
        assert_eq!(
            value["classDef"]["implementsClauses"][0]["name"],
            json!("Runnable")
        );
        assert_eq!(value["startingLine"], json!(1));

        let back: ApiDoc = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_injectable_reference_detection() {
        let marker = ApiDocDef::Const {
            variable_def: VariableDef::injectable_reference(),
        };
        assert!(marker.is_injectable_reference());
        assert_eq!(marker.kind(), DocKind::Const);

        let plain = ApiDocDef::variable(VariableKind::Const, VariableDef::new("42"));
        assert!(!plain.is_injectable_reference());
    }
}
