//! Function documentation
//!
//! A function symbol may have several declarations: overload signatures
//! followed by one implementation. The implementation (or the first
//! declaration when there is none) documents the function; every other
//! declaration becomes an overload record.

use crate::params::{format_params, ParamDoc};
use serde::{Deserialize, Serialize};

/// Shared capability of documents that take parameters
pub trait Parameterized {
    /// Ordered formal parameters
    fn parameters(&self) -> &[ParamDoc];

    /// Bracketed type parameter list (`<T, U>`), empty when not generic
    fn type_parameters(&self) -> &str;

    /// `<T>(a: T, b?: string)`
    fn signature_text(&self) -> String {
        format!("{}{}", self.type_parameters(), format_params(self.parameters()))
    }
}

/// One overload signature of a function or method
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverloadDoc {
    #[serde(default)]
    pub parameters: Vec<ParamDoc>,

    #[serde(default)]
    pub type_parameters: String,

    /// Rendered return type
    #[serde(rename = "type", default)]
    pub return_type: String,

    /// Leading documentation comment of this signature
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub starting_line: usize,

    #[serde(default)]
    pub ending_line: usize,
}

impl Parameterized for OverloadDoc {
    fn parameters(&self) -> &[ParamDoc] {
        &self.parameters
    }

    fn type_parameters(&self) -> &str {
        &self.type_parameters
    }
}

/// Payload of a `function` document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    /// Parameters of the primary declaration
    #[serde(default)]
    pub parameters: Vec<ParamDoc>,

    /// Type parameters of the primary declaration
    #[serde(default)]
    pub type_parameters: String,

    /// Rendered return type of the primary declaration
    #[serde(rename = "type", default)]
    pub return_type: String,

    #[serde(default)]
    pub is_async: bool,

    #[serde(default)]
    pub is_generator: bool,

    /// Every other declaration, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overloads: Vec<OverloadDoc>,
}

impl Parameterized for FunctionDef {
    fn parameters(&self) -> &[ParamDoc] {
        &self.parameters
    }

    fn type_parameters(&self) -> &str {
        &self.type_parameters
    }
}
