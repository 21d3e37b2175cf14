//! Decorator documentation
//!
//! Decorators are recorded as written: the decorator name, the source text
//! of each argument, and whether it was applied as a call (`@Injectable()`)
//! or bare (`@sealed`).

use crate::utils::swc::ParsedModule;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::Spanned;
use serde::{Deserialize, Serialize};

/// A decorator applied to a class or member
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratorDoc {
    /// Decorator name without `@` (`Component`, `core.Injectable`)
    pub name: String,

    /// Source text of each argument
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,

    /// Applied with parentheses
    #[serde(default)]
    pub is_call_expression: bool,
}

impl DecoratorDoc {
    /// Create a bare decorator
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: vec![],
            is_call_expression: false,
        }
    }

    /// Build from a decorator node
    pub fn from_decorator(file: &ParsedModule, decorator: &swc_ast::Decorator) -> Self {
        match decorator.expr.as_ref() {
            swc_ast::Expr::Call(call) => {
                Self {
                    name: file.text_for_span(call.callee.span()).to_string(),
                    arguments: call
                        .args
                        .iter()
                        .map(|arg| file.text_for_span(arg.span()).to_string())
                        .collect(),
                    is_call_expression: true,
                }
            }
            expr => Self::new(file.text_for_span(expr.span())),
        }
    }
}

/// Decorators of a node, in source order
pub fn extract_decorators(file: &ParsedModule, decorators: &[swc_ast::Decorator]) -> Vec<DecoratorDoc> {
    decorators
        .iter()
        .map(|d| DecoratorDoc::from_decorator(file, d))
        .collect()
}
