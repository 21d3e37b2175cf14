//! Declaration classification
//!
//! Maps the merged declarations of an export symbol to the single
//! documentation kind its document is built as.

use crate::diagnostics::{ApiDocError, ApiDocResult};
use crate::node::DocKind;
use crate::symbols::{DeclNode, ExportSymbol};
use crate::variable::VariableKind;

/// Documentation kind of an export symbol
///
/// Precedence: class, interface, function, enum, type alias, then the
/// variable flavour of the first variable declaration. `export default`
/// of an expression documents as a `const`.
pub fn classify(symbol: &ExportSymbol<'_>, module_id: &str) -> ApiDocResult<DocKind> {
    let decls = &symbol.declarations;
    if decls.is_empty() {
        return Err(ApiDocError::classification(
            module_id,
            symbol.export_name(),
            "symbol has no declarations",
        ));
    }

    let any = |pred: fn(&DeclNode<'_>) -> bool| decls.iter().any(|d| pred(&d.node));

    if any(|n| matches!(n, DeclNode::Class { .. })) {
        return Ok(DocKind::Class);
    }
    if any(|n| matches!(n, DeclNode::Interface(_))) {
        return Ok(DocKind::Interface);
    }
    if any(|n| matches!(n, DeclNode::Function { .. })) {
        return Ok(DocKind::Function);
    }
    if any(|n| matches!(n, DeclNode::Enum(_))) {
        return Ok(DocKind::Enum);
    }
    if any(|n| matches!(n, DeclNode::TypeAlias(_))) {
        return Ok(DocKind::TypeAlias);
    }

    for decl in decls {
        match decl.node {
            DeclNode::Variable { kind, .. } => {
                return Ok(match VariableKind::from(kind) {
                    VariableKind::Const => DocKind::Const,
                    VariableKind::Let => DocKind::Let,
                    VariableKind::Var => DocKind::Var,
                });
            }
            DeclNode::ExportExpression(_) => return Ok(DocKind::Const),
            _ => {}
        }
    }

    let kinds: Vec<&str> = decls.iter().map(|d| d.kind().as_str()).collect();
    Err(ApiDocError::classification(
        module_id,
        symbol.export_name(),
        format!("unsupported declaration kinds: {}", kinds.join(", ")),
    ))
}
