//! Syntax-only type checker
//!
//! Annotations are taken as written. Unannotated declarations are inferred
//! from their initializers and return statements, following TypeScript's
//! widening rules: `const` keeps literal types, mutable bindings widen them.
//! Anything that needs real type information (calls, member access, awaited
//! values) resolves to `any`.

use super::printer::pattern_name;
use super::{
    pat_annotation, type_ann, CheckedType, LiteralType, Node, NodeKind, Signature, SignatureParam,
    TypeChecker,
};
use crate::diagnostics::ApiDocResult;
use crate::symbols::{DeclNode, Declaration, ModuleScope};
use crate::utils::swc::{format_number, prop_name_str, str_value, ParsedModule};
use deno_ast::swc::ast as swc_ast;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::trace;

/// Depth limit when following identifiers through other declarations
const MAX_INFERENCE_DEPTH: usize = 16;

/// Type checker answering from syntax alone
#[derive(Debug, Default)]
pub struct SyntacticChecker<'a> {
    locals: HashMap<PathBuf, IndexMap<String, Vec<Declaration<'a>>>>,
    /// Bindings whose type is being inferred, innermost last
    visiting: RefCell<Vec<(PathBuf, String)>>,
}

impl<'a> SyntacticChecker<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a checker that can see the top-level bindings of `scopes`
    pub fn from_scopes<'s>(scopes: impl IntoIterator<Item = &'s ModuleScope<'a>>) -> Self
    where
        'a: 's,
    {
        let mut checker = Self::new();
        for scope in scopes {
            checker.add_scope(scope);
        }
        checker
    }

    pub fn add_scope(&mut self, scope: &ModuleScope<'a>) {
        self.locals
            .insert(scope.file.path().to_path_buf(), scope.locals.clone());
    }

    fn lookup(&self, file: &ParsedModule, name: &str) -> Option<&[Declaration<'a>]> {
        self.locals
            .get(file.path())
            .and_then(|locals| locals.get(name))
            .map(Vec::as_slice)
    }

    fn annotated(file: &'a ParsedModule, ty: &'a swc_ast::TsType) -> CheckedType<'a> {
        CheckedType::Annotated { file, ty }
    }

    /// Type of an identifier used as a value
    fn infer_ident(
        &self,
        file: &'a ParsedModule,
        ident: &swc_ast::Ident,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        let name = ident.sym.as_ref();
        match name {
            "undefined" => return Ok(CheckedType::Intrinsic("undefined")),
            "NaN" | "Infinity" => return Ok(CheckedType::Intrinsic("number")),
            _ => {}
        }
        let Some(declarations) = self.lookup(file, name) else {
            return Ok(CheckedType::any());
        };
        let key = (file.path().to_path_buf(), name.to_string());
        if depth >= MAX_INFERENCE_DEPTH || self.visiting.borrow().contains(&key) {
            trace!(%name, depth, "recursive reference resolves to any");
            return Ok(CheckedType::any());
        }
        self.visiting.borrow_mut().push(key);
        let ty = self.infer_declarations(file, name, declarations, depth + 1);
        self.visiting.borrow_mut().pop();
        ty
    }

    /// Type of the first value declaration among `declarations`
    fn infer_declarations(
        &self,
        file: &'a ParsedModule,
        name: &str,
        declarations: &[Declaration<'a>],
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        for decl in declarations {
            match decl.node {
                DeclNode::Class { .. } | DeclNode::Enum(_) | DeclNode::Namespace(_) => {
                    return Ok(CheckedType::Query(name.to_string()));
                }
                DeclNode::Function { function, .. } => {
                    return self.function_signature(file, function, depth);
                }
                DeclNode::Variable {
                    kind,
                    declarator,
                    binding,
                } => {
                    return self.variable_type(file, kind, declarator, binding, depth);
                }
                DeclNode::ExportExpression(expr) => {
                    return self.infer_expr(file, expr, depth);
                }
                DeclNode::Interface(_) | DeclNode::TypeAlias(_) => {}
            }
        }
        Ok(CheckedType::any())
    }

    fn variable_type(
        &self,
        file: &'a ParsedModule,
        kind: swc_ast::VarDeclKind,
        declarator: &'a swc_ast::VarDeclarator,
        binding: Option<&'a swc_ast::BindingIdent>,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        // Destructured elements need the initializer's member types
        if let Some(binding) = binding {
            return Ok(match type_ann(&binding.type_ann) {
                Some(ty) => Self::annotated(file, ty),
                None => CheckedType::any(),
            });
        }
        if let Some(ty) = pat_annotation(&declarator.name) {
            return Ok(Self::annotated(file, ty));
        }
        let Some(init) = declarator.init.as_deref() else {
            return Ok(CheckedType::any());
        };
        let ty = self.infer_expr(file, init, depth)?;
        Ok(match kind {
            swc_ast::VarDeclKind::Const => ty,
            swc_ast::VarDeclKind::Let | swc_ast::VarDeclKind::Var => ty.widen(),
        })
    }

    /// Type of an expression
    fn infer_expr(
        &self,
        file: &'a ParsedModule,
        expr: &'a swc_ast::Expr,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        use swc_ast::Expr;
        let ty = match expr {
            Expr::Lit(lit) => match lit {
                swc_ast::Lit::Str(s) => CheckedType::Literal(LiteralType::String(str_value(s))),
                swc_ast::Lit::Num(n) => {
                    CheckedType::Literal(LiteralType::Number(format_number(n.value)))
                }
                swc_ast::Lit::Bool(b) => CheckedType::Literal(LiteralType::Boolean(b.value)),
                swc_ast::Lit::BigInt(b) => {
                    CheckedType::Literal(LiteralType::BigInt(format!("{}n", b.value)))
                }
                swc_ast::Lit::Null(_) => CheckedType::Intrinsic("null"),
                swc_ast::Lit::Regex(_) => CheckedType::Reference {
                    name: "RegExp".to_string(),
                    args: vec![],
                },
                swc_ast::Lit::JSXText(_) => CheckedType::Intrinsic("string"),
            },
            Expr::Tpl(_) | Expr::TaggedTpl(_) => CheckedType::Intrinsic("string"),
            Expr::Ident(ident) => self.infer_ident(file, ident, depth)?,
            Expr::Array(array) => {
                let mut elems = Vec::new();
                for elem in array.elems.iter().flatten() {
                    let ty = self.infer_expr(file, &elem.expr, depth)?.widen();
                    elems.push(if elem.spread.is_some() {
                        CheckedType::any()
                    } else {
                        ty
                    });
                }
                if elems.is_empty() {
                    CheckedType::Array(Box::new(CheckedType::any()))
                } else {
                    CheckedType::Array(Box::new(CheckedType::union(elems)))
                }
            }
            Expr::Object(object) => self.infer_object(file, object, depth)?,
            Expr::Fn(f) => self.function_signature(file, &f.function, depth)?,
            Expr::Arrow(arrow) => self.arrow_signature(file, arrow, depth)?,
            Expr::New(new) => match new.callee.as_ref() {
                Expr::Ident(callee) => CheckedType::Reference {
                    name: callee.sym.to_string(),
                    args: new
                        .type_args
                        .as_ref()
                        .map(|args| {
                            args.params
                                .iter()
                                .map(|p| Self::annotated(file, p))
                                .collect()
                        })
                        .unwrap_or_default(),
                },
                _ => CheckedType::any(),
            },
            Expr::Unary(unary) => match unary.op {
                swc_ast::UnaryOp::Bang | swc_ast::UnaryOp::Delete => {
                    CheckedType::Intrinsic("boolean")
                }
                swc_ast::UnaryOp::TypeOf => CheckedType::Intrinsic("string"),
                swc_ast::UnaryOp::Void => CheckedType::Intrinsic("undefined"),
                swc_ast::UnaryOp::Minus => match unary.arg.as_ref() {
                    Expr::Lit(swc_ast::Lit::Num(n)) => {
                        CheckedType::Literal(LiteralType::Number(format_number(-n.value)))
                    }
                    _ => CheckedType::Intrinsic("number"),
                },
                swc_ast::UnaryOp::Plus | swc_ast::UnaryOp::Tilde => {
                    CheckedType::Intrinsic("number")
                }
            },
            Expr::Update(_) => CheckedType::Intrinsic("number"),
            Expr::Bin(bin) => self.infer_binary(file, bin, depth)?,
            Expr::Paren(paren) => self.infer_expr(file, &paren.expr, depth)?,
            Expr::Seq(seq) => match seq.exprs.last() {
                Some(last) => self.infer_expr(file, last, depth)?,
                None => CheckedType::any(),
            },
            Expr::Cond(cond) => CheckedType::union(vec![
                self.infer_expr(file, &cond.cons, depth)?,
                self.infer_expr(file, &cond.alt, depth)?,
            ]),
            Expr::TsAs(as_expr) => Self::annotated(file, &as_expr.type_ann),
            Expr::TsTypeAssertion(assertion) => Self::annotated(file, &assertion.type_ann),
            Expr::TsConstAssertion(assertion) => self.infer_expr(file, &assertion.expr, depth)?,
            Expr::TsSatisfies(satisfies) => self.infer_expr(file, &satisfies.expr, depth)?,
            Expr::TsNonNull(non_null) => self.infer_expr(file, &non_null.expr, depth)?,
            Expr::Class(class) => match &class.ident {
                Some(ident) => CheckedType::Query(ident.sym.to_string()),
                None => CheckedType::any(),
            },
            Expr::Invalid(invalid) => {
                return Err(file.type_error(invalid.span.lo, "invalid expression"));
            }
            _ => CheckedType::any(),
        };
        Ok(ty)
    }

    fn infer_object(
        &self,
        file: &'a ParsedModule,
        object: &'a swc_ast::ObjectLit,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        let mut props: Vec<(String, CheckedType<'a>)> = Vec::new();
        for prop in &object.props {
            let swc_ast::PropOrSpread::Prop(prop) = prop else {
                continue;
            };
            let entry = match prop.as_ref() {
                swc_ast::Prop::KeyValue(kv) => match prop_name_str(&kv.key) {
                    Some(name) => Some((name, self.infer_expr(file, &kv.value, depth)?.widen())),
                    None => None,
                },
                swc_ast::Prop::Shorthand(ident) => Some((
                    ident.sym.to_string(),
                    self.infer_ident(file, ident, depth)?.widen(),
                )),
                swc_ast::Prop::Method(method) => match prop_name_str(&method.key) {
                    Some(name) => Some((name, self.function_signature(file, &method.function, depth)?)),
                    None => None,
                },
                swc_ast::Prop::Getter(getter) => prop_name_str(&getter.key).map(|name| {
                    let ty = match type_ann(&getter.type_ann) {
                        Some(ty) => Self::annotated(file, ty),
                        None => CheckedType::any(),
                    };
                    (name, ty)
                }),
                swc_ast::Prop::Setter(_) | swc_ast::Prop::Assign(_) => None,
            };
            if let Some((name, ty)) = entry {
                match props.iter_mut().find(|(existing, _)| *existing == name) {
                    Some(slot) => slot.1 = ty,
                    None => props.push((name, ty)),
                }
            }
        }
        Ok(CheckedType::Object(props))
    }

    fn infer_binary(
        &self,
        file: &'a ParsedModule,
        bin: &'a swc_ast::BinExpr,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        use swc_ast::BinaryOp::*;
        Ok(match bin.op {
            EqEq | NotEq | EqEqEq | NotEqEq | Lt | LtEq | Gt | GtEq | In | InstanceOf => {
                CheckedType::Intrinsic("boolean")
            }
            Add => {
                let left = self.infer_expr(file, &bin.left, depth)?.widen();
                let right = self.infer_expr(file, &bin.right, depth)?.widen();
                let is = |ty: &CheckedType<'_>, name: &str| {
                    matches!(ty, CheckedType::Intrinsic(n) if *n == name)
                };
                if is(&left, "string") || is(&right, "string") {
                    CheckedType::Intrinsic("string")
                } else if is(&left, "number") && is(&right, "number") {
                    CheckedType::Intrinsic("number")
                } else if is(&left, "bigint") && is(&right, "bigint") {
                    CheckedType::Intrinsic("bigint")
                } else {
                    CheckedType::any()
                }
            }
            Sub | Mul | Div | Mod | Exp | BitOr | BitAnd | BitXor | LShift | RShift
            | ZeroFillRShift => CheckedType::Intrinsic("number"),
            LogicalAnd | LogicalOr | NullishCoalescing => CheckedType::union(vec![
                self.infer_expr(file, &bin.left, depth)?,
                self.infer_expr(file, &bin.right, depth)?,
            ]),
        })
    }

    fn signature_params(
        &self,
        file: &'a ParsedModule,
        pats: impl Iterator<Item = &'a swc_ast::Pat>,
        depth: usize,
    ) -> ApiDocResult<Vec<SignatureParam<'a>>> {
        let mut params = Vec::new();
        for pat in pats {
            let optional = match pat {
                swc_ast::Pat::Ident(i) => i.id.optional,
                swc_ast::Pat::Assign(_) => true,
                _ => false,
            };
            params.push(SignatureParam {
                name: pattern_name(pat),
                optional,
                rest: matches!(pat, swc_ast::Pat::Rest(_)),
                ty: self.param_type(file, pat, depth)?,
            });
        }
        Ok(params)
    }

    fn param_type(
        &self,
        file: &'a ParsedModule,
        pat: &'a swc_ast::Pat,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        if let Some(ty) = pat_annotation(pat) {
            return Ok(Self::annotated(file, ty));
        }
        Ok(match pat {
            swc_ast::Pat::Assign(assign) => self.infer_expr(file, &assign.right, depth)?.widen(),
            swc_ast::Pat::Rest(_) => CheckedType::Array(Box::new(CheckedType::any())),
            _ => CheckedType::any(),
        })
    }

    fn function_signature(
        &self,
        file: &'a ParsedModule,
        function: &'a swc_ast::Function,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        Ok(CheckedType::Signature(Box::new(Signature {
            type_params: type_param_names(function.type_params.as_deref()),
            params: self.signature_params(file, function.params.iter().map(|p| &p.pat), depth)?,
            return_type: self.function_return(file, function, depth)?,
        })))
    }

    fn arrow_signature(
        &self,
        file: &'a ParsedModule,
        arrow: &'a swc_ast::ArrowExpr,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        let return_type = match type_ann(&arrow.return_type) {
            Some(ty) => Self::annotated(file, ty),
            None => {
                let inferred = match arrow.body.as_ref() {
                    swc_ast::BlockStmtOrExpr::BlockStmt(block) => {
                        self.block_return(file, block, depth)?
                    }
                    swc_ast::BlockStmtOrExpr::Expr(expr) => {
                        self.infer_expr(file, expr, depth)?.widen()
                    }
                };
                promise_if(arrow.is_async, inferred)
            }
        };
        Ok(CheckedType::Signature(Box::new(Signature {
            type_params: type_param_names(arrow.type_params.as_deref()),
            params: self.signature_params(file, arrow.params.iter(), depth)?,
            return_type,
        })))
    }

    /// Return type of a function: annotation, else inferred from the body
    fn function_return(
        &self,
        file: &'a ParsedModule,
        function: &'a swc_ast::Function,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        if let Some(ty) = type_ann(&function.return_type) {
            return Ok(Self::annotated(file, ty));
        }
        let Some(body) = &function.body else {
            return Ok(CheckedType::any());
        };
        if function.is_generator {
            return Ok(CheckedType::any());
        }
        let inferred = self.block_return(file, body, depth)?;
        Ok(promise_if(function.is_async, inferred))
    }

    fn block_return(
        &self,
        file: &'a ParsedModule,
        block: &'a swc_ast::BlockStmt,
        depth: usize,
    ) -> ApiDocResult<CheckedType<'a>> {
        let mut returns = Vec::new();
        collect_returns(&block.stmts, &mut returns);
        if returns.is_empty() {
            return Ok(CheckedType::Intrinsic("void"));
        }
        let mut types = Vec::new();
        for ret in returns {
            types.push(match ret {
                Some(expr) => self.infer_expr(file, expr, depth)?.widen(),
                None => CheckedType::Intrinsic("undefined"),
            });
        }
        Ok(match CheckedType::union(types) {
            CheckedType::Intrinsic("undefined") => CheckedType::Intrinsic("void"),
            other => other,
        })
    }
}

impl<'a> TypeChecker<'a> for SyntacticChecker<'a> {
    fn type_from_type_node(
        &self,
        file: &'a ParsedModule,
        node: &'a swc_ast::TsType,
    ) -> ApiDocResult<CheckedType<'a>> {
        Ok(Self::annotated(file, node))
    }

    fn type_at_location(&self, node: &Node<'a>) -> ApiDocResult<CheckedType<'a>> {
        let file = node.file;
        if let Some(ty) = node.annotation() {
            return Ok(Self::annotated(file, ty));
        }
        match node.kind {
            NodeKind::TypeAliasTarget(ty) | NodeKind::TypeNode(ty) => Ok(Self::annotated(file, ty)),
            NodeKind::Variable {
                kind,
                declarator,
                binding,
            } => self.variable_type(file, kind, declarator, binding, 0),
            NodeKind::Function(function) => self.function_return(file, function, 0),
            NodeKind::Param(pat) => self.param_type(file, pat, 0),
            NodeKind::FnParam(swc_ast::TsFnParam::Rest(_)) => {
                Ok(CheckedType::Array(Box::new(CheckedType::any())))
            }
            NodeKind::ParamProperty(prop) => match &prop.param {
                swc_ast::TsParamPropParam::Assign(assign) => {
                    Ok(self.infer_expr(file, &assign.right, 0)?.widen())
                }
                swc_ast::TsParamPropParam::Ident(_) => Ok(CheckedType::any()),
            },
            NodeKind::TypeParam(param) => Ok(CheckedType::Reference {
                name: param.name.sym.to_string(),
                args: vec![],
            }),
            NodeKind::ClassProp(prop) => match prop.value.as_deref() {
                Some(value) if prop.readonly => self.infer_expr(file, value, 0),
                Some(value) => Ok(self.infer_expr(file, value, 0)?.widen()),
                None => Ok(CheckedType::any()),
            },
            NodeKind::EnumMember { decl, member } => Ok(CheckedType::Reference {
                name: format!(
                    "{}.{}",
                    decl.id.sym,
                    crate::symbols::enum_member_name(member)
                ),
                args: vec![],
            }),
            NodeKind::Class { ident, .. } => Ok(CheckedType::Query(
                ident
                    .map(|i| i.sym.to_string())
                    .unwrap_or_else(|| "default".to_string()),
            )),
            NodeKind::Expr(expr) => self.infer_expr(file, expr, 0),
            NodeKind::FnParam(_)
            | NodeKind::PropertySignature(_)
            | NodeKind::MethodSignature(_)
            | NodeKind::GetterSignature(_)
            | NodeKind::CallSignature(_)
            | NodeKind::ConstructSignature(_)
            | NodeKind::IndexSignature(_) => Ok(CheckedType::any()),
        }
    }
}

fn type_param_names(decl: Option<&swc_ast::TsTypeParamDecl>) -> Vec<String> {
    decl.map(|d| d.params.iter().map(|p| p.name.sym.to_string()).collect())
        .unwrap_or_default()
}

fn promise_if<'a>(is_async: bool, ty: CheckedType<'a>) -> CheckedType<'a> {
    if is_async {
        CheckedType::Reference {
            name: "Promise".to_string(),
            args: vec![ty],
        }
    } else {
        ty
    }
}

/// Collect `return` arguments of a function body, skipping nested functions
fn collect_returns<'a>(stmts: &'a [swc_ast::Stmt], out: &mut Vec<Option<&'a swc_ast::Expr>>) {
    for stmt in stmts {
        collect_stmt_returns(stmt, out);
    }
}

fn collect_stmt_returns<'a>(stmt: &'a swc_ast::Stmt, out: &mut Vec<Option<&'a swc_ast::Expr>>) {
    use swc_ast::Stmt;
    match stmt {
        Stmt::Return(ret) => out.push(ret.arg.as_deref()),
        Stmt::Block(block) => collect_returns(&block.stmts, out),
        Stmt::If(if_stmt) => {
            collect_stmt_returns(&if_stmt.cons, out);
            if let Some(alt) = &if_stmt.alt {
                collect_stmt_returns(alt, out);
            }
        }
        Stmt::For(s) => collect_stmt_returns(&s.body, out),
        Stmt::ForIn(s) => collect_stmt_returns(&s.body, out),
        Stmt::ForOf(s) => collect_stmt_returns(&s.body, out),
        Stmt::While(s) => collect_stmt_returns(&s.body, out),
        Stmt::DoWhile(s) => collect_stmt_returns(&s.body, out),
        Stmt::Labeled(s) => collect_stmt_returns(&s.body, out),
        Stmt::Try(s) => {
            collect_returns(&s.block.stmts, out);
            if let Some(handler) = &s.handler {
                collect_returns(&handler.body.stmts, out);
            }
            if let Some(finalizer) = &s.finalizer {
                collect_returns(&finalizer.stmts, out);
            }
        }
        Stmt::Switch(s) => {
            for case in &s.cases {
                collect_returns(&case.cons, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::TypeFormatFlags;
    use crate::utils::swc::parse_typescript_source;
    use pretty_assertions::assert_eq;

    /// Type text of the exported binding `name`
    fn type_of(source: &str, name: &str) -> String {
        let parsed = parse_typescript_source("/project/src/index.ts", source).unwrap();
        let scope = ModuleScope::collect(&parsed).unwrap();
        let checker = SyntacticChecker::from_scopes([&scope]);
        let decl = scope.locals[name][0];
        let kind = match decl.node {
            DeclNode::Variable {
                kind,
                declarator,
                binding,
            } => NodeKind::Variable {
                kind,
                declarator,
                binding,
            },
            DeclNode::Function { function, .. } => NodeKind::Function(function),
            DeclNode::ExportExpression(expr) => NodeKind::Expr(expr),
            other => panic!("unexpected declaration {:?}", other.kind()),
        };
        let ty = checker
            .type_at_location(&Node::new(&parsed, kind))
            .unwrap();
        checker.type_to_string(&ty, TypeFormatFlags::default())
    }

    #[test]
    fn test_const_keeps_literal() {
        assert_eq!(type_of("export const answer = 42;", "answer"), "42");
        assert_eq!(type_of("export const name = 'forge';", "name"), "\"forge\"");
        assert_eq!(type_of("export const neg = -1;", "neg"), "-1");
    }

    #[test]
    fn test_let_widens() {
        assert_eq!(type_of("export let count = 42;", "count"), "number");
        assert_eq!(type_of("export var flag = true;", "flag"), "boolean");
        assert_eq!(type_of("export let nothing;", "nothing"), "any");
    }

    #[test]
    fn test_annotation_wins() {
        assert_eq!(
            type_of("export const ids: Array<string> = [];", "ids"),
            "Array<string>"
        );
    }

    #[test]
    fn test_object_literal_prints_single_line() {
        assert_eq!(
            type_of("export const point = { x: 1, y: 'a' };", "point"),
            "{ x: number; y: string; }"
        );
    }

    #[test]
    fn test_array_and_new() {
        assert_eq!(type_of("export const list = [1, 'a'];", "list"), "(number | string)[]");
        assert_eq!(
            type_of("export const cache = new Map<string, number>();", "cache"),
            "Map<string, number>"
        );
    }

    #[test]
    fn test_identifier_follows_declarations() {
        let source = r#"
const base = 10;
class Service {}
export const copy = base;
export const ctor = Service;
"#;
        assert_eq!(type_of(source, "copy"), "10");
        assert_eq!(type_of(source, "ctor"), "typeof Service");
    }

    #[test]
    fn test_function_return_inference() {
        let source = r#"
export function pick(flag: boolean) {
    if (flag) {
        return 1;
    }
    return 'none';
}
export function log(message: string) {
    console.log(message);
}
export async function load() {
    return true;
}
export declare function external(): void;
export declare function implicit();
"#;
        assert_eq!(type_of(source, "pick"), "number | string");
        assert_eq!(type_of(source, "log"), "void");
        assert_eq!(type_of(source, "load"), "Promise<boolean>");
        assert_eq!(type_of(source, "external"), "void");
        assert_eq!(type_of(source, "implicit"), "any");
    }

    #[test]
    fn test_recursive_references_resolve_to_any() {
        assert_eq!(
            type_of("export function f() { return f; }", "f"),
            "() => any"
        );

        let mutual = r#"
export function a() { return b; }
export function b() { return a; }
"#;
        assert_eq!(type_of(mutual, "a"), "() => () => any");

        let through_variable = r#"
export function make() { return holder; }
const holder = make;
"#;
        assert_eq!(type_of(through_variable, "make"), "() => any");

        let aliases = r#"
export const first = second;
export const second = first;
"#;
        assert_eq!(type_of(aliases, "first"), "any");
    }

    #[test]
    fn test_repeated_reference_is_not_a_cycle() {
        let source = r#"
const unit = 1;
export const pair = [unit, unit];
"#;
        assert_eq!(type_of(source, "pair"), "number[]");
    }

    #[test]
    fn test_arrow_function_signature() {
        assert_eq!(
            type_of(
                "export const scale = (a: number, b = 2) => a * b;",
                "scale"
            ),
            "(a: number, b?: number) => number"
        );
    }

    #[test]
    fn test_unknown_expressions_are_any() {
        assert_eq!(type_of("export const value = compute();", "value"), "any");
        assert_eq!(type_of("export default window.location;", "default"), "any");
    }

    #[test]
    fn test_as_expression_uses_asserted_type() {
        assert_eq!(
            type_of("export const config = {} as Record<string, unknown>;", "config"),
            "Record<string, unknown>"
        );
    }
}
