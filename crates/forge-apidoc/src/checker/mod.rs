//! Type checker collaborator
//!
//! Documentation records need "the type of this node" in printable form. The
//! [`TypeChecker`] trait is the seam for that query; [`SyntacticChecker`] is
//! the built-in implementation that answers from syntax alone: annotations
//! are reprinted from the AST and unannotated nodes are inferred from their
//! initializers and return statements.

pub mod printer;
pub mod syntactic;

pub use printer::TypePrinter;
pub use syntactic::SyntacticChecker;

use crate::diagnostics::ApiDocResult;
use crate::utils::swc::ParsedModule;
use bitflags::bitflags;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::{BytePos, Spanned};

bitflags! {
    /// Formatting policy for type-to-string queries
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFormatFlags: u32 {
        /// Never shorten long type text with `...`
        const NO_TRUNCATION = 1 << 0;
        /// Print object-literal types one member per line
        const MULTILINE_OBJECT_LITERALS = 1 << 1;
        /// Keep `import("...")` qualification on imported types
        const USE_FULLY_QUALIFIED_TYPE = 1 << 2;
    }
}

impl Default for TypeFormatFlags {
    fn default() -> Self {
        TypeFormatFlags::NO_TRUNCATION
            | TypeFormatFlags::MULTILINE_OBJECT_LITERALS
            | TypeFormatFlags::USE_FULLY_QUALIFIED_TYPE
    }
}

/// Longest type text printed without `NO_TRUNCATION`
pub const TRUNCATION_LENGTH: usize = 160;

/// A node whose type can be queried
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    /// The source file the node belongs to
    pub file: &'a ParsedModule,
    /// What the node is
    pub kind: NodeKind<'a>,
}

/// The syntactic shapes the host asks types for
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// The right-hand side of a type alias declaration
    TypeAliasTarget(&'a swc_ast::TsType),
    /// Any other type node (a return type, a type argument)
    TypeNode(&'a swc_ast::TsType),
    /// A variable declarator, or one identifier its pattern binds
    Variable {
        kind: swc_ast::VarDeclKind,
        declarator: &'a swc_ast::VarDeclarator,
        binding: Option<&'a swc_ast::BindingIdent>,
    },
    /// A function or method; its type is the return type
    Function(&'a swc_ast::Function),
    /// A function parameter pattern
    Param(&'a swc_ast::Pat),
    /// A parameter of a signature (interface method, function type)
    FnParam(&'a swc_ast::TsFnParam),
    /// A constructor parameter property (`constructor(private x: T)`)
    ParamProperty(&'a swc_ast::TsParamProp),
    /// A type parameter declaration
    TypeParam(&'a swc_ast::TsTypeParam),
    /// A class property
    ClassProp(&'a swc_ast::ClassProp),
    /// Interface property signature
    PropertySignature(&'a swc_ast::TsPropertySignature),
    /// Interface method signature; its type is the return type
    MethodSignature(&'a swc_ast::TsMethodSignature),
    /// Interface getter signature
    GetterSignature(&'a swc_ast::TsGetterSignature),
    /// Call signature
    CallSignature(&'a swc_ast::TsCallSignatureDecl),
    /// Construct signature
    ConstructSignature(&'a swc_ast::TsConstructSignatureDecl),
    /// Index signature; its type is the value type
    IndexSignature(&'a swc_ast::TsIndexSignature),
    /// An enum member
    EnumMember {
        decl: &'a swc_ast::TsEnumDecl,
        member: &'a swc_ast::TsEnumMember,
    },
    /// A class declaration used as a value
    Class {
        ident: Option<&'a swc_ast::Ident>,
        class: &'a swc_ast::Class,
    },
    /// A bare expression (`export default <expr>`)
    Expr(&'a swc_ast::Expr),
}

impl<'a> Node<'a> {
    pub fn new(file: &'a ParsedModule, kind: NodeKind<'a>) -> Self {
        Self { file, kind }
    }

    /// The explicit type annotation written on the node, if any
    pub fn annotation(&self) -> Option<&'a swc_ast::TsType> {
        match self.kind {
            NodeKind::Variable {
                binding: Some(binding),
                ..
            } => type_ann(&binding.type_ann),
            NodeKind::Variable { declarator, .. } => pat_annotation(&declarator.name),
            NodeKind::Function(f) => type_ann(&f.return_type),
            NodeKind::Param(pat) => pat_annotation(pat),
            NodeKind::FnParam(param) => fn_param_annotation(param),
            NodeKind::ParamProperty(prop) => match &prop.param {
                swc_ast::TsParamPropParam::Ident(i) => type_ann(&i.type_ann),
                swc_ast::TsParamPropParam::Assign(a) => pat_annotation(&a.left),
            },
            NodeKind::ClassProp(p) => type_ann(&p.type_ann),
            NodeKind::PropertySignature(p) => type_ann(&p.type_ann),
            NodeKind::MethodSignature(m) => type_ann(&m.type_ann),
            NodeKind::GetterSignature(g) => type_ann(&g.type_ann),
            NodeKind::CallSignature(c) => type_ann(&c.type_ann),
            NodeKind::ConstructSignature(c) => type_ann(&c.type_ann),
            NodeKind::IndexSignature(i) => type_ann(&i.type_ann),
            NodeKind::TypeAliasTarget(_)
            | NodeKind::TypeNode(_)
            | NodeKind::TypeParam(_)
            | NodeKind::EnumMember { .. }
            | NodeKind::Class { .. }
            | NodeKind::Expr(_) => None,
        }
    }

    /// Start position of the node, used for error locations
    pub fn pos(&self) -> BytePos {
        match self.kind {
            NodeKind::TypeAliasTarget(t) | NodeKind::TypeNode(t) => t.span().lo,
            NodeKind::Variable {
                binding: Some(binding),
                ..
            } => binding.span.lo,
            NodeKind::Variable { declarator, .. } => declarator.span.lo,
            NodeKind::Function(f) => f.span.lo,
            NodeKind::Param(p) => p.span().lo,
            NodeKind::FnParam(p) => p.span().lo,
            NodeKind::ParamProperty(p) => p.span.lo,
            NodeKind::TypeParam(p) => p.span.lo,
            NodeKind::ClassProp(p) => p.span.lo,
            NodeKind::PropertySignature(p) => p.span.lo,
            NodeKind::MethodSignature(m) => m.span.lo,
            NodeKind::GetterSignature(g) => g.span.lo,
            NodeKind::CallSignature(c) => c.span.lo,
            NodeKind::ConstructSignature(c) => c.span.lo,
            NodeKind::IndexSignature(i) => i.span.lo,
            NodeKind::EnumMember { member, .. } => member.span.lo,
            NodeKind::Class { class, .. } => class.span.lo,
            NodeKind::Expr(e) => e.span().lo,
        }
    }
}

/// Unwrap an optional `TsTypeAnn` to the annotated type
pub fn type_ann(ann: &Option<Box<swc_ast::TsTypeAnn>>) -> Option<&swc_ast::TsType> {
    ann.as_deref().map(|a| &*a.type_ann)
}

/// The type annotation of a binding pattern
pub fn pat_annotation(pat: &swc_ast::Pat) -> Option<&swc_ast::TsType> {
    match pat {
        swc_ast::Pat::Ident(i) => type_ann(&i.type_ann),
        swc_ast::Pat::Array(a) => type_ann(&a.type_ann),
        swc_ast::Pat::Object(o) => type_ann(&o.type_ann),
        swc_ast::Pat::Rest(r) => type_ann(&r.type_ann).or_else(|| pat_annotation(&r.arg)),
        swc_ast::Pat::Assign(a) => pat_annotation(&a.left),
        swc_ast::Pat::Invalid(_) | swc_ast::Pat::Expr(_) => None,
    }
}

/// The type annotation of a signature parameter
pub fn fn_param_annotation(param: &swc_ast::TsFnParam) -> Option<&swc_ast::TsType> {
    match param {
        swc_ast::TsFnParam::Ident(i) => type_ann(&i.type_ann),
        swc_ast::TsFnParam::Array(a) => type_ann(&a.type_ann),
        swc_ast::TsFnParam::Rest(r) => type_ann(&r.type_ann).or_else(|| pat_annotation(&r.arg)),
        swc_ast::TsFnParam::Object(o) => type_ann(&o.type_ann),
    }
}

/// A literal type
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    Number(String),
    String(String),
    Boolean(bool),
    BigInt(String),
}

impl LiteralType {
    /// The primitive a literal widens to
    pub fn widened(&self) -> &'static str {
        match self {
            LiteralType::Number(_) => "number",
            LiteralType::String(_) => "string",
            LiteralType::Boolean(_) => "boolean",
            LiteralType::BigInt(_) => "bigint",
        }
    }
}

/// A type produced by a checker query
#[derive(Debug, Clone)]
pub enum CheckedType<'a> {
    /// The type written in an annotation, printed from the AST
    Annotated {
        file: &'a ParsedModule,
        ty: &'a swc_ast::TsType,
    },
    /// `number`, `string`, `any`, `void`, ...
    Intrinsic(&'static str),
    /// `42`, `"a"`, `true`
    Literal(LiteralType),
    /// A named type, possibly generic
    Reference {
        name: String,
        args: Vec<CheckedType<'a>>,
    },
    /// `typeof X`
    Query(String),
    /// `T[]`
    Array(Box<CheckedType<'a>>),
    /// `A | B`
    Union(Vec<CheckedType<'a>>),
    /// Type of an object literal expression
    Object(Vec<(String, CheckedType<'a>)>),
    /// Type of a function value
    Signature(Box<Signature<'a>>),
}

/// A callable type
#[derive(Debug, Clone)]
pub struct Signature<'a> {
    pub type_params: Vec<String>,
    pub params: Vec<SignatureParam<'a>>,
    pub return_type: CheckedType<'a>,
}

/// A parameter of a callable type
#[derive(Debug, Clone)]
pub struct SignatureParam<'a> {
    pub name: String,
    pub optional: bool,
    pub rest: bool,
    pub ty: CheckedType<'a>,
}

impl<'a> CheckedType<'a> {
    pub fn any() -> Self {
        CheckedType::Intrinsic("any")
    }

    /// Replace literal types by their primitive
    pub fn widen(self) -> Self {
        match self {
            CheckedType::Literal(lit) => CheckedType::Intrinsic(lit.widened()),
            CheckedType::Union(types) => {
                CheckedType::union(types.into_iter().map(CheckedType::widen).collect())
            }
            other => other,
        }
    }

    /// Build a union, flattening nested unions and dropping duplicates
    ///
    /// A union containing `any` is `any`; a single member is returned as is.
    pub fn union(types: Vec<CheckedType<'a>>) -> Self {
        let mut flat: Vec<CheckedType<'a>> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        for ty in types {
            let members = match ty {
                CheckedType::Union(inner) => inner,
                other => vec![other],
            };
            for member in members {
                if matches!(member, CheckedType::Intrinsic("any")) {
                    return CheckedType::any();
                }
                let key = member.to_type_string(TypeFormatFlags::default());
                if !seen.contains(&key) {
                    seen.push(key);
                    flat.push(member);
                }
            }
        }
        match flat.len() {
            0 => CheckedType::Intrinsic("never"),
            1 => flat.remove(0),
            _ => CheckedType::Union(flat),
        }
    }

    /// Print the type
    pub fn to_type_string(&self, flags: TypeFormatFlags) -> String {
        let text = self.print(flags);
        if flags.contains(TypeFormatFlags::NO_TRUNCATION) || text.len() <= TRUNCATION_LENGTH {
            text
        } else {
            let mut cut = TRUNCATION_LENGTH - 3;
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &text[..cut])
        }
    }

    fn print(&self, flags: TypeFormatFlags) -> String {
        match self {
            CheckedType::Annotated { file, ty } => TypePrinter::new(file, flags).print(ty),
            CheckedType::Intrinsic(name) => name.to_string(),
            CheckedType::Literal(lit) => match lit {
                LiteralType::Number(n) | LiteralType::BigInt(n) => n.clone(),
                LiteralType::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
                LiteralType::Boolean(b) => b.to_string(),
            },
            CheckedType::Reference { name, args } => {
                if args.is_empty() {
                    name.clone()
                } else {
                    let args: Vec<String> = args.iter().map(|a| a.print(flags)).collect();
                    format!("{}<{}>", name, args.join(", "))
                }
            }
            CheckedType::Query(name) => format!("typeof {}", name),
            CheckedType::Array(elem) => match elem.as_ref() {
                CheckedType::Union(_) | CheckedType::Signature(_) => {
                    format!("({})[]", elem.print(flags))
                }
                _ => format!("{}[]", elem.print(flags)),
            },
            CheckedType::Union(types) => types
                .iter()
                .map(|t| match t {
                    CheckedType::Signature(_) => format!("({})", t.print(flags)),
                    _ => t.print(flags),
                })
                .collect::<Vec<_>>()
                .join(" | "),
            // Types of object literal expressions print on one line
            CheckedType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    let props: Vec<String> = props
                        .iter()
                        .map(|(name, ty)| format!("{}: {};", name, ty.print(flags)))
                        .collect();
                    format!("{{ {} }}", props.join(" "))
                }
            }
            CheckedType::Signature(sig) => {
                let type_params = if sig.type_params.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", sig.type_params.join(", "))
                };
                let params: Vec<String> = sig
                    .params
                    .iter()
                    .map(|p| {
                        format!(
                            "{}{}{}: {}",
                            if p.rest { "..." } else { "" },
                            p.name,
                            if p.optional { "?" } else { "" },
                            p.ty.print(flags)
                        )
                    })
                    .collect();
                format!(
                    "{}({}) => {}",
                    type_params,
                    params.join(", "),
                    sig.return_type.print(flags)
                )
            }
        }
    }
}

/// Type queries the documentation host relies on
///
/// Implementations are handed out as a shared handle for one parse pass.
pub trait TypeChecker<'a> {
    /// Resolve the type written by a type annotation
    fn type_from_type_node(
        &self,
        file: &'a ParsedModule,
        node: &'a swc_ast::TsType,
    ) -> ApiDocResult<CheckedType<'a>>;

    /// Resolve the type of a node that may carry no annotation
    fn type_at_location(&self, node: &Node<'a>) -> ApiDocResult<CheckedType<'a>>;

    /// Print a resolved type
    fn type_to_string(&self, ty: &CheckedType<'a>, flags: TypeFormatFlags) -> String {
        ty.to_type_string(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_union_flattens_and_dedupes() {
        let ty = CheckedType::union(vec![
            CheckedType::Intrinsic("string"),
            CheckedType::Union(vec![
                CheckedType::Intrinsic("number"),
                CheckedType::Intrinsic("string"),
            ]),
        ]);
        assert_eq!(ty.to_type_string(TypeFormatFlags::default()), "string | number");
    }

    #[test]
    fn test_union_with_any_is_any() {
        let ty = CheckedType::union(vec![CheckedType::Intrinsic("string"), CheckedType::any()]);
        assert_eq!(ty.to_type_string(TypeFormatFlags::default()), "any");
    }

    #[test]
    fn test_widen_literals() {
        let ty = CheckedType::Literal(LiteralType::Number("42".into()));
        assert_eq!(ty.clone().to_type_string(TypeFormatFlags::default()), "42");
        assert_eq!(ty.widen().to_type_string(TypeFormatFlags::default()), "number");
    }

    #[test]
    fn test_print_array_of_union() {
        let ty = CheckedType::Array(Box::new(CheckedType::Union(vec![
            CheckedType::Intrinsic("string"),
            CheckedType::Intrinsic("number"),
        ])));
        assert_eq!(ty.to_type_string(TypeFormatFlags::default()), "(string | number)[]");
    }

    #[test]
    fn test_print_signature() {
        let ty = CheckedType::Signature(Box::new(Signature {
            type_params: vec!["T".into()],
            params: vec![SignatureParam {
                name: "value".into(),
                optional: true,
                rest: false,
                ty: CheckedType::Reference {
                    name: "T".into(),
                    args: vec![],
                },
            }],
            return_type: CheckedType::Intrinsic("void"),
        }));
        assert_eq!(
            ty.to_type_string(TypeFormatFlags::default()),
            "<T>(value?: T) => void"
        );
    }

    #[test]
    fn test_truncation() {
        let long = CheckedType::Reference {
            name: "A".repeat(200),
            args: vec![],
        };
        let text = long.to_type_string(TypeFormatFlags::empty());
        assert_eq!(text.len(), TRUNCATION_LENGTH);
        assert!(text.ends_with("..."));
        let full = long.to_type_string(TypeFormatFlags::NO_TRUNCATION);
        assert_eq!(full.len(), 200);
    }
}
