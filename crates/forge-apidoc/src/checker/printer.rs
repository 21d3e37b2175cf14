//! Reprinting type annotations from the AST
//!
//! Comments never survive printing. Type literals print one member per line
//! (4-space indentation per nesting level) when
//! `MULTILINE_OBJECT_LITERALS` is set, and `{ a: T; b: U; }` otherwise.

use super::TypeFormatFlags;
use crate::utils::swc::{expr_to_name, format_number, prop_name_str, str_value, ParsedModule};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::Spanned;

const INDENT: &str = "    ";

/// Prints `TsType` nodes as TypeScript source
pub struct TypePrinter<'a> {
    file: &'a ParsedModule,
    flags: TypeFormatFlags,
}

impl<'a> TypePrinter<'a> {
    pub fn new(file: &'a ParsedModule, flags: TypeFormatFlags) -> Self {
        Self { file, flags }
    }

    /// Print a type at the top nesting level
    pub fn print(&self, ty: &swc_ast::TsType) -> String {
        self.print_type(ty, 0)
    }

    /// Print `<A, B>`
    pub fn print_type_args(&self, args: &swc_ast::TsTypeParamInstantiation) -> String {
        self.type_args(args, 0)
    }

    fn print_type(&self, ty: &swc_ast::TsType, indent: usize) -> String {
        match ty {
            swc_ast::TsType::TsKeywordType(kw) => keyword(kw.kind).to_string(),
            swc_ast::TsType::TsThisType(_) => "this".to_string(),
            swc_ast::TsType::TsTypeRef(r) => {
                let name = entity_name(&r.type_name);
                match &r.type_params {
                    Some(args) => format!("{}{}", name, self.type_args(args, indent)),
                    None => name,
                }
            }
            swc_ast::TsType::TsArrayType(arr) => {
                format!("{}[]", self.print_type(&arr.elem_type, indent))
            }
            swc_ast::TsType::TsTupleType(tuple) => {
                let elems: Vec<String> = tuple
                    .elem_types
                    .iter()
                    .map(|e| {
                        let ty = self.print_type(&e.ty, indent);
                        match &e.label {
                            Some(swc_ast::Pat::Ident(label)) => format!("{}: {}", label.id.sym, ty),
                            _ => ty,
                        }
                    })
                    .collect();
                format!("[{}]", elems.join(", "))
            }
            swc_ast::TsType::TsOptionalType(opt) => {
                format!("{}?", self.print_type(&opt.type_ann, indent))
            }
            swc_ast::TsType::TsRestType(rest) => {
                format!("...{}", self.print_type(&rest.type_ann, indent))
            }
            swc_ast::TsType::TsUnionOrIntersectionType(ui) => match ui {
                swc_ast::TsUnionOrIntersectionType::TsUnionType(u) => u
                    .types
                    .iter()
                    .map(|t| self.print_type(t, indent))
                    .collect::<Vec<_>>()
                    .join(" | "),
                swc_ast::TsUnionOrIntersectionType::TsIntersectionType(i) => i
                    .types
                    .iter()
                    .map(|t| self.print_type(t, indent))
                    .collect::<Vec<_>>()
                    .join(" & "),
            },
            swc_ast::TsType::TsParenthesizedType(p) => {
                format!("({})", self.print_type(&p.type_ann, indent))
            }
            swc_ast::TsType::TsLitType(lit) => match &lit.lit {
                swc_ast::TsLit::Str(s) => format!("\"{}\"", str_value(s).replace('"', "\\\"")),
                swc_ast::TsLit::Number(n) => format_number(n.value),
                swc_ast::TsLit::Bool(b) => b.value.to_string(),
                swc_ast::TsLit::BigInt(b) => self.file.text_for_span(b.span).to_string(),
                swc_ast::TsLit::Tpl(t) => self.file.text_for_span(t.span).to_string(),
            },
            swc_ast::TsType::TsFnOrConstructorType(f) => match f {
                swc_ast::TsFnOrConstructorType::TsFnType(f) => format!(
                    "{}({}) => {}",
                    f.type_params
                        .as_deref()
                        .map(|tp| self.type_param_decl(tp, indent))
                        .unwrap_or_default(),
                    self.fn_params(&f.params, indent),
                    self.print_type(&f.type_ann.type_ann, indent)
                ),
                swc_ast::TsFnOrConstructorType::TsConstructorType(c) => format!(
                    "{}new {}({}) => {}",
                    if c.is_abstract { "abstract " } else { "" },
                    c.type_params
                        .as_deref()
                        .map(|tp| self.type_param_decl(tp, indent))
                        .unwrap_or_default(),
                    self.fn_params(&c.params, indent),
                    self.print_type(&c.type_ann.type_ann, indent)
                ),
            },
            swc_ast::TsType::TsTypeLit(lit) => self.type_lit(&lit.members, indent),
            swc_ast::TsType::TsTypeQuery(q) => {
                let name = match &q.expr_name {
                    swc_ast::TsTypeQueryExpr::TsEntityName(e) => entity_name(e),
                    swc_ast::TsTypeQueryExpr::Import(i) => self.file.text_for_span(i.span).to_string(),
                };
                match &q.type_args {
                    Some(args) => format!("typeof {}{}", name, self.type_args(args, indent)),
                    None => format!("typeof {}", name),
                }
            }
            swc_ast::TsType::TsConditionalType(c) => format!(
                "{} extends {} ? {} : {}",
                self.print_type(&c.check_type, indent),
                self.print_type(&c.extends_type, indent),
                self.print_type(&c.true_type, indent),
                self.print_type(&c.false_type, indent)
            ),
            swc_ast::TsType::TsInferType(i) => format!("infer {}", i.type_param.name.sym),
            swc_ast::TsType::TsMappedType(m) => self.mapped_type(m, indent),
            swc_ast::TsType::TsIndexedAccessType(i) => format!(
                "{}[{}]",
                self.print_type(&i.obj_type, indent),
                self.print_type(&i.index_type, indent)
            ),
            swc_ast::TsType::TsTypeOperator(op) => {
                let keyword = match op.op {
                    swc_ast::TsTypeOperatorOp::KeyOf => "keyof",
                    swc_ast::TsTypeOperatorOp::Unique => "unique",
                    swc_ast::TsTypeOperatorOp::ReadOnly => "readonly",
                };
                format!("{} {}", keyword, self.print_type(&op.type_ann, indent))
            }
            swc_ast::TsType::TsImportType(import) => {
                let qualifier = import.qualifier.as_ref().map(entity_name);
                let args = import
                    .type_args
                    .as_deref()
                    .map(|a| self.type_args(a, indent))
                    .unwrap_or_default();
                let module = str_value(&import.arg);
                match qualifier {
                    Some(q) if self.flags.contains(TypeFormatFlags::USE_FULLY_QUALIFIED_TYPE) => {
                        format!("import(\"{}\").{}{}", module, q, args)
                    }
                    Some(q) => format!("{}{}", q, args),
                    None => format!("import(\"{}\")", module),
                }
            }
            swc_ast::TsType::TsTypePredicate(pred) => {
                let param = match &pred.param_name {
                    swc_ast::TsThisTypeOrIdent::TsThisType(_) => "this".to_string(),
                    swc_ast::TsThisTypeOrIdent::Ident(i) => i.sym.to_string(),
                };
                let asserts = if pred.asserts { "asserts " } else { "" };
                match &pred.type_ann {
                    Some(ann) => format!(
                        "{}{} is {}",
                        asserts,
                        param,
                        self.print_type(&ann.type_ann, indent)
                    ),
                    None => format!("{}{}", asserts, param),
                }
            }
        }
    }

    fn type_args(&self, args: &swc_ast::TsTypeParamInstantiation, indent: usize) -> String {
        let args: Vec<String> = args
            .params
            .iter()
            .map(|a| self.print_type(a, indent))
            .collect();
        format!("<{}>", args.join(", "))
    }

    fn type_param_decl(&self, decl: &swc_ast::TsTypeParamDecl, indent: usize) -> String {
        let params: Vec<String> = decl
            .params
            .iter()
            .map(|p| {
                let mut text = String::new();
                if p.is_const {
                    text.push_str("const ");
                }
                if p.is_in {
                    text.push_str("in ");
                }
                if p.is_out {
                    text.push_str("out ");
                }
                text.push_str(&p.name.sym);
                if let Some(constraint) = &p.constraint {
                    text.push_str(" extends ");
                    text.push_str(&self.print_type(constraint, indent));
                }
                if let Some(default) = &p.default {
                    text.push_str(" = ");
                    text.push_str(&self.print_type(default, indent));
                }
                text
            })
            .collect();
        format!("<{}>", params.join(", "))
    }

    fn fn_params(&self, params: &[swc_ast::TsFnParam], indent: usize) -> String {
        params
            .iter()
            .map(|p| self.fn_param(p, indent))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn fn_param(&self, param: &swc_ast::TsFnParam, indent: usize) -> String {
        let (prefix, name, optional, ann) = match param {
            swc_ast::TsFnParam::Ident(i) => (
                "",
                i.id.sym.to_string(),
                i.id.optional,
                i.type_ann.as_deref(),
            ),
            swc_ast::TsFnParam::Rest(r) => (
                "...",
                pattern_name(&r.arg),
                false,
                r.type_ann.as_deref(),
            ),
            swc_ast::TsFnParam::Array(a) => (
                "",
                array_pattern_name(a),
                a.optional,
                a.type_ann.as_deref(),
            ),
            swc_ast::TsFnParam::Object(o) => (
                "",
                object_pattern_name(o),
                o.optional,
                o.type_ann.as_deref(),
            ),
        };
        let optional = if optional { "?" } else { "" };
        match ann {
            Some(ann) => format!(
                "{}{}{}: {}",
                prefix,
                name,
                optional,
                self.print_type(&ann.type_ann, indent)
            ),
            None => format!("{}{}{}", prefix, name, optional),
        }
    }

    fn type_lit(&self, members: &[swc_ast::TsTypeElement], indent: usize) -> String {
        if members.is_empty() {
            return "{}".to_string();
        }
        if self.flags.contains(TypeFormatFlags::MULTILINE_OBJECT_LITERALS) {
            let inner = INDENT.repeat(indent + 1);
            let lines: Vec<String> = members
                .iter()
                .map(|m| format!("{}{};", inner, self.type_element(m, indent + 1)))
                .collect();
            format!("{{\n{}\n{}}}", lines.join("\n"), INDENT.repeat(indent))
        } else {
            let parts: Vec<String> = members
                .iter()
                .map(|m| format!("{};", self.type_element(m, indent)))
                .collect();
            format!("{{ {} }}", parts.join(" "))
        }
    }

    fn type_element(&self, element: &swc_ast::TsTypeElement, indent: usize) -> String {
        match element {
            swc_ast::TsTypeElement::TsPropertySignature(p) => {
                let mut text = String::new();
                if p.readonly {
                    text.push_str("readonly ");
                }
                text.push_str(&self.key_name(&p.key, p.computed));
                if p.optional {
                    text.push('?');
                }
                if let Some(ann) = &p.type_ann {
                    text.push_str(": ");
                    text.push_str(&self.print_type(&ann.type_ann, indent));
                }
                text
            }
            swc_ast::TsTypeElement::TsMethodSignature(m) => format!(
                "{}{}{}({}){}",
                self.key_name(&m.key, m.computed),
                if m.optional { "?" } else { "" },
                m.type_params
                    .as_deref()
                    .map(|tp| self.type_param_decl(tp, indent))
                    .unwrap_or_default(),
                self.fn_params(&m.params, indent),
                self.return_ann(&m.type_ann, indent)
            ),
            swc_ast::TsTypeElement::TsCallSignatureDecl(c) => format!(
                "{}({}){}",
                c.type_params
                    .as_deref()
                    .map(|tp| self.type_param_decl(tp, indent))
                    .unwrap_or_default(),
                self.fn_params(&c.params, indent),
                self.return_ann(&c.type_ann, indent)
            ),
            swc_ast::TsTypeElement::TsConstructSignatureDecl(c) => format!(
                "new {}({}){}",
                c.type_params
                    .as_deref()
                    .map(|tp| self.type_param_decl(tp, indent))
                    .unwrap_or_default(),
                self.fn_params(&c.params, indent),
                self.return_ann(&c.type_ann, indent)
            ),
            swc_ast::TsTypeElement::TsIndexSignature(i) => format!(
                "{}[{}]{}",
                if i.readonly { "readonly " } else { "" },
                self.fn_params(&i.params, indent),
                self.return_ann(&i.type_ann, indent)
            ),
            swc_ast::TsTypeElement::TsGetterSignature(g) => format!(
                "get {}(){}",
                self.key_name(&g.key, g.computed),
                self.return_ann(&g.type_ann, indent)
            ),
            swc_ast::TsTypeElement::TsSetterSignature(s) => format!(
                "set {}({})",
                self.key_name(&s.key, s.computed),
                self.fn_param(&s.param, indent)
            ),
        }
    }

    fn mapped_type(&self, m: &swc_ast::TsMappedType, indent: usize) -> String {
        let readonly = match m.readonly {
            Some(swc_ast::TruePlusMinus::True) => "readonly ",
            Some(swc_ast::TruePlusMinus::Plus) => "+readonly ",
            Some(swc_ast::TruePlusMinus::Minus) => "-readonly ",
            None => "",
        };
        let optional = match m.optional {
            Some(swc_ast::TruePlusMinus::True) => "?",
            Some(swc_ast::TruePlusMinus::Plus) => "+?",
            Some(swc_ast::TruePlusMinus::Minus) => "-?",
            None => "",
        };
        let constraint = m
            .type_param
            .constraint
            .as_ref()
            .map(|c| format!(" in {}", self.print_type(c, indent)))
            .unwrap_or_default();
        let name_type = m
            .name_type
            .as_ref()
            .map(|n| format!(" as {}", self.print_type(n, indent)))
            .unwrap_or_default();
        let value = m
            .type_ann
            .as_ref()
            .map(|t| format!(": {}", self.print_type(t, indent)))
            .unwrap_or_default();
        format!(
            "{{ {}[{}{}{}]{}{}; }}",
            readonly, m.type_param.name.sym, constraint, name_type, optional, value
        )
    }

    fn return_ann(&self, ann: &Option<Box<swc_ast::TsTypeAnn>>, indent: usize) -> String {
        ann.as_ref()
            .map(|a| format!(": {}", self.print_type(&a.type_ann, indent)))
            .unwrap_or_default()
    }

    fn key_name(&self, key: &swc_ast::Expr, computed: bool) -> String {
        let name = match key {
            swc_ast::Expr::Lit(swc_ast::Lit::Str(s)) if !computed => {
                format!("\"{}\"", str_value(s))
            }
            _ => expr_to_name(key).unwrap_or_else(|| self.file.text_for_span(key.span()).to_string()),
        };
        if computed {
            format!("[{}]", name)
        } else {
            name
        }
    }
}

/// Print a (possibly qualified) entity name
pub fn entity_name(name: &swc_ast::TsEntityName) -> String {
    match name {
        swc_ast::TsEntityName::Ident(i) => i.sym.to_string(),
        swc_ast::TsEntityName::TsQualifiedName(q) => {
            format!("{}.{}", entity_name(&q.left), q.right.sym)
        }
    }
}

/// Display name of a binding pattern (`x`, `{ a, b }`, `[a, b]`)
pub fn pattern_name(pat: &swc_ast::Pat) -> String {
    match pat {
        swc_ast::Pat::Ident(i) => i.id.sym.to_string(),
        swc_ast::Pat::Rest(r) => pattern_name(&r.arg),
        swc_ast::Pat::Assign(a) => pattern_name(&a.left),
        swc_ast::Pat::Array(a) => array_pattern_name(a),
        swc_ast::Pat::Object(o) => object_pattern_name(o),
        swc_ast::Pat::Invalid(_) | swc_ast::Pat::Expr(_) => String::new(),
    }
}

/// Display name of a signature parameter
pub fn fn_param_name(param: &swc_ast::TsFnParam) -> String {
    match param {
        swc_ast::TsFnParam::Ident(i) => i.id.sym.to_string(),
        swc_ast::TsFnParam::Array(a) => array_pattern_name(a),
        swc_ast::TsFnParam::Rest(r) => pattern_name(&r.arg),
        swc_ast::TsFnParam::Object(o) => object_pattern_name(o),
    }
}

fn array_pattern_name(pat: &swc_ast::ArrayPat) -> String {
    let elems: Vec<String> = pat
        .elems
        .iter()
        .map(|e| e.as_ref().map(pattern_name).unwrap_or_default())
        .collect();
    format!("[{}]", elems.join(", "))
}

fn object_pattern_name(pat: &swc_ast::ObjectPat) -> String {
    let props: Vec<String> = pat
        .props
        .iter()
        .map(|p| match p {
            swc_ast::ObjectPatProp::KeyValue(kv) => prop_name_str(&kv.key).unwrap_or_default(),
            swc_ast::ObjectPatProp::Assign(a) => a.key.id.sym.to_string(),
            swc_ast::ObjectPatProp::Rest(r) => format!("...{}", pattern_name(&r.arg)),
        })
        .collect();
    format!("{{ {} }}", props.join(", "))
}

fn keyword(kind: swc_ast::TsKeywordTypeKind) -> &'static str {
    match kind {
        swc_ast::TsKeywordTypeKind::TsAnyKeyword => "any",
        swc_ast::TsKeywordTypeKind::TsUnknownKeyword => "unknown",
        swc_ast::TsKeywordTypeKind::TsNumberKeyword => "number",
        swc_ast::TsKeywordTypeKind::TsObjectKeyword => "object",
        swc_ast::TsKeywordTypeKind::TsBooleanKeyword => "boolean",
        swc_ast::TsKeywordTypeKind::TsBigIntKeyword => "bigint",
        swc_ast::TsKeywordTypeKind::TsStringKeyword => "string",
        swc_ast::TsKeywordTypeKind::TsSymbolKeyword => "symbol",
        swc_ast::TsKeywordTypeKind::TsVoidKeyword => "void",
        swc_ast::TsKeywordTypeKind::TsUndefinedKeyword => "undefined",
        swc_ast::TsKeywordTypeKind::TsNullKeyword => "null",
        swc_ast::TsKeywordTypeKind::TsNeverKeyword => "never",
        swc_ast::TsKeywordTypeKind::TsIntrinsicKeyword => "intrinsic",
    }
}
