//! Container members
//!
//! Classes, interfaces and enums expose named members. Each member symbol
//! of a container's [`MemberTable`] becomes one [`MemberDoc`], built from
//! its primary declaration with any other declarations recorded as
//! overloads.

use crate::checker::{Node, NodeKind, TypeChecker};
use crate::class::ConstructorDoc;
use crate::decorators::{extract_decorators, DecoratorDoc};
use crate::diagnostics::ApiDocResult;
use crate::function::{OverloadDoc, Parameterized};
use crate::host::Host;
use crate::js_doc::JsDoc;
use crate::params::{render_ctor_params, render_fn_params, render_params, ParamDoc};
use crate::symbols::{MemberDeclaration, MemberNode, MemberSymbol, MemberTable};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::Spanned;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What kind of member a document describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    Property,
    Method,
    /// Getter and/or setter
    Accessor,
    CallSignature,
    ConstructSignature,
    IndexSignature,
    EnumMember,
}

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl From<swc_ast::Accessibility> for Accessibility {
    fn from(access: swc_ast::Accessibility) -> Self {
        match access {
            swc_ast::Accessibility::Public => Accessibility::Public,
            swc_ast::Accessibility::Protected => Accessibility::Protected,
            swc_ast::Accessibility::Private => Accessibility::Private,
        }
    }
}

/// A documented member of a class, interface or enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDoc {
    pub name: String,

    /// `<container id>.<name>`
    pub id: String,

    pub member_kind: MemberKind,

    /// Rendered type; for enum members the initializer source text
    #[serde(rename = "type", default)]
    pub type_text: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_optional: bool,

    #[serde(default)]
    pub is_readonly: bool,

    #[serde(default)]
    pub is_abstract: bool,

    /// Marked `@internal`
    #[serde(default)]
    pub internal: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParamDoc>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub type_parameters: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overloads: Vec<OverloadDoc>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDoc>,

    #[serde(default)]
    pub starting_line: usize,

    #[serde(default)]
    pub ending_line: usize,
}

impl MemberDoc {
    pub fn new(container_id: &str, name: impl Into<String>, member_kind: MemberKind) -> Self {
        let name = name.into();
        Self {
            id: format!("{}.{}", container_id, name),
            name,
            member_kind,
            type_text: String::new(),
            content: String::new(),
            accessibility: Accessibility::Public,
            is_static: false,
            is_optional: false,
            is_readonly: false,
            is_abstract: false,
            internal: false,
            parameters: vec![],
            type_parameters: String::new(),
            overloads: vec![],
            decorators: vec![],
            starting_line: 0,
            ending_line: 0,
        }
    }
}

impl Parameterized for MemberDoc {
    fn parameters(&self) -> &[ParamDoc] {
        &self.parameters
    }

    fn type_parameters(&self) -> &str {
        &self.type_parameters
    }
}

/// Builds member documents for one container
pub struct MemberResolver<'r, 'a> {
    host: &'r Host,
    checker: &'r dyn TypeChecker<'a>,
    container_id: &'r str,
}

impl<'r, 'a> MemberResolver<'r, 'a> {
    pub fn new(host: &'r Host, checker: &'r dyn TypeChecker<'a>, container_id: &'r str) -> Self {
        Self {
            host,
            checker,
            container_id,
        }
    }

    /// Member documents in table order
    pub fn resolve_members(&self, table: &MemberTable<'a>) -> ApiDocResult<Vec<MemberDoc>> {
        let mut docs = Vec::with_capacity(table.members.len());
        for symbol in table.members.values() {
            docs.push(self.resolve_member(symbol)?);
        }
        trace!(container = self.container_id, members = docs.len(), "resolved members");
        Ok(docs)
    }

    /// Enum members, with `type` holding the initializer source text
    pub fn resolve_enum_members(&self, table: &MemberTable<'a>) -> ApiDocResult<Vec<MemberDoc>> {
        let mut docs = self.resolve_members(table)?;
        for (doc, symbol) in docs.iter_mut().zip(table.members.values()) {
            doc.type_text = match symbol.declarations.first().map(|d| (d.file, d.node)) {
                Some((file, MemberNode::EnumMember { member, .. })) => member
                    .init
                    .as_deref()
                    .map(|init| file.text_for_span(init.span()).to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            };
        }
        Ok(docs)
    }

    /// The class constructor, if the class declares one
    pub fn resolve_constructor(
        &self,
        table: &MemberTable<'a>,
    ) -> ApiDocResult<Option<ConstructorDoc>> {
        let ctors: Vec<(&MemberDeclaration<'a>, &'a swc_ast::Constructor)> = table
            .constructors
            .iter()
            .filter_map(|d| match d.node {
                MemberNode::Constructor(c) => Some((d, c)),
                _ => None,
            })
            .collect();
        let Some(primary) = ctors
            .iter()
            .position(|(_, c)| c.body.is_some())
            .or(if ctors.is_empty() { None } else { Some(0) })
        else {
            return Ok(None);
        };

        let (decl, ctor) = ctors[primary];
        let content = self.host.render_content_at(decl.file, ctor.span.lo);
        let mut overloads = Vec::new();
        for (i, (other, other_ctor)) in ctors.iter().enumerate() {
            if i == primary {
                continue;
            }
            let (starting_line, ending_line) = self.lines(other);
            overloads.push(OverloadDoc {
                parameters: render_ctor_params(self.host, self.checker, other.file, &other_ctor.params)?,
                type_parameters: String::new(),
                return_type: String::new(),
                content: self.host.render_content_at(other.file, other_ctor.span.lo),
                starting_line,
                ending_line,
            });
        }

        Ok(Some(ConstructorDoc {
            parameters: render_ctor_params(self.host, self.checker, decl.file, &ctor.params)?,
            overloads,
            internal: JsDoc::parse(&content).is_internal(),
            content,
            accessibility: ctor.accessibility.map(Accessibility::from).unwrap_or_default(),
        }))
    }

    fn resolve_member(&self, symbol: &MemberSymbol<'a>) -> ApiDocResult<MemberDoc> {
        // A class member shadows the interface signatures merged into it
        let declared_by_class = symbol.declarations.iter().any(|d| is_class_member(&d.node));
        let decls: Vec<&MemberDeclaration<'a>> = symbol
            .declarations
            .iter()
            .filter(|d| !declared_by_class || is_class_member(&d.node))
            .collect();

        let kind = member_kind(&decls);
        let primary = primary_index(kind, &decls);
        let decl = decls[primary];

        let mut doc = MemberDoc::new(self.container_id, symbol.name.clone(), kind);
        doc.is_static = symbol.is_static;
        doc.content = self.host.render_content_at(decl.file, decl.node.span().lo);
        doc.internal = JsDoc::parse(&doc.content).is_internal();
        (doc.starting_line, doc.ending_line) = self.lines(decl);
        self.fill_signature(&mut doc, decl)?;
        self.fill_modifiers(&mut doc, decl);

        if kind == MemberKind::Accessor {
            doc.is_readonly = !decls.iter().any(|d| is_setter(&d.node));
        } else if matches!(kind, MemberKind::Method | MemberKind::CallSignature | MemberKind::ConstructSignature) {
            for (i, other) in decls.iter().enumerate() {
                if i != primary {
                    doc.overloads.push(self.overload(other)?);
                }
            }
        }
        Ok(doc)
    }

    /// Type text, parameters and type parameters of a member declaration
    fn fill_signature(&self, doc: &mut MemberDoc, decl: &MemberDeclaration<'a>) -> ApiDocResult<()> {
        let file = decl.file;
        let host = self.host;
        let checker = self.checker;
        let type_text = |kind| host.render_type_text(checker, &Node::new(file, kind));

        match decl.node {
            MemberNode::Constructor(_) => {}
            MemberNode::Property(p) => doc.type_text = type_text(NodeKind::ClassProp(p))?,
            MemberNode::ParamProperty(p) => doc.type_text = type_text(NodeKind::ParamProperty(p))?,
            MemberNode::PropertySignature(p) => {
                doc.type_text = type_text(NodeKind::PropertySignature(p))?
            }
            MemberNode::Method(m) => match m.kind {
                swc_ast::MethodKind::Setter => {
                    doc.type_text = match m.function.params.first() {
                        Some(param) => type_text(NodeKind::Param(&param.pat))?,
                        None => String::new(),
                    };
                }
                swc_ast::MethodKind::Getter => {
                    doc.type_text = type_text(NodeKind::Function(&m.function))?
                }
                swc_ast::MethodKind::Method => {
                    doc.type_text = type_text(NodeKind::Function(&m.function))?;
                    doc.parameters = render_params(host, checker, file, &m.function.params)?;
                    doc.type_parameters = host.render_type_parameters_text(
                        checker,
                        file,
                        m.function.type_params.as_deref(),
                    )?;
                }
            },
            MemberNode::MethodSignature(m) => {
                doc.type_text = type_text(NodeKind::MethodSignature(m))?;
                doc.parameters = render_fn_params(host, checker, file, &m.params)?;
                doc.type_parameters =
                    host.render_type_parameters_text(checker, file, m.type_params.as_deref())?;
            }
            MemberNode::GetterSignature(g) => {
                doc.type_text = type_text(NodeKind::GetterSignature(g))?
            }
            MemberNode::SetterSignature(s) => doc.type_text = type_text(NodeKind::FnParam(&s.param))?,
            MemberNode::CallSignature(c) => {
                doc.type_text = type_text(NodeKind::CallSignature(c))?;
                doc.parameters = render_fn_params(host, checker, file, &c.params)?;
                doc.type_parameters =
                    host.render_type_parameters_text(checker, file, c.type_params.as_deref())?;
            }
            MemberNode::ConstructSignature(c) => {
                doc.type_text = type_text(NodeKind::ConstructSignature(c))?;
                doc.parameters = render_fn_params(host, checker, file, &c.params)?;
                doc.type_parameters =
                    host.render_type_parameters_text(checker, file, c.type_params.as_deref())?;
            }
            MemberNode::IndexSignature(i) => {
                doc.type_text = type_text(NodeKind::IndexSignature(i))?;
                doc.parameters = render_fn_params(host, checker, file, &i.params)?;
            }
            MemberNode::EnumMember { decl: enum_decl, member } => {
                doc.type_text = type_text(NodeKind::EnumMember {
                    decl: enum_decl,
                    member,
                })?
            }
        }
        Ok(())
    }

    fn fill_modifiers(&self, doc: &mut MemberDoc, decl: &MemberDeclaration<'a>) {
        let file = decl.file;
        match decl.node {
            MemberNode::Property(p) => {
                doc.accessibility = p.accessibility.map(Accessibility::from).unwrap_or_default();
                doc.is_optional = p.is_optional;
                doc.is_readonly = p.readonly;
                doc.is_abstract = p.is_abstract;
                doc.decorators = extract_decorators(file, &p.decorators);
            }
            MemberNode::ParamProperty(p) => {
                doc.accessibility = p.accessibility.map(Accessibility::from).unwrap_or_default();
                doc.is_readonly = p.readonly;
                doc.is_optional = match &p.param {
                    swc_ast::TsParamPropParam::Ident(i) => i.id.optional,
                    swc_ast::TsParamPropParam::Assign(_) => false,
                };
                doc.decorators = extract_decorators(file, &p.decorators);
            }
            MemberNode::Method(m) => {
                doc.accessibility = m.accessibility.map(Accessibility::from).unwrap_or_default();
                doc.is_optional = m.is_optional;
                doc.is_abstract = m.is_abstract;
                doc.decorators = extract_decorators(file, &m.function.decorators);
            }
            MemberNode::PropertySignature(p) => {
                doc.is_optional = p.optional;
                doc.is_readonly = p.readonly;
            }
            MemberNode::MethodSignature(m) => doc.is_optional = m.optional,
            MemberNode::IndexSignature(i) => doc.is_readonly = i.readonly,
            MemberNode::Constructor(_)
            | MemberNode::GetterSignature(_)
            | MemberNode::SetterSignature(_)
            | MemberNode::CallSignature(_)
            | MemberNode::ConstructSignature(_)
            | MemberNode::EnumMember { .. } => {}
        }
    }

    fn overload(&self, decl: &MemberDeclaration<'a>) -> ApiDocResult<OverloadDoc> {
        let mut scratch = MemberDoc::new(self.container_id, String::new(), MemberKind::Method);
        self.fill_signature(&mut scratch, decl)?;
        let (starting_line, ending_line) = self.lines(decl);
        Ok(OverloadDoc {
            parameters: scratch.parameters,
            type_parameters: scratch.type_parameters,
            return_type: scratch.type_text,
            content: self.host.render_content_at(decl.file, decl.node.span().lo),
            starting_line,
            ending_line,
        })
    }

    /// First and last line, counted the same way as top-level declarations
    fn lines(&self, decl: &MemberDeclaration<'a>) -> (usize, usize) {
        let span = decl.node.span();
        let start = decl.file.position(decl.file.full_start(span.lo));
        let first_line = decl.file.position(span.lo).line;
        (
            start.starting_line(first_line),
            decl.file.position(span.hi).line,
        )
    }
}

fn is_class_member(node: &MemberNode<'_>) -> bool {
    matches!(
        node,
        MemberNode::Constructor(_)
            | MemberNode::Property(_)
            | MemberNode::ParamProperty(_)
            | MemberNode::Method(_)
    )
}

fn is_setter(node: &MemberNode<'_>) -> bool {
    match node {
        MemberNode::Method(m) => m.kind == swc_ast::MethodKind::Setter,
        MemberNode::SetterSignature(_) => true,
        _ => false,
    }
}

fn is_getter(node: &MemberNode<'_>) -> bool {
    match node {
        MemberNode::Method(m) => m.kind == swc_ast::MethodKind::Getter,
        MemberNode::GetterSignature(_) => true,
        _ => false,
    }
}

/// Member kind of a merged member symbol
fn member_kind(decls: &[&MemberDeclaration<'_>]) -> MemberKind {
    if decls.iter().any(|d| is_getter(&d.node) || is_setter(&d.node)) {
        return MemberKind::Accessor;
    }
    match decls.first().map(|d| d.node) {
        Some(MemberNode::Method(_)) | Some(MemberNode::MethodSignature(_)) => MemberKind::Method,
        Some(MemberNode::CallSignature(_)) => MemberKind::CallSignature,
        Some(MemberNode::ConstructSignature(_)) => MemberKind::ConstructSignature,
        Some(MemberNode::IndexSignature(_)) => MemberKind::IndexSignature,
        Some(MemberNode::EnumMember { .. }) => MemberKind::EnumMember,
        _ => MemberKind::Property,
    }
}

/// Index of the declaration that documents the member
///
/// Methods use their implementation; accessors prefer the getter.
fn primary_index(kind: MemberKind, decls: &[&MemberDeclaration<'_>]) -> usize {
    let found = match kind {
        MemberKind::Method => decls.iter().position(|d| match d.node {
            MemberNode::Method(m) => m.function.body.is_some(),
            _ => false,
        }),
        MemberKind::Accessor => decls.iter().position(|d| is_getter(&d.node)),
        _ => None,
    };
    found.unwrap_or(0)
}
