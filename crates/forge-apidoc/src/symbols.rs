//! Symbols and declarations of a bound module
//!
//! A symbol is a name together with every declaration that shares it
//! (declaration merging): overload signatures, enum blocks split across a
//! file, interfaces merged into classes. Declarations borrow the AST of the
//! [`Program`](crate::program::Program) they were bound from.

use crate::node::{DeclarationKind, DeclarationRef, Position};
use crate::utils::swc::{module_export_name_str, prop_name_str, str_value, ParsedModule};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::{BytePos, Span, Spanned};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::trace;

/// The syntax node behind a declaration
#[derive(Debug, Clone, Copy)]
pub enum DeclNode<'a> {
    Class {
        ident: Option<&'a swc_ast::Ident>,
        class: &'a swc_ast::Class,
    },
    Interface(&'a swc_ast::TsInterfaceDecl),
    Function {
        ident: Option<&'a swc_ast::Ident>,
        function: &'a swc_ast::Function,
    },
    Enum(&'a swc_ast::TsEnumDecl),
    TypeAlias(&'a swc_ast::TsTypeAliasDecl),
    Variable {
        kind: swc_ast::VarDeclKind,
        declarator: &'a swc_ast::VarDeclarator,
        /// The bound identifier when the declarator destructures
        binding: Option<&'a swc_ast::BindingIdent>,
    },
    Namespace(&'a swc_ast::TsModuleDecl),
    /// `export default <expression>`
    ExportExpression(&'a swc_ast::Expr),
}

impl<'a> DeclNode<'a> {
    /// The owned kind tag of this node
    pub fn kind(&self) -> DeclarationKind {
        match self {
            DeclNode::Class { .. } => DeclarationKind::Class,
            DeclNode::Interface(_) => DeclarationKind::Interface,
            DeclNode::Function { .. } => DeclarationKind::Function,
            DeclNode::Enum(_) => DeclarationKind::Enum,
            DeclNode::TypeAlias(_) => DeclarationKind::TypeAlias,
            DeclNode::Variable { .. } => DeclarationKind::Variable,
            DeclNode::Namespace(_) => DeclarationKind::Namespace,
            DeclNode::ExportExpression(_) => DeclarationKind::ExportExpression,
        }
    }

    /// Span of the declaration itself (without `export`)
    pub fn span(&self) -> Span {
        match self {
            DeclNode::Class { class, .. } => class.span,
            DeclNode::Interface(i) => i.span,
            DeclNode::Function { function, .. } => function.span,
            DeclNode::Enum(e) => e.span,
            DeclNode::TypeAlias(t) => t.span,
            DeclNode::Variable { declarator, .. } => declarator.span,
            DeclNode::Namespace(n) => n.span,
            DeclNode::ExportExpression(e) => e.span(),
        }
    }
}

/// One declaration of a symbol
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    /// The source file holding the declaration
    pub file: &'a ParsedModule,
    pub node: DeclNode<'a>,
    /// Span of the whole statement, including any `export` keyword
    pub stmt_span: Span,
    /// End of the previous top-level item; `None` at the top of the file
    pub full_start: Option<BytePos>,
}

impl<'a> Declaration<'a> {
    pub fn kind(&self) -> DeclarationKind {
        self.node.kind()
    }

    pub fn span(&self) -> Span {
        self.node.span()
    }

    /// Position where leading comments attach
    pub fn comment_pos(&self) -> BytePos {
        match self.node {
            // `@Dec export class` puts the decorators ahead of the statement
            DeclNode::Class { class, .. } => class
                .decorators
                .first()
                .map(|d| d.span.lo.min(self.stmt_span.lo))
                .unwrap_or(self.stmt_span.lo),
            _ => self.stmt_span.lo,
        }
    }

    /// Whether this is a function declaration with an implementation body
    pub fn has_body(&self) -> bool {
        match self.node {
            DeclNode::Function { function, .. } => function.body.is_some(),
            _ => false,
        }
    }

    /// The declaration's own type parameter list
    pub fn type_params(&self) -> Option<&'a swc_ast::TsTypeParamDecl> {
        match self.node {
            DeclNode::Class { class, .. } => class.type_params.as_deref(),
            DeclNode::Interface(i) => i.type_params.as_deref(),
            DeclNode::Function { function, .. } => function.type_params.as_deref(),
            DeclNode::TypeAlias(t) => t.type_params.as_deref(),
            DeclNode::Enum(_)
            | DeclNode::Variable { .. }
            | DeclNode::Namespace(_)
            | DeclNode::ExportExpression(_) => None,
        }
    }

    /// Start of the declaration including its leading trivia
    pub fn start_position(&self) -> Position {
        match self.full_start {
            Some(pos) => self.file.position(pos),
            None => Position {
                line: 1,
                character: 0,
            },
        }
    }

    /// Position of the declaration's last character
    pub fn end_position(&self) -> Position {
        self.file.position(self.span().hi)
    }

    /// Identity comparison: same file, same node
    pub fn is_same(&self, other: &Declaration<'_>) -> bool {
        std::ptr::eq(self.file, other.file) && self.span() == other.span()
    }

    /// An owned handle to this declaration
    pub fn to_ref(&self, module_id: &str) -> DeclarationRef {
        DeclarationRef {
            kind: self.kind(),
            module_id: module_id.to_string(),
            start: self.file.position(self.span().lo),
            end: self.end_position(),
        }
    }
}

/// The exported name of a symbol re-exposed under a different name
#[derive(Debug, Clone, PartialEq)]
pub struct AliasSymbol {
    pub name: String,
}

/// A name bound by a module's export list
#[derive(Debug, Clone)]
pub struct ExportSymbol<'a> {
    /// The symbol's own name where it is declared
    pub name: String,
    /// Merged declarations in source order
    pub declarations: Vec<Declaration<'a>>,
    /// Set when the export name differs from the symbol's own name
    pub alias: Option<AliasSymbol>,
    /// Exported as `default`
    pub is_default: bool,
    /// Why the export could not be traced to declarations
    pub unresolved: Option<String>,
}

impl<'a> ExportSymbol<'a> {
    /// The name documentation uses: the alias name wins
    pub fn doc_name(&self) -> &str {
        self.alias
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or(&self.name)
    }

    /// The exported name (`default` for default exports)
    pub fn export_name(&self) -> &str {
        if self.is_default {
            "default"
        } else {
            self.doc_name()
        }
    }

    /// Build the member table of this symbol's container declarations
    pub fn member_table(&self) -> MemberTable<'a> {
        MemberTable::from_declarations(&self.declarations)
    }
}

/// The syntax node behind a member declaration
#[derive(Debug, Clone, Copy)]
pub enum MemberNode<'a> {
    Constructor(&'a swc_ast::Constructor),
    Property(&'a swc_ast::ClassProp),
    ParamProperty(&'a swc_ast::TsParamProp),
    Method(&'a swc_ast::ClassMethod),
    PropertySignature(&'a swc_ast::TsPropertySignature),
    MethodSignature(&'a swc_ast::TsMethodSignature),
    GetterSignature(&'a swc_ast::TsGetterSignature),
    SetterSignature(&'a swc_ast::TsSetterSignature),
    CallSignature(&'a swc_ast::TsCallSignatureDecl),
    ConstructSignature(&'a swc_ast::TsConstructSignatureDecl),
    IndexSignature(&'a swc_ast::TsIndexSignature),
    EnumMember {
        decl: &'a swc_ast::TsEnumDecl,
        member: &'a swc_ast::TsEnumMember,
    },
}

impl<'a> MemberNode<'a> {
    pub fn span(&self) -> Span {
        match self {
            MemberNode::Constructor(c) => c.span,
            MemberNode::Property(p) => p.span,
            MemberNode::ParamProperty(p) => p.span,
            MemberNode::Method(m) => m.span,
            MemberNode::PropertySignature(p) => p.span,
            MemberNode::MethodSignature(m) => m.span,
            MemberNode::GetterSignature(g) => g.span,
            MemberNode::SetterSignature(s) => s.span,
            MemberNode::CallSignature(c) => c.span,
            MemberNode::ConstructSignature(c) => c.span,
            MemberNode::IndexSignature(i) => i.span,
            MemberNode::EnumMember { member, .. } => member.span,
        }
    }

    /// Whether the member belongs to the constructor function itself
    pub fn is_static(&self) -> bool {
        match self {
            MemberNode::Property(p) => p.is_static,
            MemberNode::Method(m) => m.is_static,
            MemberNode::IndexSignature(i) => i.is_static,
            _ => false,
        }
    }
}

/// One declaration of a member
#[derive(Debug, Clone, Copy)]
pub struct MemberDeclaration<'a> {
    pub file: &'a ParsedModule,
    pub node: MemberNode<'a>,
}

/// A member name with its merged declarations
#[derive(Debug, Clone)]
pub struct MemberSymbol<'a> {
    pub name: String,
    pub is_static: bool,
    pub declarations: Vec<MemberDeclaration<'a>>,
}

/// Ordered members of a container symbol
#[derive(Debug, Clone, Default)]
pub struct MemberTable<'a> {
    /// Constructor declarations (overloads and implementation)
    pub constructors: Vec<MemberDeclaration<'a>>,
    /// Members keyed by name and staticness, in declaration order
    pub members: IndexMap<(String, bool), MemberSymbol<'a>>,
}

impl<'a> MemberTable<'a> {
    /// Collect members from class, interface and enum declarations
    ///
    /// Later declarations add to earlier ones; a member already declared
    /// keeps its position and gains the new declaration.
    pub fn from_declarations(declarations: &[Declaration<'a>]) -> Self {
        let mut table = MemberTable::default();
        for decl in declarations {
            let file = decl.file;
            match decl.node {
                DeclNode::Class { class, .. } => table.add_class(file, class),
                DeclNode::Interface(i) => {
                    for element in &i.body.body {
                        table.add_type_element(file, element);
                    }
                }
                DeclNode::Enum(e) => {
                    for member in &e.members {
                        let name = enum_member_name(member);
                        table.add(file, name, MemberNode::EnumMember { decl: e, member });
                    }
                }
                _ => {}
            }
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty() && self.members.is_empty()
    }

    fn add(&mut self, file: &'a ParsedModule, name: String, node: MemberNode<'a>) {
        let is_static = node.is_static();
        self.members
            .entry((name.clone(), is_static))
            .or_insert_with(|| MemberSymbol {
                name,
                is_static,
                declarations: Vec::new(),
            })
            .declarations
            .push(MemberDeclaration { file, node });
    }

    fn add_class(&mut self, file: &'a ParsedModule, class: &'a swc_ast::Class) {
        for member in &class.body {
            match member {
                swc_ast::ClassMember::Constructor(ctor) => {
                    self.constructors.push(MemberDeclaration {
                        file,
                        node: MemberNode::Constructor(ctor),
                    });
                    for param in &ctor.params {
                        if let swc_ast::ParamOrTsParamProp::TsParamProp(prop) = param {
                            if let Some(name) = param_prop_name(prop) {
                                self.add(file, name, MemberNode::ParamProperty(prop));
                            }
                        }
                    }
                }
                swc_ast::ClassMember::Method(m) => match prop_name_str(&m.key) {
                    Some(name) => self.add(file, name, MemberNode::Method(m)),
                    None => trace!("skipping method with unnamed key"),
                },
                swc_ast::ClassMember::ClassProp(p) => match prop_name_str(&p.key) {
                    Some(name) => self.add(file, name, MemberNode::Property(p)),
                    None => trace!("skipping property with unnamed key"),
                },
                swc_ast::ClassMember::TsIndexSignature(i) => {
                    self.add(file, "index".to_string(), MemberNode::IndexSignature(i))
                }
                // #private members, static blocks and auto accessors are not part of
                // the documented surface
                _ => {}
            }
        }
    }

    fn add_type_element(&mut self, file: &'a ParsedModule, element: &'a swc_ast::TsTypeElement) {
        use crate::utils::swc::expr_to_name;
        match element {
            swc_ast::TsTypeElement::TsPropertySignature(p) => {
                if let Some(name) = expr_to_name(&p.key) {
                    self.add(file, name, MemberNode::PropertySignature(p));
                }
            }
            swc_ast::TsTypeElement::TsMethodSignature(m) => {
                if let Some(name) = expr_to_name(&m.key) {
                    self.add(file, name, MemberNode::MethodSignature(m));
                }
            }
            swc_ast::TsTypeElement::TsGetterSignature(g) => {
                if let Some(name) = expr_to_name(&g.key) {
                    self.add(file, name, MemberNode::GetterSignature(g));
                }
            }
            swc_ast::TsTypeElement::TsSetterSignature(s) => {
                if let Some(name) = expr_to_name(&s.key) {
                    self.add(file, name, MemberNode::SetterSignature(s));
                }
            }
            swc_ast::TsTypeElement::TsCallSignatureDecl(c) => {
                self.add(file, "call".to_string(), MemberNode::CallSignature(c))
            }
            swc_ast::TsTypeElement::TsConstructSignatureDecl(c) => {
                self.add(file, "new".to_string(), MemberNode::ConstructSignature(c))
            }
            swc_ast::TsTypeElement::TsIndexSignature(i) => {
                self.add(file, "index".to_string(), MemberNode::IndexSignature(i))
            }
        }
    }
}

/// Name of an enum member
pub fn enum_member_name(member: &swc_ast::TsEnumMember) -> String {
    match &member.id {
        swc_ast::TsEnumMemberId::Ident(i) => i.sym.to_string(),
        swc_ast::TsEnumMemberId::Str(s) => str_value(s),
    }
}

/// Name of a constructor parameter property
pub fn param_prop_name(prop: &swc_ast::TsParamProp) -> Option<String> {
    match &prop.param {
        swc_ast::TsParamPropParam::Ident(i) => Some(i.id.sym.to_string()),
        swc_ast::TsParamPropParam::Assign(a) => match a.left.as_ref() {
            swc_ast::Pat::Ident(i) => Some(i.id.sym.to_string()),
            _ => None,
        },
    }
}

/// What an imported binding refers to
#[derive(Debug, Clone, PartialEq)]
pub enum ImportedName {
    Named(String),
    Namespace,
}

/// A local name bound by an import declaration
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBinding {
    pub specifier: String,
    pub imported: ImportedName,
}

/// One entry of a module's export list, in source order
#[derive(Debug, Clone, PartialEq)]
pub enum ExportEntry {
    /// Export of a local binding (`export function f`, `export { a as b }`)
    Local { exported: String, local: String },
    /// `export { a as b } from './x'`, `export * as ns from './x'`
    ReExport {
        exported: String,
        specifier: String,
        imported: ImportedName,
    },
    /// `export * from './x'`
    Star { specifier: String },
}

impl ExportEntry {
    pub fn exported(&self) -> Option<&str> {
        match self {
            ExportEntry::Local { exported, .. } | ExportEntry::ReExport { exported, .. } => {
                Some(exported)
            }
            ExportEntry::Star { .. } => None,
        }
    }
}

/// Top-level bindings of one module
#[derive(Debug, Clone)]
pub struct ModuleScope<'a> {
    pub file: &'a ParsedModule,
    /// Declarations grouped by local name, in source order
    pub locals: IndexMap<String, Vec<Declaration<'a>>>,
    pub imports: HashMap<String, ImportBinding>,
    pub exports: Vec<ExportEntry>,
}

impl<'a> ModuleScope<'a> {
    /// Collect the top-level bindings and export list of a parsed module
    pub fn collect(file: &'a ParsedModule) -> crate::diagnostics::ApiDocResult<Self> {
        let module = file.module()?;
        let mut scope = ModuleScope {
            file,
            locals: IndexMap::new(),
            imports: HashMap::new(),
            exports: Vec::new(),
        };

        let mut full_start = None;
        for item in &module.body {
            scope.collect_item(item, full_start);
            full_start = Some(item.span().hi);
        }

        trace!(
            path = %file.path().display(),
            locals = scope.locals.len(),
            exports = scope.exports.len(),
            "collected module scope"
        );
        Ok(scope)
    }

    /// Names exported explicitly (everything except `export *`)
    pub fn explicit_export_names(&self) -> Vec<&str> {
        self.exports.iter().filter_map(|e| e.exported()).collect()
    }

    fn push(&mut self, name: String, decl: Declaration<'a>) {
        self.locals.entry(name).or_default().push(decl);
    }

    fn export_local(&mut self, exported: impl Into<String>, local: impl Into<String>) {
        let entry = ExportEntry::Local {
            exported: exported.into(),
            local: local.into(),
        };
        if !self.exports.contains(&entry) {
            self.exports.push(entry);
        }
    }

    fn collect_item(&mut self, item: &'a swc_ast::ModuleItem, full_start: Option<BytePos>) {
        let stmt_span = item.span();
        match item {
            swc_ast::ModuleItem::ModuleDecl(module_decl) => match module_decl {
                swc_ast::ModuleDecl::ExportDecl(export) => {
                    for name in self.collect_decl(&export.decl, stmt_span, full_start) {
                        self.export_local(name.clone(), name);
                    }
                }
                swc_ast::ModuleDecl::ExportDefaultDecl(export) => {
                    let (name, node) = match &export.decl {
                        swc_ast::DefaultDecl::Class(c) => (
                            c.ident.as_ref().map(|i| i.sym.to_string()),
                            DeclNode::Class {
                                ident: c.ident.as_ref(),
                                class: &c.class,
                            },
                        ),
                        swc_ast::DefaultDecl::Fn(f) => (
                            f.ident.as_ref().map(|i| i.sym.to_string()),
                            DeclNode::Function {
                                ident: f.ident.as_ref(),
                                function: &f.function,
                            },
                        ),
                        swc_ast::DefaultDecl::TsInterfaceDecl(i) => {
                            (Some(i.id.sym.to_string()), DeclNode::Interface(i))
                        }
                    };
                    let name = name.unwrap_or_else(|| "default".to_string());
                    self.push(
                        name.clone(),
                        Declaration {
                            file: self.file,
                            node,
                            stmt_span,
                            full_start,
                        },
                    );
                    self.export_local("default", name);
                }
                swc_ast::ModuleDecl::ExportDefaultExpr(export) => match export.expr.as_ref() {
                    swc_ast::Expr::Ident(i) => self.export_local("default", i.sym.to_string()),
                    expr => {
                        self.push(
                            "default".to_string(),
                            Declaration {
                                file: self.file,
                                node: DeclNode::ExportExpression(expr),
                                stmt_span,
                                full_start,
                            },
                        );
                        self.export_local("default", "default");
                    }
                },
                swc_ast::ModuleDecl::ExportNamed(named) => {
                    let source = named.src.as_ref().map(|s| str_value(s));
                    for specifier in &named.specifiers {
                        self.collect_export_specifier(specifier, source.as_deref());
                    }
                }
                swc_ast::ModuleDecl::ExportAll(all) => self.exports.push(ExportEntry::Star {
                    specifier: str_value(&all.src),
                }),
                swc_ast::ModuleDecl::Import(import) => {
                    let specifier = str_value(&import.src);
                    for spec in &import.specifiers {
                        let (local, imported) = match spec {
                            swc_ast::ImportSpecifier::Named(n) => (
                                n.local.sym.to_string(),
                                ImportedName::Named(
                                    n.imported
                                        .as_ref()
                                        .map(module_export_name_str)
                                        .unwrap_or_else(|| n.local.sym.to_string()),
                                ),
                            ),
                            swc_ast::ImportSpecifier::Default(d) => (
                                d.local.sym.to_string(),
                                ImportedName::Named("default".to_string()),
                            ),
                            swc_ast::ImportSpecifier::Namespace(ns) => {
                                (ns.local.sym.to_string(), ImportedName::Namespace)
                            }
                        };
                        self.imports.insert(
                            local,
                            ImportBinding {
                                specifier: specifier.clone(),
                                imported,
                            },
                        );
                    }
                }
                other => trace!(span = ?other.span(), "skipping module declaration"),
            },
            swc_ast::ModuleItem::Stmt(swc_ast::Stmt::Decl(decl)) => {
                self.collect_decl(decl, stmt_span, full_start);
            }
            swc_ast::ModuleItem::Stmt(_) => {}
        }
    }

    fn collect_export_specifier(
        &mut self,
        specifier: &swc_ast::ExportSpecifier,
        source: Option<&str>,
    ) {
        match (specifier, source) {
            (swc_ast::ExportSpecifier::Named(n), None) => {
                let local = module_export_name_str(&n.orig);
                let exported = n
                    .exported
                    .as_ref()
                    .map(module_export_name_str)
                    .unwrap_or_else(|| local.clone());
                self.export_local(exported, local);
            }
            (swc_ast::ExportSpecifier::Named(n), Some(source)) => {
                let imported = module_export_name_str(&n.orig);
                let exported = n
                    .exported
                    .as_ref()
                    .map(module_export_name_str)
                    .unwrap_or_else(|| imported.clone());
                self.exports.push(ExportEntry::ReExport {
                    exported,
                    specifier: source.to_string(),
                    imported: ImportedName::Named(imported),
                });
            }
            (swc_ast::ExportSpecifier::Namespace(ns), Some(source)) => {
                self.exports.push(ExportEntry::ReExport {
                    exported: module_export_name_str(&ns.name),
                    specifier: source.to_string(),
                    imported: ImportedName::Namespace,
                });
            }
            (swc_ast::ExportSpecifier::Default(d), Some(source)) => {
                self.exports.push(ExportEntry::ReExport {
                    exported: d.exported.sym.to_string(),
                    specifier: source.to_string(),
                    imported: ImportedName::Named("default".to_string()),
                });
            }
            (_, None) => trace!("skipping source-less namespace export"),
        }
    }

    /// Record the declarations of `decl`, returning the names it binds
    fn collect_decl(
        &mut self,
        decl: &'a swc_ast::Decl,
        stmt_span: Span,
        full_start: Option<BytePos>,
    ) -> Vec<String> {
        let file = self.file;
        let make = |node| Declaration {
            file,
            node,
            stmt_span,
            full_start,
        };
        let mut names = Vec::new();
        match decl {
            swc_ast::Decl::Class(c) => {
                let name = c.ident.sym.to_string();
                self.push(
                    name.clone(),
                    make(DeclNode::Class {
                        ident: Some(&c.ident),
                        class: &c.class,
                    }),
                );
                names.push(name);
            }
            swc_ast::Decl::Fn(f) => {
                let name = f.ident.sym.to_string();
                self.push(
                    name.clone(),
                    make(DeclNode::Function {
                        ident: Some(&f.ident),
                        function: &f.function,
                    }),
                );
                names.push(name);
            }
            swc_ast::Decl::Var(v) => {
                for declarator in &v.decls {
                    let bindings = match &declarator.name {
                        swc_ast::Pat::Ident(i) => vec![(i, None)],
                        pat => {
                            let mut bound = Vec::new();
                            pattern_bindings(pat, &mut bound);
                            bound.into_iter().map(|b| (b, Some(b))).collect()
                        }
                    };
                    for (ident, binding) in bindings {
                        let name = ident.id.sym.to_string();
                        self.push(
                            name.clone(),
                            make(DeclNode::Variable {
                                kind: v.kind,
                                declarator,
                                binding,
                            }),
                        );
                        names.push(name);
                    }
                }
            }
            swc_ast::Decl::TsInterface(i) => {
                let name = i.id.sym.to_string();
                self.push(name.clone(), make(DeclNode::Interface(i)));
                names.push(name);
            }
            swc_ast::Decl::TsTypeAlias(t) => {
                let name = t.id.sym.to_string();
                self.push(name.clone(), make(DeclNode::TypeAlias(t)));
                names.push(name);
            }
            swc_ast::Decl::TsEnum(e) => {
                let name = e.id.sym.to_string();
                self.push(name.clone(), make(DeclNode::Enum(e)));
                names.push(name);
            }
            swc_ast::Decl::TsModule(m) => match &m.id {
                swc_ast::TsModuleName::Ident(i) => {
                    let name = i.sym.to_string();
                    self.push(name.clone(), make(DeclNode::Namespace(m)));
                    names.push(name);
                }
                // `declare module "x"` augments another module
                swc_ast::TsModuleName::Str(_) => {}
            },
            swc_ast::Decl::Using(_) => {}
        }
        names
    }
}

/// Identifiers bound by a destructuring pattern, in source order
fn pattern_bindings<'p>(pat: &'p swc_ast::Pat, out: &mut Vec<&'p swc_ast::BindingIdent>) {
    match pat {
        swc_ast::Pat::Ident(i) => out.push(i),
        swc_ast::Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                pattern_bindings(elem, out);
            }
        }
        swc_ast::Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    swc_ast::ObjectPatProp::KeyValue(kv) => pattern_bindings(&kv.value, out),
                    swc_ast::ObjectPatProp::Assign(assign) => out.push(&assign.key),
                    swc_ast::ObjectPatProp::Rest(rest) => pattern_bindings(&rest.arg, out),
                }
            }
        }
        swc_ast::Pat::Assign(assign) => pattern_bindings(&assign.left, out),
        swc_ast::Pat::Rest(rest) => pattern_bindings(&rest.arg, out),
        swc_ast::Pat::Expr(_) | swc_ast::Pat::Invalid(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::swc::parse_typescript_source;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_merges_declarations() {
        let source = r#"
export function overloaded(a: string): string;
export function overloaded(a: number): number;
export function overloaded(a: any): any { return a; }

export enum Color { Red }
export enum Color { Green = 2 }

const hidden = 1;
"#;
        let parsed = parse_typescript_source("/project/src/index.ts", source).unwrap();
        let scope = ModuleScope::collect(&parsed).unwrap();

        assert_eq!(scope.locals["overloaded"].len(), 3);
        assert!(scope.locals["overloaded"][2].has_body());
        assert_eq!(scope.locals["Color"].len(), 2);
        assert!(scope.locals.contains_key("hidden"));
        assert_eq!(
            scope.explicit_export_names(),
            vec!["overloaded", "Color"]
        );
    }

    #[test]
    fn test_collect_export_list() {
        let source = r#"
import { Base as ImportedBase } from './base';
import * as utils from './utils';
const a = 1;
export { a as b, ImportedBase };
export { Shape as Figure } from './shapes';
export * from './colors';
export default a;
"#;
        let parsed = parse_typescript_source("/project/src/index.ts", source).unwrap();
        let scope = ModuleScope::collect(&parsed).unwrap();

        assert_eq!(
            scope.imports["ImportedBase"],
            ImportBinding {
                specifier: "./base".into(),
                imported: ImportedName::Named("Base".into()),
            }
        );
        assert_eq!(scope.imports["utils"].imported, ImportedName::Namespace);
        assert_eq!(
            scope.exports,
            vec![
                ExportEntry::Local {
                    exported: "b".into(),
                    local: "a".into()
                },
                ExportEntry::Local {
                    exported: "ImportedBase".into(),
                    local: "ImportedBase".into()
                },
                ExportEntry::ReExport {
                    exported: "Figure".into(),
                    specifier: "./shapes".into(),
                    imported: ImportedName::Named("Shape".into()),
                },
                ExportEntry::Star {
                    specifier: "./colors".into()
                },
                ExportEntry::Local {
                    exported: "default".into(),
                    local: "a".into()
                },
            ]
        );
    }

    #[test]
    fn test_full_start_tracks_previous_item() {
        let source = "export const first = 1;\nexport const second = 2;\n";
        let parsed = parse_typescript_source("/project/src/index.ts", source).unwrap();
        let scope = ModuleScope::collect(&parsed).unwrap();

        let first = scope.locals["first"][0];
        let second = scope.locals["second"][0];
        assert!(first.full_start.is_none());
        assert_eq!(first.start_position(), Position { line: 1, character: 0 });
        let start = second.start_position();
        assert_eq!(start.line, 1);
        assert!(start.character > 0);
        assert_eq!(second.end_position().line, 2);
    }

    #[test]
    fn test_member_table() {
        let source = r#"
export class Widget {
    static count = 0;
    constructor(private readonly id: string) {}
    get label(): string { return ''; }
    set label(value: string) {}
    render(): void;
    render(target?: string): void {}
}
export interface Widget {
    extra: number;
}
"#;
        let parsed = parse_typescript_source("/project/src/index.ts", source).unwrap();
        let scope = ModuleScope::collect(&parsed).unwrap();
        let table = MemberTable::from_declarations(&scope.locals["Widget"]);

        assert_eq!(table.constructors.len(), 1);
        let names: Vec<(&str, bool)> = table
            .members
            .values()
            .map(|m| (m.name.as_str(), m.is_static))
            .collect();
        assert_eq!(
            names,
            vec![
                ("count", true),
                ("id", false),
                ("label", false),
                ("render", false),
                ("extra", false),
            ]
        );
        assert_eq!(table.members[&("label".to_string(), false)].declarations.len(), 2);
        assert_eq!(table.members[&("render".to_string(), false)].declarations.len(), 2);
    }
}
