//! Document synthesis
//!
//! The [`Extractor`] turns every export of a bound module into one
//! [`ApiDoc`]: it classifies the export symbol, picks the declaration the
//! document is built from and fills the shared fields before the
//! kind-specific payload.

use crate::checker::{Node, NodeKind, TypeChecker, TypePrinter};
use crate::class::{ClassLikeDef, HeritageInfo};
use crate::classify::classify;
use crate::config::ExtractorConfig;
use crate::decorators::extract_decorators;
use crate::diagnostics::{ApiDocError, ApiDocResult};
use crate::function::{FunctionDef, OverloadDoc};
use crate::host::Host;
use crate::members::{Accessibility, MemberDoc, MemberResolver};
use crate::node::{
    ApiDoc, ApiDocDef, DeclarationRef, DocIdentity, DocKind, FileInfo, SourceLocation,
};
use crate::params::render_params;
use crate::program::{ModuleRecord, Program};
use crate::r#enum::EnumDef;
use crate::symbols::{DeclNode, Declaration, ExportSymbol, MemberTable};
use crate::transform::convert_private_classes_to_interfaces;
use crate::type_alias::TypeAliasDef;
use crate::utils::resolve::{project_relative_path, source_extension, strip_source_extension};
use crate::utils::swc::ParsedModule;
use crate::variable::{VariableDef, VariableKind};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::Spanned;
use regex::Regex;
use tracing::{debug, trace};

/// Builds documents from bound modules
pub struct Extractor {
    config: ExtractorConfig,
    host: Host,
    ignore_patterns: Vec<Regex>,
}

impl Extractor {
    /// Create an extractor; fails if an ignore pattern does not compile
    pub fn new(config: ExtractorConfig) -> ApiDocResult<Self> {
        let ignore_patterns = config.ignore_patterns()?;
        Ok(Self {
            host: config.host(),
            config,
            ignore_patterns,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Bind `program` and document every module, then post-process the
    /// whole collection
    pub fn run(&self, program: &Program) -> ApiDocResult<Vec<ApiDoc>> {
        let info = program.bind()?;
        let mut docs = Vec::new();
        for record in &info.module_records {
            docs.extend(self.extract_module(record)?);
        }

        if self.config.convert_private_classes_to_interfaces {
            convert_private_classes_to_interfaces(&mut docs, self.config.add_injectable_references);
        }
        debug!(docs = docs.len(), modules = info.module_records.len(), "extraction finished");
        Ok(docs)
    }

    /// Documents of one module, in export order
    pub fn extract_module(&self, record: &ModuleRecord<'_>) -> ApiDocResult<Vec<ApiDoc>> {
        let mut docs = Vec::with_capacity(record.exports.len());
        for symbol in &record.exports {
            let export_name = symbol.export_name();
            if self.ignore_patterns.iter().any(|p| p.is_match(export_name)) {
                trace!(module = %record.id, export = export_name, "ignoring export");
                continue;
            }
            if let Some(reason) = &symbol.unresolved {
                return Err(ApiDocError::unresolved(&record.id, export_name, reason.clone()));
            }
            docs.push(self.extract_export(record, symbol)?);
        }
        Ok(docs)
    }

    /// Build the document of one export symbol
    pub fn extract_export<'a>(
        &self,
        record: &ModuleRecord<'a>,
        symbol: &ExportSymbol<'a>,
    ) -> ApiDocResult<ApiDoc> {
        let kind = classify(symbol, &record.id)?;
        let decl = primary_declaration(kind, symbol, &record.id)?;
        let checker = record.checker.as_ref();

        // Derived fields in dependency order: identity from the name, file
        // info from the declaration, lines from the file info.
        let name = symbol.doc_name().to_string();
        let identity = DocIdentity::new(&record.id, &name);
        let file_info = file_info(record, &decl);
        let (starting_line, ending_line) = declaration_lines(&decl);
        let content = self.host.render_content(&decl);
        let original_module = strip_source_extension(&file_info.project_relative_path).to_string();

        let def = match (kind, decl.node) {
            (DocKind::Function, DeclNode::Function { function, .. }) => {
                self.function_def(checker, symbol, &decl, function)?
            }
            (DocKind::Enum, DeclNode::Enum(enum_decl)) => {
                self.enum_def(checker, &record.id, identity.id(), symbol, &decl, enum_decl)?
            }
            (DocKind::TypeAlias, DeclNode::TypeAlias(alias)) => {
                self.type_alias_def(checker, &decl, alias)?
            }
            (DocKind::Class, DeclNode::Class { class, .. }) => ApiDocDef::Class {
                class_def: self.class_def(checker, &record.id, identity.id(), symbol, &decl, class)?,
            },
            (DocKind::Interface, DeclNode::Interface(_)) => ApiDocDef::Interface {
                interface_def: self.interface_def(checker, &record.id, identity.id(), symbol, &decl)?,
            },
            (
                DocKind::Const | DocKind::Let | DocKind::Var,
                DeclNode::Variable {
                    kind,
                    declarator,
                    binding,
                },
            ) => {
                let node = NodeKind::Variable {
                    kind,
                    declarator,
                    binding,
                };
                let type_text = self.type_text(checker, decl.file, node)?;
                ApiDocDef::variable(VariableKind::from(kind), VariableDef::new(type_text))
            }
            (DocKind::Const, DeclNode::ExportExpression(expr)) => {
                let type_text = self.type_text(checker, decl.file, NodeKind::Expr(expr))?;
                ApiDocDef::Const {
                    variable_def: VariableDef::new(type_text),
                }
            }
            (kind, _) => {
                return Err(ApiDocError::missing_declaration(
                    &record.id,
                    symbol.export_name(),
                    kind.as_str(),
                ))
            }
        };

        let mut doc = ApiDoc::new(identity, def);
        doc.symbol_name = symbol.name.clone();
        doc.is_default = symbol.is_default;
        doc.declaration = Some(decl.to_ref(&record.id));
        doc.file_info = file_info;
        doc.starting_line = starting_line;
        doc.ending_line = ending_line;
        doc.content = content;
        doc.original_module = original_module;

        debug!(id = doc.id(), kind = %kind, "extracted export");
        Ok(doc)
    }

    fn type_text<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        file: &'a ParsedModule,
        kind: NodeKind<'a>,
    ) -> ApiDocResult<String> {
        self.host.render_type_text(checker, &Node::new(file, kind))
    }

    fn function_def<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        symbol: &ExportSymbol<'a>,
        primary: &Declaration<'a>,
        function: &'a swc_ast::Function,
    ) -> ApiDocResult<ApiDocDef> {
        let mut overloads = Vec::new();
        for decl in &symbol.declarations {
            let DeclNode::Function { function: other, .. } = decl.node else {
                continue;
            };
            if decl.is_same(primary) {
                continue;
            }
            let (starting_line, ending_line) = declaration_lines(decl);
            overloads.push(OverloadDoc {
                parameters: render_params(&self.host, checker, decl.file, &other.params)?,
                type_parameters: self.host.render_declaration_type_parameters(checker, decl)?,
                return_type: self.type_text(checker, decl.file, NodeKind::Function(other))?,
                content: self.host.render_content(decl),
                starting_line,
                ending_line,
            });
        }

        Ok(ApiDocDef::Function {
            function_def: FunctionDef {
                parameters: render_params(&self.host, checker, primary.file, &function.params)?,
                type_parameters: self.host.render_declaration_type_parameters(checker, primary)?,
                return_type: self.type_text(checker, primary.file, NodeKind::Function(function))?,
                is_async: function.is_async,
                is_generator: function.is_generator,
                overloads,
            },
        })
    }

    fn enum_def<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        module_id: &str,
        id: &str,
        symbol: &ExportSymbol<'a>,
        primary: &Declaration<'a>,
        enum_decl: &'a swc_ast::TsEnumDecl,
    ) -> ApiDocResult<ApiDocDef> {
        let resolver = MemberResolver::new(&self.host, checker, id);
        Ok(ApiDocDef::Enum {
            enum_def: EnumDef {
                members: resolver.resolve_enum_members(&symbol.member_table())?,
                additional_declarations: additional_declarations(module_id, symbol, primary),
                is_const: enum_decl.is_const,
            },
        })
    }

    fn type_alias_def<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        decl: &Declaration<'a>,
        alias: &'a swc_ast::TsTypeAliasDecl,
    ) -> ApiDocResult<ApiDocDef> {
        Ok(ApiDocDef::TypeAlias {
            type_alias_def: TypeAliasDef {
                type_parameters: self.host.render_declaration_type_parameters(checker, decl)?,
                type_definition: self.type_text(
                    checker,
                    decl.file,
                    NodeKind::TypeAliasTarget(&alias.type_ann),
                )?,
            },
        })
    }

    /// Payload shared by classes and interfaces, without heritage clauses
    fn class_like<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        module_id: &str,
        resolver: &MemberResolver<'_, 'a>,
        table: &MemberTable<'a>,
        symbol: &ExportSymbol<'a>,
        primary: &Declaration<'a>,
    ) -> ApiDocResult<ClassLikeDef> {
        Ok(ClassLikeDef {
            type_parameters: self.host.render_declaration_type_parameters(checker, primary)?,
            members: self.filter_members(resolver.resolve_members(table)?),
            additional_declarations: additional_declarations(module_id, symbol, primary),
            ..Default::default()
        })
    }

    fn class_def<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        module_id: &str,
        id: &str,
        symbol: &ExportSymbol<'a>,
        primary: &Declaration<'a>,
        class: &'a swc_ast::Class,
    ) -> ApiDocResult<ClassLikeDef> {
        let resolver = MemberResolver::new(&self.host, checker, id);
        let table = symbol.member_table();
        let mut def = self.class_like(checker, module_id, &resolver, &table, symbol, primary)?;
        let file = primary.file;
        let printer = TypePrinter::new(file, self.host.type_format);

        if let Some(super_class) = &class.super_class {
            let name = file.text_for_span(super_class.span()).to_string();
            let args = class
                .super_type_params
                .as_deref()
                .map(|args| printer.print_type_args(args))
                .unwrap_or_default();
            let text = format!("{}{}", name, args);
            def.extends_clauses.push(HeritageInfo::new(name, text));
        }
        def.implements_clauses = class
            .implements
            .iter()
            .map(|h| heritage(file, &printer, h))
            .collect();
        def.constructor_doc = resolver.resolve_constructor(&table)?;
        def.decorators = extract_decorators(file, &class.decorators);
        def.is_abstract = class.is_abstract;
        Ok(def)
    }

    fn interface_def<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        module_id: &str,
        id: &str,
        symbol: &ExportSymbol<'a>,
        primary: &Declaration<'a>,
    ) -> ApiDocResult<ClassLikeDef> {
        let resolver = MemberResolver::new(&self.host, checker, id);
        let table = symbol.member_table();
        let mut def = self.class_like(checker, module_id, &resolver, &table, symbol, primary)?;

        // Heritage of every merged interface block
        for decl in &symbol.declarations {
            let DeclNode::Interface(interface) = decl.node else {
                continue;
            };
            let printer = TypePrinter::new(decl.file, self.host.type_format);
            for clause in &interface.extends {
                let info = heritage(decl.file, &printer, clause);
                if !def.extends_clauses.contains(&info) {
                    def.extends_clauses.push(info);
                }
            }
        }
        Ok(def)
    }

    /// Apply the member visibility and ordering options
    fn filter_members(&self, mut members: Vec<MemberDoc>) -> Vec<MemberDoc> {
        if self.config.hide_private_members {
            members.retain(|m| m.accessibility != Accessibility::Private);
        }
        if self.config.sort_class_members {
            members.sort_by(|a, b| a.name.cmp(&b.name));
        }
        members
    }
}

/// The declaration a document of `kind` is built from
fn primary_declaration<'a>(
    kind: DocKind,
    symbol: &ExportSymbol<'a>,
    module_id: &str,
) -> ApiDocResult<Declaration<'a>> {
    let decls = &symbol.declarations;
    let first = |pred: fn(&DeclNode<'_>) -> bool| decls.iter().find(|d| pred(&d.node)).copied();

    let (found, expected) = match kind {
        DocKind::Function => (
            decls
                .iter()
                .find(|d| d.has_body())
                .copied()
                .or_else(|| first(|n| matches!(n, DeclNode::Function { .. }))),
            "function",
        ),
        DocKind::Class => (first(|n| matches!(n, DeclNode::Class { .. })), "class"),
        DocKind::Interface => (first(|n| matches!(n, DeclNode::Interface(_))), "interface"),
        DocKind::Enum => (first(|n| matches!(n, DeclNode::Enum(_))), "enum"),
        DocKind::TypeAlias => (first(|n| matches!(n, DeclNode::TypeAlias(_))), "type alias"),
        DocKind::Const | DocKind::Let | DocKind::Var => (
            first(|n| matches!(n, DeclNode::Variable { .. } | DeclNode::ExportExpression(_))),
            "variable",
        ),
    };
    found.ok_or_else(|| ApiDocError::missing_declaration(module_id, symbol.export_name(), expected))
}

fn heritage(
    file: &ParsedModule,
    printer: &TypePrinter<'_>,
    clause: &swc_ast::TsExprWithTypeArgs,
) -> HeritageInfo {
    let name = file.text_for_span(clause.expr.span()).to_string();
    let args = clause
        .type_args
        .as_deref()
        .map(|args| printer.print_type_args(args))
        .unwrap_or_default();
    let text = format!("{}{}", name, args);
    HeritageInfo::new(name, text)
}

fn file_info(record: &ModuleRecord<'_>, decl: &Declaration<'_>) -> FileInfo {
    let path = decl.file.path();
    FileInfo {
        file_path: path.display().to_string(),
        base_path: record.base_path.display().to_string(),
        project_relative_path: project_relative_path(&record.base_path, path),
        extension: source_extension(path),
        location: SourceLocation {
            start: decl.start_position(),
            end: decl.end_position(),
        },
    }
}

/// First and last line of a declaration
///
/// The start is the end of the previous statement; when that falls mid-line
/// the documentation starts on the following line.
fn declaration_lines(decl: &Declaration<'_>) -> (usize, usize) {
    let first_line = decl.file.position(decl.comment_pos()).line;
    (
        decl.start_position().starting_line(first_line),
        decl.end_position().line,
    )
}

/// Declarations of the symbol other than the one the document is built from
fn additional_declarations(
    module_id: &str,
    symbol: &ExportSymbol<'_>,
    primary: &Declaration<'_>,
) -> Vec<DeclarationRef> {
    symbol
        .declarations
        .iter()
        .filter(|d| !d.is_same(primary))
        .map(|d| d.to_ref(module_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::MemberKind;
    use crate::params::ParamDoc;
    use crate::test::{extract, extract_with, find_doc, BASE_PATH};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shared_fields() {
        let source = r#"import { x } from './x';

/**
 * Adds numbers
 */
export function add(a: number, b: number): number {
    return a + b;
}
"#;
        let docs = extract(&[("math/add.ts", source)]);
        let doc = find_doc(&docs, "math/add/add");

        assert_eq!(doc.name(), "add");
        assert_eq!(doc.aliases(), &["add".to_string(), "math/add/add".to_string()]);
        assert_eq!(doc.kind(), DocKind::Function);
        assert_eq!(doc.content, "Adds numbers");
        assert_eq!(doc.starting_line, 2);
        assert_eq!(doc.ending_line, 8);
        assert_eq!(doc.original_module, "math/add");
        assert_eq!(doc.file_info.project_relative_path, "math/add.ts");
        assert_eq!(doc.file_info.extension, "ts");
        assert_eq!(doc.file_info.file_path, format!("{}/math/add.ts", BASE_PATH));
        assert_eq!(doc.path, "");
        assert_eq!(doc.output_path, "");
    }

    #[test]
    fn test_declarations_sharing_a_line() {
        let source = "export const a = 1; export const b = 2;\n\nexport const c = 3;\n";
        let docs = extract(&[("index.ts", source)]);
        let lines = |id: &str| {
            let doc = find_doc(&docs, id);
            (doc.starting_line, doc.ending_line)
        };
        assert_eq!(lines("index/a"), (1, 1));
        assert_eq!(lines("index/b"), (1, 1));
        assert_eq!(lines("index/c"), (2, 3));
    }

    #[test]
    fn test_first_declaration_starts_on_line_one() {
        let docs = extract(&[("index.ts", "export const a = 1;\n")]);
        let doc = find_doc(&docs, "index/a");
        assert_eq!((doc.starting_line, doc.ending_line), (1, 1));
        assert_eq!(doc.def.variable_def().unwrap().type_text, "1");
    }

    #[test]
    fn test_function_overloads() {
        let source = r#"
/** String overload */
export function parse(input: string): number;
/** Buffer overload */
export function parse<T>(input: T[]): T;
/** Implementation */
export function parse(input: any): any {
    return input;
}
"#;
        let docs = extract(&[("parse.ts", source)]);
        let def = find_doc(&docs, "parse/parse").def.function_def().unwrap().clone();

        assert_eq!(def.parameters, vec![ParamDoc::new("input", "any")]);
        assert_eq!(def.return_type, "any");
        assert_eq!(def.overloads.len(), 2);
        assert_eq!(def.overloads[0].content, "String overload");
        assert_eq!(def.overloads[0].return_type, "number");
        assert_eq!(def.overloads[1].type_parameters, "<T>");
        assert_eq!(def.overloads[1].parameters, vec![ParamDoc::new("input", "T[]")]);
        assert_eq!(find_doc(&docs, "parse/parse").content, "Implementation");
    }

    #[test]
    fn test_declare_function_without_body() {
        let source = "export declare function a(x: string): void;\nexport declare function a(x: number): void;\n";
        let docs = extract(&[("decl.ts", source)]);
        let def = find_doc(&docs, "decl/a").def.function_def().unwrap().clone();
        assert_eq!(def.parameters, vec![ParamDoc::new("x", "string")]);
        assert_eq!(def.overloads.len(), 1);
        assert_eq!(def.overloads[0].parameters, vec![ParamDoc::new("x", "number")]);
    }

    #[test]
    fn test_enum_merge() {
        let source = r#"
export enum Color {
    Red = 1,
    Green,
}
export enum Color {
    Blue = 1 << 2,
}
"#;
        let docs = extract(&[("color.ts", source)]);
        let doc = find_doc(&docs, "color/Color");
        let def = doc.def.enum_def().unwrap();

        assert_eq!(def.additional_declarations.len(), 1);
        assert_eq!(def.additional_declarations[0].start.line, 6);
        let values: Vec<(&str, &str)> = def
            .members
            .iter()
            .map(|m| (m.name.as_str(), m.type_text.as_str()))
            .collect();
        assert_eq!(values, vec![("Red", "1"), ("Green", ""), ("Blue", "1 << 2")]);
        assert_eq!(def.members[0].id, "color/Color.Red");
        assert_eq!(def.members[0].member_kind, MemberKind::EnumMember);
    }

    #[test]
    fn test_type_alias_merged_with_namespace() {
        let source = r#"
export namespace Handler { export const kind = 'handler'; }
export type Handler<T> = (event: T) => void;
"#;
        let docs = extract(&[("handler.ts", source)]);
        let doc = find_doc(&docs, "handler/Handler");
        let def = doc.def.type_alias_def().unwrap();
        assert_eq!(def.type_parameters, "<T>");
        assert_eq!(def.type_definition, "(event: T) => void");
        assert_eq!(doc.starting_line, 3);
    }

    #[test]
    fn test_class_document() {
        let source = r#"
export interface Named { name: string }
export class Base<T> {}

/** A service */
@Injectable({ providedIn: 'root' })
export abstract class Service extends Base<string> implements Named, Iterable<number> {
    name = 'service';
    private secret = 1;
    abstract run(): void;
}
"#;
        let docs = extract(&[("service.ts", source)]);
        let doc = find_doc(&docs, "service/Service");
        let def = doc.def.class_like().unwrap();

        assert_eq!(doc.kind(), DocKind::Class);
        assert_eq!(doc.content, "A service");
        assert_eq!(def.extends_clauses, vec![HeritageInfo::new("Base", "Base<string>")]);
        assert_eq!(
            def.implements_clauses,
            vec![
                HeritageInfo::new("Named", "Named"),
                HeritageInfo::new("Iterable", "Iterable<number>"),
            ]
        );
        assert!(def.is_abstract);
        assert_eq!(def.decorators.len(), 1);
        assert_eq!(def.decorators[0].name, "Injectable");
        let names: Vec<&str> = def.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["name", "secret", "run"]);
        assert_eq!(def.member("name").unwrap().type_text, "string");
        assert!(def.member("run").unwrap().is_abstract);
        assert!(def.constructor_doc.is_none());
        assert_eq!(find_doc(&docs, "service/Base").def.class_like().unwrap().type_parameters, "<T>");
    }

    #[test]
    fn test_member_options() {
        let source = r#"
export class Zoo {
    zebra = 1;
    private keeper = 'k';
    ant = 2;
}
"#;
        let config = ExtractorConfig {
            hide_private_members: true,
            sort_class_members: true,
            ..Default::default()
        };
        let docs = extract_with(config, &[("zoo.ts", source)]);
        let def = find_doc(&docs, "zoo/Zoo").def.class_like().unwrap();
        let names: Vec<&str> = def.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ant", "zebra"]);
    }

    #[test]
    fn test_interface_merges_extends() {
        let source = r#"
export interface A {}
export interface B {}
export interface Merged extends A { a: string }
export interface Merged extends A, B { b: number }
"#;
        let docs = extract(&[("merged.ts", source)]);
        let doc = find_doc(&docs, "merged/Merged");
        let def = doc.def.class_like().unwrap();
        assert_eq!(doc.kind(), DocKind::Interface);
        assert_eq!(
            def.extends_clauses,
            vec![HeritageInfo::new("A", "A"), HeritageInfo::new("B", "B")]
        );
        assert_eq!(def.members.len(), 2);
        assert_eq!(def.additional_declarations.len(), 1);
    }

    #[test]
    fn test_aliased_and_default_exports() {
        let sources = [
            ("lib.ts", "export class Impl {}\nexport default function () {}\n"),
            ("index.ts", "export { Impl as Public } from './lib';\nexport let counter = 0;\nexport default { a: 1 };\n"),
        ];
        let docs = extract(&sources);

        let public = find_doc(&docs, "index/Public");
        assert_eq!(public.symbol_name, "Impl");
        assert_eq!(public.file_info.project_relative_path, "lib.ts");
        assert_eq!(public.original_module, "lib");

        let anonymous = find_doc(&docs, "lib/default");
        assert!(anonymous.is_default);
        assert_eq!(anonymous.kind(), DocKind::Function);

        assert_eq!(find_doc(&docs, "index/counter").kind(), DocKind::Let);
        let default = find_doc(&docs, "index/default");
        assert_eq!(default.kind(), DocKind::Const);
        assert_eq!(default.def.variable_def().unwrap().type_text, "{ a: number; }");
    }

    #[test]
    fn test_destructured_exports() {
        let source = r#"
const settings = { host: 'localhost', port: 80 };
const pair = [1, 2];

/** Connection settings */
export const { host, port: listenPort, retries = 3, ...extra } = settings;
export let [first, , second] = pair;
"#;
        let docs = extract(&[("index.ts", source)]);
        let summary: Vec<(&str, DocKind)> = docs.iter().map(|d| (d.id(), d.kind())).collect();
        assert_eq!(
            summary,
            vec![
                ("index/host", DocKind::Const),
                ("index/listenPort", DocKind::Const),
                ("index/retries", DocKind::Const),
                ("index/extra", DocKind::Const),
                ("index/first", DocKind::Let),
                ("index/second", DocKind::Let),
            ]
        );

        let port = find_doc(&docs, "index/listenPort");
        assert_eq!(port.content, "Connection settings");
        assert_eq!(port.starting_line, 4);
        assert_eq!(port.def.variable_def().unwrap().type_text, "any");
    }

    #[test]
    fn test_recursive_functions_do_not_overflow() {
        let source = r#"
export function next() { return next; }
export function ping() { return pong; }
export function pong() { return ping; }
"#;
        let docs = extract(&[("index.ts", source)]);
        let return_type = |id: &str| find_doc(&docs, id).def.function_def().unwrap().return_type.clone();
        assert_eq!(return_type("index/next"), "() => any");
        assert_eq!(return_type("index/ping"), "() => () => any");
        assert_eq!(return_type("index/pong"), "() => () => any");
    }

    #[test]
    fn test_ignore_patterns() {
        let source = "export const ___esModule = true;\nexport const ___esModuleFlag = 0;\nexport const _hidden = 1;\nexport const shown = 2;\n";
        let docs = extract(&[("index.ts", source)]);
        let ids: Vec<&str> = docs.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["index/___esModuleFlag", "index/_hidden", "index/shown"]);

        let config = ExtractorConfig {
            ignore_exports_matching: vec!["/^_/".to_string()],
            ..Default::default()
        };
        let docs = extract_with(config, &[("index.ts", source)]);
        let ids: Vec<&str> = docs.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["index/shown"]);
    }

    #[test]
    fn test_unresolved_export_is_fatal() {
        let mut program = Program::new(BASE_PATH);
        program
            .add_source("index.ts", "export { gone } from './missing';\n")
            .unwrap();
        let err = Extractor::new(ExtractorConfig::default())
            .unwrap()
            .run(&program)
            .unwrap_err();
        assert!(matches!(err, ApiDocError::UnresolvedExport { ref name, .. } if name == "gone"));
    }

    #[test]
    fn test_namespace_export_is_a_classification_error() {
        let mut program = Program::new(BASE_PATH);
        program
            .add_source("index.ts", "export namespace Utils { export const a = 1; }\n")
            .unwrap();
        let err = Extractor::new(ExtractorConfig::default())
            .unwrap()
            .run(&program)
            .unwrap_err();
        assert!(matches!(err, ApiDocError::Classification { .. }));
    }

    #[test]
    fn test_run_converts_internal_classes() {
        let source = r#"
export interface Listener {}
export class Registry implements Listener {
    /** @internal */
    constructor() {}
}
"#;
        let config = ExtractorConfig {
            convert_private_classes_to_interfaces: true,
            add_injectable_references: true,
            ..Default::default()
        };
        let docs = extract_with(config, &[("registry.ts", source)]);
        let kinds: Vec<(&str, DocKind)> = docs.iter().map(|d| (d.id(), d.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                ("registry/Listener", DocKind::Interface),
                ("registry/Registry", DocKind::Interface),
                ("registry/Registry", DocKind::Const),
            ]
        );
        assert!(docs[2].def.is_injectable_reference());
    }
}
