//! Type rendering host
//!
//! Operations that turn AST nodes into documentation text and that should be
//! configured once and shared by every document kind: leading comment
//! extraction, type text and type parameter lists.

use crate::checker::{Node, NodeKind, TypeChecker, TypeFormatFlags, TypePrinter};
use crate::diagnostics::ApiDocResult;
use crate::symbols::Declaration;
use crate::utils::swc::ParsedModule;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::comments::CommentKind;
use deno_ast::swc::common::BytePos;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Module qualification left behind by fully qualified type printing
    static ref IMPORT_PREFIX: Regex = Regex::new(r#"import\("[^"]+"\)\."#).unwrap();

    /// The `*` gutter at the start of a doc comment line
    static ref LEADING_STAR: Regex = Regex::new(r"^[^\S\r\n]*\*[^\S\n\r]?").unwrap();
}

/// Shared rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Host {
    /// Join every leading doc comment instead of keeping only the nearest
    pub concat_multiple_leading_comments: bool,
    /// Format used when printing types
    pub type_format: TypeFormatFlags,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            concat_multiple_leading_comments: true,
            type_format: TypeFormatFlags::default(),
        }
    }
}

impl Host {
    pub fn new(concat_multiple_leading_comments: bool) -> Self {
        Self {
            concat_multiple_leading_comments,
            ..Self::default()
        }
    }

    /// Documentation comment text preceding a declaration
    pub fn render_content(&self, declaration: &Declaration<'_>) -> String {
        self.render_content_at(declaration.file, declaration.comment_pos())
    }

    /// Documentation comment text attached before `pos`
    pub fn render_content_at(&self, file: &ParsedModule, pos: BytePos) -> String {
        let blocks: Vec<String> = file
            .leading_comments(pos)
            .iter()
            .filter(|c| c.kind == CommentKind::Block && c.text.starts_with('*'))
            .filter(|c| !c.text.contains("@license"))
            .map(|c| strip_comment(&c.text))
            .collect();

        if self.concat_multiple_leading_comments {
            blocks.join("\n")
        } else {
            blocks.last().cloned().unwrap_or_default()
        }
    }

    /// Printable type of a node
    ///
    /// Type alias targets print as written; annotated nodes print the
    /// annotation's type; anything else prints the type inferred at the node.
    pub fn render_type_text<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        node: &Node<'a>,
    ) -> ApiDocResult<String> {
        let text = if let NodeKind::TypeAliasTarget(ty) = node.kind {
            TypePrinter::new(node.file, self.type_format).print(ty)
        } else if let Some(annotation) = node.annotation() {
            let ty = checker.type_from_type_node(node.file, annotation)?;
            checker.type_to_string(&ty, self.type_format)
        } else {
            let ty = checker.type_at_location(node)?;
            checker.type_to_string(&ty, self.type_format)
        };

        Ok(IMPORT_PREFIX.replace_all(&text, "").into_owned())
    }

    /// `<T, U>` for a declaration's own type parameters, or an empty string
    pub fn render_type_parameters_text<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        file: &'a ParsedModule,
        type_params: Option<&'a swc_ast::TsTypeParamDecl>,
    ) -> ApiDocResult<String> {
        let Some(decl) = type_params else {
            return Ok(String::new());
        };
        let mut params = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            params.push(self.render_type_text(checker, &Node::new(file, NodeKind::TypeParam(param)))?);
        }
        Ok(format!("<{}>", params.join(", ")))
    }

    /// Type parameter text of a top-level declaration
    pub fn render_declaration_type_parameters<'a>(
        &self,
        checker: &dyn TypeChecker<'a>,
        declaration: &Declaration<'a>,
    ) -> ApiDocResult<String> {
        self.render_type_parameters_text(checker, declaration.file, declaration.type_params())
    }
}

/// Strip the opening `*` and per-line gutters of a `/** */` comment body
fn strip_comment(text: &str) -> String {
    let body = text.strip_prefix('*').unwrap_or(text);
    body.lines()
        .map(|line| LEADING_STAR.replace(line, ""))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::SyntacticChecker;
    use crate::symbols::{DeclNode, MemberNode, ModuleScope};
    use crate::test::parse_fixture;
    use pretty_assertions::assert_eq;

    const MULTIPLE_LEADING_COMMENTS: &str = r#"
/** @license
 * Copyright Example Corp.
 */

/**
 * Not a license comment.
 */

/**
 * This is a test function
 */
export function testFunction() {}
"#;

    #[test]
    fn test_render_content_concatenates_comments() {
        let parsed = parse_fixture("multipleLeadingComments.ts", MULTIPLE_LEADING_COMMENTS);
        let scope = ModuleScope::collect(&parsed).unwrap();
        let decl = &scope.locals["testFunction"][0];

        assert_eq!(
            Host::new(true).render_content(decl),
            "Not a license comment.\nThis is a test function"
        );
        assert_eq!(
            Host::new(false).render_content(decl),
            "This is a test function"
        );
    }

    #[test]
    fn test_render_content_ignores_plain_comments() {
        let source = "// line comment\n/* block comment */\nexport const a = 1;\n";
        let parsed = parse_fixture("plain.ts", source);
        let scope = ModuleScope::collect(&parsed).unwrap();
        assert_eq!(Host::default().render_content(&scope.locals["a"][0]), "");
    }

    #[test]
    fn test_strip_comment_keeps_inner_lines() {
        assert_eq!(
            strip_comment("*\n * First line\n *   indented\n "),
            "First line\n  indented"
        );
        assert_eq!(strip_comment("* Single line "), "Single line");
    }

    const DECLARATION_TYPE_TEXT: &str = r#"
export const testConst = 42;
export let testVar = 42;
export function testFunction<T>(param1: T[]): number {
    return 0;
}
export class OtherClass<T, U> {}
export class TestClass<T> {
    prop1: T[];
    prop2: OtherClass<T, T>;
    prop3: OtherClass<T, string>;
    method(): T { return this.prop1[0]; }
}
"#;

    #[test]
    fn test_render_declaration_type_text() {
        let parsed = parse_fixture("getDeclarationTypeText.test.ts", DECLARATION_TYPE_TEXT);
        let scope = ModuleScope::collect(&parsed).unwrap();
        let checker = SyntacticChecker::from_scopes([&scope]);
        let host = Host::default();
        let text = |kind| host.render_type_text(&checker, &Node::new(&parsed, kind)).unwrap();

        let variable = |name: &str| match scope.locals[name][0].node {
            DeclNode::Variable {
                kind,
                declarator,
                binding,
            } => NodeKind::Variable {
                kind,
                declarator,
                binding,
            },
            _ => panic!("expected a variable"),
        };
        assert_eq!(text(variable("testConst")), "42");
        assert_eq!(text(variable("testVar")), "number");

        let DeclNode::Function { function, .. } = scope.locals["testFunction"][0].node else {
            panic!("expected a function");
        };
        assert_eq!(text(NodeKind::Function(function)), "number");
        assert_eq!(text(NodeKind::Param(&function.params[0].pat)), "T[]");
        let type_params = function.type_params.as_deref().unwrap();
        assert_eq!(text(NodeKind::TypeParam(&type_params.params[0])), "T");

        let table = scope.locals["TestClass"][0..1].to_vec();
        let members = crate::symbols::MemberTable::from_declarations(&table);
        let member_text = |name: &str| {
            let member = &members.members[&(name.to_string(), false)].declarations[0];
            match member.node {
                MemberNode::Property(p) => text(NodeKind::ClassProp(p)),
                MemberNode::Method(m) => text(NodeKind::Function(&m.function)),
                _ => panic!("unexpected member"),
            }
        };
        assert_eq!(member_text("prop1"), "T[]");
        assert_eq!(member_text("prop2"), "OtherClass<T, T>");
        assert_eq!(member_text("prop3"), "OtherClass<T, string>");
        assert_eq!(member_text("method"), "T");
    }

    #[test]
    fn test_object_initializer_is_not_truncated() {
        let names = [
            "XSmall", "Small", "Medium", "Large", "XLarge", "Handset", "Tablet", "Web",
            "HandsetPortrait", "TabletPortrait", "WebPortrait", "HandsetLandscape",
            "TabletLandscape", "WebLandscape",
        ];
        let props: Vec<String> = names.iter().map(|n| format!("    {}: '(query)',", n)).collect();
        let source = format!("export const Breakpoints = {{\n{}\n}};\n", props.join("\n"));
        let parsed = parse_fixture("breakpoints.ts", &source);
        let scope = ModuleScope::collect(&parsed).unwrap();
        let checker = SyntacticChecker::from_scopes([&scope]);
        let DeclNode::Variable {
            kind,
            declarator,
            binding,
        } = scope.locals["Breakpoints"][0].node
        else {
            panic!("expected a variable");
        };

        let text = Host::default()
            .render_type_text(
                &checker,
                &Node::new(
                    &parsed,
                    NodeKind::Variable {
                        kind,
                        declarator,
                        binding,
                    },
                ),
            )
            .unwrap();
        let expected: Vec<String> = names.iter().map(|n| format!("{}: string;", n)).collect();
        assert_eq!(text, format!("{{ {} }}", expected.join(" ")));
    }

    const TYPE_TEXT: &str = r#"
export class TestClass {}
export type TestType = TestClass;
export function testFunction(): string { return ''; }
export const testConst: number = 1;
export let testLet: TestClass;
export type TestUnion = TestClass | string;
export type TestLiteral = { x: number, y: string };
export type TestGeneric1 = Array<string>;
export type TestGeneric2<T> = Array<T>;
export type TestType2 = {
    /** the a prop */
    a: number;
    // the b prop
    b: string;
} & { a: string };
export type Imported = import("./other").Remote<string>;
"#;

    /// The type node written on the first declaration of `name`
    fn written_type<'a>(scope: &ModuleScope<'a>, name: &str) -> NodeKind<'a> {
        match scope.locals[name][0].node {
            DeclNode::TypeAlias(alias) => NodeKind::TypeAliasTarget(&alias.type_ann),
            DeclNode::Function { function, .. } => {
                NodeKind::TypeNode(crate::checker::type_ann(&function.return_type).unwrap())
            }
            DeclNode::Variable { declarator, .. } => {
                NodeKind::TypeNode(crate::checker::pat_annotation(&declarator.name).unwrap())
            }
            _ => panic!("no written type for {}", name),
        }
    }

    #[test]
    fn test_render_type_text_of_type_nodes() {
        let parsed = parse_fixture("getTypeText.test.ts", TYPE_TEXT);
        let scope = ModuleScope::collect(&parsed).unwrap();
        let checker = SyntacticChecker::from_scopes([&scope]);
        let host = Host::default();
        let text = |name: &str| {
            host.render_type_text(&checker, &Node::new(&parsed, written_type(&scope, name)))
                .unwrap()
        };

        assert_eq!(text("TestType"), "TestClass");
        assert_eq!(text("testFunction"), "string");
        assert_eq!(text("testConst"), "number");
        assert_eq!(text("testLet"), "TestClass");
        assert_eq!(text("TestUnion"), "TestClass | string");
        assert_eq!(text("TestLiteral"), "{\n    x: number;\n    y: string;\n}");
        assert_eq!(text("TestGeneric1"), "Array<string>");
        assert_eq!(text("TestGeneric2"), "Array<T>");
        assert_eq!(
            text("TestType2"),
            ["{", "    a: number;", "    b: string;", "} & {", "    a: string;", "}"].join("\n")
        );
        assert_eq!(text("Imported"), "Remote<string>");
    }

    #[test]
    fn test_render_type_parameters_text() {
        let source = r#"
export function testFunction<T, U, V>() {}
export class TestClass<T> {
    method<U>(value: U): T { return null as any; }
}
export const plain = 1;
"#;
        let parsed = parse_fixture("getTypeParametersText.test.ts", source);
        let scope = ModuleScope::collect(&parsed).unwrap();
        let checker = SyntacticChecker::from_scopes([&scope]);
        let host = Host::default();

        assert_eq!(
            host.render_declaration_type_parameters(&checker, &scope.locals["testFunction"][0])
                .unwrap(),
            "<T, U, V>"
        );
        let class = &scope.locals["TestClass"][0];
        assert_eq!(
            host.render_declaration_type_parameters(&checker, class).unwrap(),
            "<T>"
        );
        let DeclNode::Class { class: class_node, .. } = class.node else {
            panic!("expected a class");
        };
        let swc_ast::ClassMember::Method(method) = &class_node.body[0] else {
            panic!("expected a method");
        };
        assert_eq!(
            host.render_type_parameters_text(&checker, &parsed, method.function.type_params.as_deref())
                .unwrap(),
            "<U>"
        );
        assert_eq!(
            host.render_declaration_type_parameters(&checker, &scope.locals["plain"][0])
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_invalid_node_is_a_type_error() {
        let parsed = parse_fixture("invalid.ts", "\nexport default 1;\n");
        let lo = deno_ast::swc::common::Spanned::span(&parsed.module().unwrap().body[0]).lo;
        let invalid = swc_ast::Expr::Invalid(swc_ast::Invalid {
            span: deno_ast::swc::common::Span::new(lo, lo),
        });
        let checker = SyntacticChecker::new();

        let err = Host::default()
            .render_type_text(&checker, &Node::new(&parsed, NodeKind::Expr(&invalid)))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::diagnostics::ApiDocError::TypeResolution { line: 2, col: 0, .. }
        ));
    }
}
