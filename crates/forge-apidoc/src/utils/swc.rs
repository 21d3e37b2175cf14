//! SWC/deno_ast TypeScript parsing utilities
//!
//! This module wraps deno_ast (which wraps SWC) for the rest of the crate:
//! - Parsing TypeScript/JavaScript sources into modules
//! - Leading comment lookup for content extraction
//! - Line/column tracking
//! - Source text extraction for spans

use crate::diagnostics::{ApiDocError, ApiDocResult};
use crate::node::Position;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::comments::Comment;
use deno_ast::swc::common::{BytePos, Span};
use deno_ast::{MediaType, ParseParams, ParsedSource, SourcePos, SourceRange, SourceTextInfo};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Information about the source file
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// The file path
    pub path: PathBuf,
    /// The source text
    pub text: Arc<str>,
    /// Source text info for location lookups
    pub text_info: SourceTextInfo,
}

impl SourceInfo {
    /// Create source info from a file path and content
    pub fn new(path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Self {
        let text: Arc<str> = text.into();
        let text_info = SourceTextInfo::new(text.clone());
        Self {
            path: path.into(),
            text,
            text_info,
        }
    }

    /// Convert a byte position to a 1-indexed line and 0-indexed column
    pub fn line_col(&self, pos: BytePos) -> (usize, usize) {
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        let line_and_col = self.text_info.line_and_column_index(source_pos);
        (line_and_col.line_index + 1, line_and_col.column_index)
    }

    /// Convert a byte position to a `Position`
    pub fn position(&self, pos: BytePos) -> Position {
        let (line, character) = self.line_col(pos);
        Position { line, character }
    }

    /// Extract source text for a span
    pub fn text_for_span(&self, span: Span) -> &str {
        let range = SourceRange::new(
            SourcePos::unsafely_from_byte_pos(span.lo),
            SourcePos::unsafely_from_byte_pos(span.hi),
        );
        self.text_info.range_text(&range)
    }
}

/// A parsed TypeScript module with source information
#[derive(Debug)]
pub struct ParsedModule {
    /// The parsed source from deno_ast
    pub source: ParsedSource,
    /// Source information for location lookups
    pub source_info: SourceInfo,
}

impl ParsedModule {
    /// Get the module AST
    ///
    /// Sources parsed as scripts have no export surface and are rejected.
    pub fn module(&self) -> ApiDocResult<&swc_ast::Module> {
        match self.source.program_ref() {
            deno_ast::ProgramRef::Module(m) => Ok(m),
            deno_ast::ProgramRef::Script(_) => Err(ApiDocError::parse(
                self.path(),
                "expected an ES module but the source parsed as a script",
            )),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.source_info.path
    }

    /// Convert a byte position to a `Position`
    pub fn position(&self, pos: BytePos) -> Position {
        self.source_info.position(pos)
    }

    /// Extract source text for a span
    pub fn text_for_span(&self, span: Span) -> &str {
        self.source_info.text_for_span(span)
    }

    /// Get leading comments for a position
    pub fn leading_comments(&self, pos: BytePos) -> Vec<Comment> {
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        self.source
            .comments()
            .get_leading(source_pos)
            .map(|v| v.to_vec())
            .unwrap_or_default()
    }

    /// End of the token before the node at `pos`
    ///
    /// The node's leading comments and the whitespace around them are skipped.
    pub fn full_start(&self, pos: BytePos) -> BytePos {
        let pos = self
            .leading_comments(pos)
            .first()
            .map(|c| c.span.lo)
            .unwrap_or(pos);
        let text_info = &self.source_info.text_info;
        let start = text_info.range().start;
        let before =
            text_info.range_text(&SourceRange::new(start.into(), SourcePos::unsafely_from_byte_pos(pos)));
        (start + before.trim_end().len()).as_byte_pos()
    }

    /// Build a type resolution error pointing at `pos`
    pub fn type_error(&self, pos: BytePos, message: impl Into<String>) -> ApiDocError {
        let (line, col) = self.source_info.line_col(pos);
        ApiDocError::type_resolution(self.path(), line, col, message)
    }
}

/// Parse a TypeScript file from disk
pub fn parse_typescript_file(path: impl AsRef<Path>) -> ApiDocResult<ParsedModule> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        ApiDocError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    parse_typescript_source(path, text)
}

/// Parse TypeScript source code from a string
pub fn parse_typescript_source(
    path: impl AsRef<Path>,
    source: impl Into<Arc<str>>,
) -> ApiDocResult<ParsedModule> {
    let path = path.as_ref();
    let source: Arc<str> = source.into();

    let media_type = MediaType::from_path(path);

    // deno_ast requires absolute paths for file specifiers
    let specifier = deno_ast::ModuleSpecifier::from_file_path(path)
        .map_err(|_| ApiDocError::InvalidPath(path.display().to_string()))?;

    let parsed = deno_ast::parse_module(ParseParams {
        specifier,
        text: source.clone(),
        media_type,
        capture_tokens: true,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|e| ApiDocError::parse(path, e.to_string()))?;

    tracing::debug!(path = %path.display(), len = source.len(), "parsed module");

    Ok(ParsedModule {
        source: parsed,
        source_info: SourceInfo::new(path, source),
    })
}

/// Convert a string literal's Wtf8Atom value to a String
pub fn str_value(s: &swc_ast::Str) -> String {
    String::from_utf8_lossy(s.value.as_bytes()).into_owned()
}

/// Get the name of an export/import specifier
pub fn module_export_name_str(name: &swc_ast::ModuleExportName) -> String {
    match name {
        swc_ast::ModuleExportName::Ident(i) => i.sym.to_string(),
        swc_ast::ModuleExportName::Str(s) => str_value(s),
    }
}

/// Get the name of a property key
pub fn prop_name_str(name: &swc_ast::PropName) -> Option<String> {
    match name {
        swc_ast::PropName::Ident(i) => Some(i.sym.to_string()),
        swc_ast::PropName::Str(s) => Some(str_value(s)),
        swc_ast::PropName::Num(n) => Some(n.value.to_string()),
        swc_ast::PropName::BigInt(b) => Some(b.value.to_string()),
        swc_ast::PropName::Computed(c) => expr_to_name(&c.expr).map(|n| format!("[{}]", n)),
    }
}

/// Get the name from an expression (for computed properties and signature keys)
pub fn expr_to_name(expr: &swc_ast::Expr) -> Option<String> {
    match expr {
        swc_ast::Expr::Ident(i) => Some(i.sym.to_string()),
        swc_ast::Expr::Lit(swc_ast::Lit::Str(s)) => Some(str_value(s)),
        swc_ast::Expr::Lit(swc_ast::Lit::Num(n)) => Some(n.value.to_string()),
        swc_ast::Expr::Member(m) => {
            // Symbol.iterator and friends
            let obj = expr_to_name(&m.obj)?;
            let prop = match &m.prop {
                swc_ast::MemberProp::Ident(i) => i.sym.to_string(),
                swc_ast::MemberProp::Computed(c) => expr_to_name(&c.expr)?,
                swc_ast::MemberProp::PrivateName(p) => format!("#{}", p.name),
            };
            Some(format!("{}.{}", obj, prop))
        }
        _ => None,
    }
}

/// Format a numeric literal the way the type printer shows it
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
