//! Parameter documentation
//!
//! Parameters are rendered once, while the AST is alive, into name/type text
//! records that downstream renderers can print without a type checker.

use crate::checker::printer::{fn_param_name, pattern_name};
use crate::checker::{Node, NodeKind, TypeChecker};
use crate::diagnostics::ApiDocResult;
use crate::host::Host;
use crate::symbols::param_prop_name;
use crate::utils::swc::ParsedModule;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::Spanned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One formal parameter of a function, method or signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDoc {
    /// Parameter name; destructuring patterns print as written (`{ a, b }`)
    pub name: String,

    /// Rendered type text
    #[serde(rename = "type")]
    pub type_text: String,

    /// Declared with `?` or given a default value
    #[serde(default)]
    pub is_optional: bool,

    /// Source text of the default value
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<String>,

    /// Rest parameter (`...args`)
    #[serde(default)]
    pub is_rest: bool,
}

impl ParamDoc {
    /// Create a required parameter
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            is_optional: false,
            default_value: None,
            is_rest: false,
        }
    }

    /// Mark as optional
    pub fn as_optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Set the default value; implies optional
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self.is_optional = true;
        self
    }

    /// Mark as a rest parameter
    pub fn as_rest(mut self) -> Self {
        self.is_rest = true;
        self
    }
}

impl fmt::Display for ParamDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rest {
            f.write_str("...")?;
        }
        f.write_str(&self.name)?;
        if self.is_optional && self.default_value.is_none() {
            f.write_str("?")?;
        }
        if !self.type_text.is_empty() {
            write!(f, ": {}", self.type_text)?;
        }
        if let Some(default) = &self.default_value {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// Render a parameter list as `(a: string, b?: number)`
pub fn format_params(params: &[ParamDoc]) -> String {
    let params: Vec<String> = params.iter().map(ToString::to_string).collect();
    format!("({})", params.join(", "))
}

/// Render the formal parameters of a function or method
pub fn render_params<'a>(
    host: &Host,
    checker: &dyn TypeChecker<'a>,
    file: &'a ParsedModule,
    params: &'a [swc_ast::Param],
) -> ApiDocResult<Vec<ParamDoc>> {
    params
        .iter()
        .map(|p| render_pat(host, checker, file, &p.pat))
        .collect()
}

/// Render the parameters of a constructor, parameter properties included
pub fn render_ctor_params<'a>(
    host: &Host,
    checker: &dyn TypeChecker<'a>,
    file: &'a ParsedModule,
    params: &'a [swc_ast::ParamOrTsParamProp],
) -> ApiDocResult<Vec<ParamDoc>> {
    let mut docs = Vec::with_capacity(params.len());
    for param in params {
        let doc = match param {
            swc_ast::ParamOrTsParamProp::Param(p) => render_pat(host, checker, file, &p.pat)?,
            swc_ast::ParamOrTsParamProp::TsParamProp(prop) => {
                let type_text =
                    host.render_type_text(checker, &Node::new(file, NodeKind::ParamProperty(prop)))?;
                let mut doc = ParamDoc::new(param_prop_name(prop).unwrap_or_default(), type_text);
                match &prop.param {
                    swc_ast::TsParamPropParam::Ident(i) if i.id.optional => {
                        doc = doc.as_optional();
                    }
                    swc_ast::TsParamPropParam::Assign(a) => {
                        doc = doc.with_default(file.text_for_span(a.right.span()));
                    }
                    swc_ast::TsParamPropParam::Ident(_) => {}
                }
                doc
            }
        };
        docs.push(doc);
    }
    Ok(docs)
}

/// Render the parameters of a signature (interface method, call signature)
pub fn render_fn_params<'a>(
    host: &Host,
    checker: &dyn TypeChecker<'a>,
    file: &'a ParsedModule,
    params: &'a [swc_ast::TsFnParam],
) -> ApiDocResult<Vec<ParamDoc>> {
    let mut docs = Vec::with_capacity(params.len());
    for param in params {
        let type_text = host.render_type_text(checker, &Node::new(file, NodeKind::FnParam(param)))?;
        let mut doc = ParamDoc::new(fn_param_name(param), type_text);
        match param {
            swc_ast::TsFnParam::Ident(i) if i.id.optional => doc = doc.as_optional(),
            swc_ast::TsFnParam::Array(a) if a.optional => doc = doc.as_optional(),
            swc_ast::TsFnParam::Object(o) if o.optional => doc = doc.as_optional(),
            swc_ast::TsFnParam::Rest(_) => doc = doc.as_rest(),
            _ => {}
        }
        docs.push(doc);
    }
    Ok(docs)
}

fn render_pat<'a>(
    host: &Host,
    checker: &dyn TypeChecker<'a>,
    file: &'a ParsedModule,
    pat: &'a swc_ast::Pat,
) -> ApiDocResult<ParamDoc> {
    let type_text = host.render_type_text(checker, &Node::new(file, NodeKind::Param(pat)))?;
    let mut doc = ParamDoc::new(pattern_name(pat), type_text);
    match pat {
        swc_ast::Pat::Ident(i) if i.id.optional => doc = doc.as_optional(),
        swc_ast::Pat::Array(a) if a.optional => doc = doc.as_optional(),
        swc_ast::Pat::Object(o) if o.optional => doc = doc.as_optional(),
        swc_ast::Pat::Assign(a) => doc = doc.with_default(file.text_for_span(a.right.span())),
        swc_ast::Pat::Rest(_) => doc = doc.as_rest(),
        _ => {}
    }
    Ok(doc)
}
