//! forge-apidoc: API documentation model extraction for Forge
//!
//! This crate turns the exports of TypeScript modules into typed
//! documentation records by:
//! - Parsing TypeScript sources using deno_ast/SWC
//! - Binding each module's export list, following re-exports and merged
//!   declarations back to their source
//! - Classifying every export (class, interface, function, enum, type alias,
//!   const/let/var) and synthesizing one `ApiDoc` per export
//! - Rendering type, parameter and member text while the AST is alive, so
//!   downstream renderers never need a type checker
//! - Rewriting classes with an `@internal` constructor into interfaces
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐
//! │ Program         │───▶│ ModuleRecord     │
//! │ (SWC parse)     │    │ (export symbols) │
//! └─────────────────┘    └────────┬─────────┘
//!                                 │ classify
//!                                 ▼
//!          ┌──────────────┐  ┌──────────┐  ┌────────────────┐
//!          │ Host +       │─▶│ Extractor│◀─│ MemberResolver │
//!          │ TypeChecker  │  └────┬─────┘  └────────────────┘
//!          └──────────────┘       │
//!                                 ▼
//!                          ┌─────────────┐
//!                          │ Vec<ApiDoc> │──▶ convert_private_classes_to_interfaces
//!                          └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use forge_apidoc::{Extractor, ExtractorConfig, Program};
//!
//! let mut program = Program::new("/project/src");
//! program.add_file("index.ts")?;
//!
//! let docs = Extractor::new(ExtractorConfig::default())?.run(&program)?;
//! for doc in &docs {
//!     println!("{} ({})", doc.id(), doc.kind());
//! }
//! # Ok::<(), forge_apidoc::ApiDocError>(())
//! ```

// Document model
pub mod js_doc;
pub mod node;
pub mod params;

// Kind payloads
pub mod class;
pub mod decorators;
pub mod r#enum;
pub mod function;
pub mod members;
pub mod type_alias;
pub mod variable;

// Parsing, binding and type text
pub mod checker;
pub mod diagnostics;
pub mod host;
pub mod program;
pub mod symbols;
pub mod utils;

// Synthesis
pub mod classify;
pub mod config;
pub mod extractor;
pub mod transform;

// Re-exports for convenience
pub use checker::{SyntacticChecker, TypeChecker, TypeFormatFlags};
pub use class::{ClassLikeDef, ConstructorDoc, HeritageInfo};
pub use classify::classify;
pub use config::ExtractorConfig;
pub use decorators::DecoratorDoc;
pub use diagnostics::{ApiDocError, ApiDocResult};
pub use extractor::Extractor;
pub use function::{FunctionDef, OverloadDoc, Parameterized};
pub use host::Host;
pub use js_doc::{JsDoc, JsDocTag};
pub use members::{Accessibility, MemberDoc, MemberKind};
pub use node::{ApiDoc, ApiDocDef, DeclarationRef, DocIdentity, DocKind, FileInfo, Position};
pub use params::ParamDoc;
pub use program::{ModuleRecord, ParseInfo, Program};
pub use r#enum::EnumDef;
pub use symbols::{AliasSymbol, ExportSymbol};
pub use transform::convert_private_classes_to_interfaces;
pub use type_alias::TypeAliasDef;
pub use variable::{VariableDef, VariableKind, INJECTABLE_REFERENCE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
