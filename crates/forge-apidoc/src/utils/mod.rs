//! Utilities for forge-apidoc
//!
//! - SWC/deno_ast TypeScript parsing
//! - Module specifier resolution between sources of one program

pub mod resolve;
pub mod swc;

pub use swc::{parse_typescript_file, parse_typescript_source, ParsedModule, SourceInfo};
