//! Parse pass front end
//!
//! A [`Program`] owns the parsed sources of one pass. Binding it walks each
//! module's export list and traces every exported name back to the
//! declarations that define it, following re-exports and imports through
//! the other sources of the program.
//!
//! ```text
//! add_source / add_file ──▶ ParsedModule ──▶ ModuleScope
//!                                                 │
//!                            bind() ◀─────────────┘
//!                              │
//!                              ▼
//!                 ModuleRecord { exports: [ExportSymbol] }
//! ```

use crate::checker::{SyntacticChecker, TypeChecker};
use crate::diagnostics::ApiDocResult;
use crate::symbols::{AliasSymbol, ExportEntry, ExportSymbol, ImportedName, ModuleScope};
use crate::utils::resolve::{module_id, resolve_specifier};
use crate::utils::swc::{parse_typescript_file, parse_typescript_source, ParsedModule};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, trace};

/// Sources of one parse pass
pub struct Program {
    base_path: PathBuf,
    modules: Vec<ParsedModule>,
}

impl Program {
    /// Create an empty program; module ids are relative to `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            modules: Vec::new(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Parse source text held in memory
    ///
    /// Relative paths are taken relative to the base path.
    pub fn add_source(&mut self, path: impl AsRef<Path>, text: &str) -> ApiDocResult<&mut Self> {
        let path = self.base_path.join(path.as_ref());
        let parsed = parse_typescript_source(&path, text)?;
        self.modules.push(parsed);
        Ok(self)
    }

    /// Read and parse a source file
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> ApiDocResult<&mut Self> {
        let path = self.base_path.join(path.as_ref());
        let parsed = parse_typescript_file(&path)?;
        self.modules.push(parsed);
        Ok(self)
    }

    /// Parsed sources in the order they were added
    pub fn modules(&self) -> &[ParsedModule] {
        &self.modules
    }

    /// Bind every source into a module record
    pub fn bind(&self) -> ApiDocResult<ParseInfo<'_>> {
        let scopes = self
            .modules
            .iter()
            .map(ModuleScope::collect)
            .collect::<ApiDocResult<Vec<_>>>()?;

        let type_checker: Rc<dyn TypeChecker<'_> + '_> =
            Rc::new(SyntacticChecker::from_scopes(scopes.iter()));
        let binder = Binder::new(&scopes);

        let module_records = scopes
            .iter()
            .enumerate()
            .map(|(index, scope)| {
                let id = module_id(&self.base_path, scope.file.path());
                let exports = binder.module_exports(index, &mut vec![index]);
                debug!(module = %id, exports = exports.len(), "bound module");
                ModuleRecord {
                    id,
                    base_path: self.base_path.clone(),
                    file: scope.file,
                    exports,
                    checker: type_checker.clone(),
                }
            })
            .collect();

        Ok(ParseInfo {
            module_records,
            type_checker,
        })
    }
}

/// Result of binding a program
pub struct ParseInfo<'a> {
    /// One record per source, in the order sources were added
    pub module_records: Vec<ModuleRecord<'a>>,
    /// Checker shared by every record
    pub type_checker: Rc<dyn TypeChecker<'a> + 'a>,
}

/// One bound source module
pub struct ModuleRecord<'a> {
    /// Module id: path relative to the base path, without extension
    pub id: String,
    pub base_path: PathBuf,
    pub file: &'a ParsedModule,
    /// Export symbols in export order
    pub exports: Vec<ExportSymbol<'a>>,
    pub checker: Rc<dyn TypeChecker<'a> + 'a>,
}

impl<'a> ModuleRecord<'a> {
    /// Find an export by its exported name
    pub fn export(&self, name: &str) -> Option<&ExportSymbol<'a>> {
        self.exports.iter().find(|e| e.export_name() == name)
    }
}

/// Traces export entries back to declarations across modules
struct Binder<'s, 'a> {
    scopes: &'s [ModuleScope<'a>],
    by_path: HashMap<PathBuf, usize>,
    /// Export tables that did not depend on the resolution path
    resolved: RefCell<HashMap<usize, Vec<ExportSymbol<'a>>>>,
    /// Number of cyclic references cut so far
    cycles: Cell<usize>,
}

impl<'s, 'a> Binder<'s, 'a> {
    fn new(scopes: &'s [ModuleScope<'a>]) -> Self {
        let by_path = scopes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.file.path().to_path_buf(), i))
            .collect();
        Self {
            scopes,
            by_path,
            resolved: RefCell::new(HashMap::new()),
            cycles: Cell::new(0),
        }
    }

    /// Resolve `specifier` imported from module `from` to a module index
    fn resolve_module(&self, from: usize, specifier: &str) -> Result<usize, String> {
        let from_path = self.scopes[from].file.path();
        resolve_specifier(from_path, specifier, |p| self.by_path.contains_key(p))
            .and_then(|path| self.by_path.get(&path).copied())
            .ok_or_else(|| format!("module '{}' is not part of the program", specifier))
    }

    /// Export symbols of module `index`; `visiting` holds the modules on the
    /// current resolution path
    ///
    /// A table is resolved once. Tables that ran into a cycle are
    /// recomputed, since the cut depends on where resolution started.
    fn module_exports(&self, index: usize, visiting: &mut Vec<usize>) -> Vec<ExportSymbol<'a>> {
        if let Some(exports) = self.resolved.borrow().get(&index) {
            return exports.clone();
        }
        let cycles = self.cycles.get();
        let exports = self.collect_exports(index, visiting);
        if self.cycles.get() == cycles {
            self.resolved.borrow_mut().insert(index, exports.clone());
        }
        exports
    }

    fn collect_exports(&self, index: usize, visiting: &mut Vec<usize>) -> Vec<ExportSymbol<'a>> {
        let scope = &self.scopes[index];
        let explicit = scope.explicit_export_names();
        let mut exports: Vec<ExportSymbol<'a>> = Vec::new();

        for entry in &scope.exports {
            match entry {
                ExportEntry::Local { exported, local } => {
                    let symbol = match self.resolve_local(index, local, visiting) {
                        Ok(target) => exported_as(target, exported),
                        Err(reason) => unresolved(exported, reason),
                    };
                    exports.push(symbol);
                }
                ExportEntry::ReExport {
                    exported,
                    specifier,
                    imported,
                } => {
                    let symbol = match self.resolve_import(index, specifier, imported, visiting) {
                        Ok(target) => exported_as(target, exported),
                        Err(reason) => unresolved(exported, reason),
                    };
                    exports.push(symbol);
                }
                ExportEntry::Star { specifier } => {
                    let target = match self.resolve_module(index, specifier) {
                        Ok(target) => target,
                        Err(reason) => {
                            debug!(%specifier, %reason, "skipping star export");
                            continue;
                        }
                    };
                    if visiting.contains(&target) {
                        trace!(%specifier, "star export cycle");
                        self.cycles.set(self.cycles.get() + 1);
                        continue;
                    }
                    visiting.push(target);
                    let reexported = self.module_exports(target, visiting);
                    visiting.pop();

                    for symbol in reexported {
                        let name = symbol.export_name();
                        if name == "default"
                            || explicit.contains(&name)
                            || exports.iter().any(|e| e.export_name() == name)
                        {
                            continue;
                        }
                        exports.push(symbol);
                    }
                }
            }
        }
        exports
    }

    /// The symbol a local name of module `index` refers to
    fn resolve_local(
        &self,
        index: usize,
        local: &str,
        visiting: &mut Vec<usize>,
    ) -> Result<ExportSymbol<'a>, String> {
        let scope = &self.scopes[index];
        if let Some(decls) = scope.locals.get(local) {
            return Ok(ExportSymbol {
                name: local.to_string(),
                declarations: decls.clone(),
                alias: None,
                is_default: false,
                unresolved: None,
            });
        }
        match scope.imports.get(local) {
            Some(binding) => {
                self.resolve_import(index, &binding.specifier, &binding.imported, visiting)
            }
            None => Err(format!("'{}' is not declared in the module", local)),
        }
    }

    /// The symbol exported as `imported` by the module `specifier` names
    fn resolve_import(
        &self,
        index: usize,
        specifier: &str,
        imported: &ImportedName,
        visiting: &mut Vec<usize>,
    ) -> Result<ExportSymbol<'a>, String> {
        let ImportedName::Named(name) = imported else {
            return Err(format!("namespace of '{}' has no declarations", specifier));
        };
        let target = self.resolve_module(index, specifier)?;
        if visiting.contains(&target) {
            self.cycles.set(self.cycles.get() + 1);
            return Err(format!("circular re-export of '{}' through '{}'", name, specifier));
        }

        visiting.push(target);
        let exports = self.module_exports(target, visiting);
        visiting.pop();

        let symbol = exports
            .into_iter()
            .find(|e| e.export_name() == name)
            .ok_or_else(|| format!("'{}' does not export '{}'", specifier, name))?;
        match &symbol.unresolved {
            Some(reason) => Err(reason.clone()),
            None => {
                trace!(%name, %specifier, symbol = %symbol.name, "resolved import");
                Ok(symbol)
            }
        }
    }
}

/// Re-expose a resolved symbol under an export name
fn exported_as<'a>(target: ExportSymbol<'a>, exported: &str) -> ExportSymbol<'a> {
    let is_default = exported == "default";
    let alias = if is_default || exported == target.name {
        None
    } else {
        Some(AliasSymbol {
            name: exported.to_string(),
        })
    };
    ExportSymbol {
        name: target.name,
        declarations: target.declarations,
        alias,
        is_default,
        unresolved: None,
    }
}

fn unresolved<'a>(exported: &str, reason: String) -> ExportSymbol<'a> {
    debug!(export = %exported, %reason, "unresolved export");
    ExportSymbol {
        name: exported.to_string(),
        declarations: Vec::new(),
        alias: None,
        is_default: exported == "default",
        unresolved: Some(reason),
    }
}
