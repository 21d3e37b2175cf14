//! Module ids and relative specifier resolution
//!
//! Sources of a program live in memory, so resolution is purely lexical:
//! paths are normalized without touching the file system and candidates are
//! checked against the set of loaded sources.

use std::path::{Component, Path, PathBuf};

/// Source extensions stripped when computing module ids, longest first
const SOURCE_EXTENSIONS: &[&str] = &[".d.ts", ".tsx", ".ts", ".mjs", ".js"];

/// Compute the module id of `file` relative to `base_path`
///
/// `/src/core/index.ts` under `/src` becomes `core/index`.
pub fn module_id(base_path: &Path, file: &Path) -> String {
    strip_source_extension(&project_relative_path(base_path, file)).to_string()
}

/// `file` relative to `base_path` with `/` separators, extension kept
pub fn project_relative_path(base_path: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(base_path).unwrap_or(file);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Remove a known source extension from a path string
pub fn strip_source_extension(path: &str) -> &str {
    SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| path.strip_suffix(ext))
        .unwrap_or(path)
}

/// The extension of a source file as reported in file info (`ts`, `d.ts`, ...)
pub fn source_extension(file: &Path) -> String {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    SOURCE_EXTENSIONS
        .iter()
        .find(|ext| name.ends_with(*ext))
        .map(|ext| ext.trim_start_matches('.').to_string())
        .unwrap_or_else(|| {
            file.extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

/// Whether a specifier points at another source of the same program
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Lexically normalize `.` and `..` components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolve a relative `specifier` imported from `from_file`
///
/// `exists` decides whether a candidate path is a loaded source. Candidates
/// follow TypeScript's module resolution for relative imports: the exact
/// path, the path with a TypeScript extension, a `.js` import mapped back to
/// its `.ts` source, then `index` files of a directory.
pub fn resolve_specifier(
    from_file: &Path,
    specifier: &str,
    exists: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    if !is_relative_specifier(specifier) {
        return None;
    }
    let dir = from_file.parent().unwrap_or_else(|| Path::new("/"));
    let target = normalize_path(&dir.join(specifier));
    let target_str = target.to_string_lossy().into_owned();

    let mut candidates = vec![target.clone()];
    for ext in ["ts", "tsx", "d.ts"] {
        candidates.push(PathBuf::from(format!("{}.{}", target_str, ext)));
    }
    for js in [".js", ".mjs"] {
        if let Some(stem) = target_str.strip_suffix(js) {
            candidates.push(PathBuf::from(format!("{}.ts", stem)));
            candidates.push(PathBuf::from(format!("{}.d.ts", stem)));
        }
    }
    for index in ["index.ts", "index.tsx", "index.d.ts"] {
        candidates.push(target.join(index));
    }

    candidates.into_iter().find(|c| exists(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_module_id() {
        let base = Path::new("/project/src");
        assert_eq!(module_id(base, Path::new("/project/src/index.ts")), "index");
        assert_eq!(
            module_id(base, Path::new("/project/src/core/types.d.ts")),
            "core/types"
        );
        assert_eq!(module_id(base, Path::new("/project/src/app.tsx")), "app");
    }

    #[test]
    fn test_source_extension() {
        assert_eq!(source_extension(Path::new("/a/b.ts")), "ts");
        assert_eq!(source_extension(Path::new("/a/b.d.ts")), "d.ts");
        assert_eq!(source_extension(Path::new("/a/b.tsx")), "tsx");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/project/src/./a/../b.ts")),
            PathBuf::from("/project/src/b.ts")
        );
    }

    #[test]
    fn test_resolve_specifier() {
        let loaded: HashSet<PathBuf> = [
            "/project/src/index.ts",
            "/project/src/shapes.ts",
            "/project/src/util/index.ts",
            "/project/src/legacy.d.ts",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        let exists = |p: &Path| loaded.contains(p);
        let from = Path::new("/project/src/index.ts");

        assert_eq!(
            resolve_specifier(from, "./shapes", exists),
            Some(PathBuf::from("/project/src/shapes.ts"))
        );
        assert_eq!(
            resolve_specifier(from, "./shapes.js", exists),
            Some(PathBuf::from("/project/src/shapes.ts"))
        );
        assert_eq!(
            resolve_specifier(from, "./util", exists),
            Some(PathBuf::from("/project/src/util/index.ts"))
        );
        assert_eq!(
            resolve_specifier(from, "./legacy", exists),
            Some(PathBuf::from("/project/src/legacy.d.ts"))
        );
        assert_eq!(
            resolve_specifier(Path::new("/project/src/util/index.ts"), "../shapes", exists),
            Some(PathBuf::from("/project/src/shapes.ts"))
        );
        assert_eq!(resolve_specifier(from, "lodash", exists), None);
        assert_eq!(resolve_specifier(from, "./missing", exists), None);
    }
}
