//! Package alias resolution for Go import paths.

use std::collections::HashSet;

use crate::ident::sanitize_identifier;

/// Check whether a path segment looks like a major-version marker like `v2`.
///
/// Any segment of at most three bytes starting with `v` counts, so short
/// names such as `vue` or `vm` are skipped in favour of their parent.
pub fn is_version_marker(segment: &str) -> bool {
    segment.starts_with('v') && segment.len() <= 3
}

/// The path segment a package name is derived from.
///
/// This is the last segment, or the one before it when the path ends in a
/// version marker (`github.com/jackc/pgx/v5` -> `pgx`).
pub fn base_segment(import_path: &str) -> &str {
    let trimmed = import_path.trim_end_matches('/');
    let mut segments = trimmed.rsplit('/');
    let last = segments.next().unwrap_or_default();

    if is_version_marker(last) {
        if let Some(parent) = segments.next().filter(|p| !p.is_empty()) {
            return parent;
        }
    }
    last
}

/// The unsuffixed alias a package gets when nothing else claims it.
pub fn default_alias(import_path: &str) -> String {
    sanitize_identifier(base_segment(import_path))
}

/// Pick a free alias for `import_path`.
///
/// Returns the default alias when it is not in `existing`, otherwise the
/// first of `base2`, `base3`, ... that is free.
///
/// ```
/// use std::collections::HashSet;
/// use gogen_core::resolve_alias;
///
/// let taken: HashSet<String> = ["types".to_string()].into();
/// assert_eq!(resolve_alias("github.com/other/types", &taken), "types2");
/// ```
pub fn resolve_alias(import_path: &str, existing: &HashSet<String>) -> String {
    let base = default_alias(import_path);
    if !existing.contains(&base) {
        tracing::trace!(import_path, alias = %base, "resolved default alias");
        return base;
    }

    let mut counter: u64 = 2;
    loop {
        let alias = format!("{base}{counter}");
        if !existing.contains(&alias) {
            tracing::trace!(import_path, alias = %alias, "resolved suffixed alias");
            return alias;
        }
        counter += 1;
    }
}

/// Whether an import path looks like a standard library package.
///
/// Third-party paths start with a domain (`github.com/...`), so the first
/// segment contains a dot. Standard library paths never do.
pub fn is_std_import(import_path: &str) -> bool {
    let first = import_path.split('/').next().unwrap_or_default();
    !first.contains('.')
}
