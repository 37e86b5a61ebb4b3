//! Per-generator import registry.

use std::collections::HashSet;
use std::rc::Rc;

use gogen_core::{default_alias, is_std_import, resolve_alias};
use indexmap::IndexMap;

use crate::node::quote;
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// Ordered map from import path to [`PackageRef`].
///
/// There is at most one reference per import path, and the registry hands
/// out the same reference every time a path is requested. The alias set is
/// computed from the entries on demand.
#[derive(Debug, Default)]
pub struct ImportRegistry {
    token: Rc<()>,
    packages: IndexMap<String, PackageRef>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the reference for `import_path`, registering it with a freshly
    /// resolved alias on first use.
    pub fn get_or_create(&mut self, import_path: &str) -> PackageRef {
        if let Some(existing) = self.packages.get(import_path) {
            return existing.clone();
        }
        let alias = resolve_alias(import_path, &self.aliases());
        tracing::debug!(import_path, alias = %alias, "registered import");
        let package = PackageRef::new(import_path, alias, &self.token);
        self.insert(package)
    }

    /// Return the reference for `import_path`, registering it under `alias`
    /// on first use.
    ///
    /// The alias is taken as given. A path that is already registered keeps
    /// its current alias.
    pub fn get_or_create_with_alias(&mut self, import_path: &str, alias: &str) -> PackageRef {
        if let Some(existing) = self.packages.get(import_path) {
            if existing.alias() != alias {
                tracing::debug!(
                    import_path,
                    requested = alias,
                    current = %existing.alias(),
                    "import already registered, keeping current alias"
                );
            }
            return existing.clone();
        }
        tracing::debug!(import_path, alias, "registered import with explicit alias");
        let package = PackageRef::new(import_path, alias, &self.token);
        self.insert(package)
    }

    pub fn get(&self, import_path: &str) -> Option<&PackageRef> {
        self.packages.get(import_path)
    }

    pub fn contains(&self, import_path: &str) -> bool {
        self.packages.contains_key(import_path)
    }

    /// The aliases currently in use.
    pub fn aliases(&self) -> HashSet<String> {
        self.packages.values().map(PackageRef::alias).collect()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageRef> {
        self.packages.values()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub(crate) fn token(&self) -> &Rc<()> {
        &self.token
    }

    /// Take ownership of `package` and add it under its import path.
    pub(crate) fn insert(&mut self, package: PackageRef) -> PackageRef {
        package.set_owner(&self.token);
        self.packages.insert(package.import_path(), package.clone());
        package
    }

    /// Remove every entry, leaving the references themselves untouched.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = PackageRef> + '_ {
        self.packages.drain(..).map(|(_, package)| package)
    }
}

/// One line of the import block: `alias "path"` or `"path"`.
///
/// The alias is written only when it differs from the name the package
/// would get by default.
pub fn import_line(package: &PackageRef) -> String {
    let path = package.import_path();
    let alias = package.alias();
    if alias == default_alias(&path) {
        quote(&path)
    } else {
        format!("{alias} {}", quote(&path))
    }
}

/// Renders the `import (...)` block: standard library packages first, then
/// a blank line, then everything else. Nothing is written for an empty
/// registry.
impl Render for ImportRegistry {
    fn render(&self, out: &mut CodeBuilder) {
        if self.packages.is_empty() {
            return;
        }

        let (std, external): (Vec<&PackageRef>, Vec<&PackageRef>) = self
            .packages
            .values()
            .partition(|package| is_std_import(&package.import_path()));

        out.push_raw("import (").push_newline().push_indent();
        for package in &std {
            out.push_line(&import_line(package));
        }
        if !std.is_empty() && !external.is_empty() {
            out.push_newline();
        }
        for package in &external {
            out.push_line(&import_line(package));
        }
        out.push_dedent().push_raw(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_same_reference() {
        let mut registry = ImportRegistry::new();
        let first = registry.get_or_create("github.com/example/types");
        let second = registry.get_or_create("github.com/example/types");

        assert!(first.ptr_eq(&second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_aliases_unique() {
        let mut registry = ImportRegistry::new();
        let a = registry.get_or_create("github.com/a/types");
        let b = registry.get_or_create("github.com/b/types");
        let c = registry.get_or_create("github.com/c/types");

        assert_eq!(a.alias(), "types");
        assert_eq!(b.alias(), "types2");
        assert_eq!(c.alias(), "types3");
        assert_eq!(registry.aliases().len(), 3);
    }

    #[test]
    fn test_explicit_alias_kept_verbatim() {
        let mut registry = ImportRegistry::new();
        let models = registry.get_or_create_with_alias("github.com/example/types", "models");
        assert_eq!(models.alias(), "models");

        // not re-resolved: collisions are the caller's problem
        let clash = registry.get_or_create_with_alias("github.com/other/types", "models");
        assert_eq!(clash.alias(), "models");

        let again = registry.get_or_create_with_alias("github.com/example/types", "other");
        assert!(again.ptr_eq(&models));
        assert_eq!(again.alias(), "models");
    }

    #[test]
    fn test_explicit_alias_claims_name() {
        let mut registry = ImportRegistry::new();
        registry.get_or_create_with_alias("github.com/example/models", "types");
        let types = registry.get_or_create("github.com/example/types");
        assert_eq!(types.alias(), "types2");
    }

    #[test]
    fn test_entries_owned_by_registry() {
        let mut registry = ImportRegistry::new();
        let types = registry.get_or_create("github.com/example/types");
        assert!(types.is_owned_by(registry.token()));
    }

    #[test]
    fn test_import_line() {
        let mut registry = ImportRegistry::new();
        let fmt = registry.get_or_create("fmt");
        let pgx = registry.get_or_create("github.com/jackc/pgx/v5");
        let types = registry.get_or_create("github.com/a/types");
        let types2 = registry.get_or_create("github.com/b/types");

        assert_eq!(import_line(&fmt), "\"fmt\"");
        assert_eq!(import_line(&pgx), "\"github.com/jackc/pgx/v5\"");
        assert_eq!(import_line(&types), "\"github.com/a/types\"");
        assert_eq!(import_line(&types2), "types2 \"github.com/b/types\"");
    }

    #[test]
    fn test_render_groups_std_first() {
        let mut registry = ImportRegistry::new();
        registry.get_or_create("github.com/example/types");
        registry.get_or_create("fmt");
        registry.get_or_create("github.com/other/types");
        registry.get_or_create("net/http");

        assert_eq!(
            registry.render_to_string(),
            "import (\n\
             \t\"fmt\"\n\
             \t\"net/http\"\n\
             \n\
             \t\"github.com/example/types\"\n\
             \ttypes2 \"github.com/other/types\"\n\
             )"
        );
    }

    #[test]
    fn test_render_single_group() {
        let mut registry = ImportRegistry::new();
        registry.get_or_create("context");
        assert_eq!(registry.render_to_string(), "import (\n\t\"context\"\n)");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ImportRegistry::new().render_to_string(), "");
    }
}
