//! Folding one generator's imports into another's.

use gogen_core::resolve_alias;

use crate::imports::ImportRegistry;
use crate::package::PackageRef;

/// A source reference that was dropped in favour of the destination's
/// reference for the same import path.
#[derive(Debug, Clone)]
pub(crate) struct Rebind {
    pub(crate) from: PackageRef,
    pub(crate) to: PackageRef,
}

/// Replacements produced by [`ImportRegistry::absorb`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Rebinds(Vec<Rebind>);

impl Rebinds {
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Point `package` at its replacement, if it has one.
    pub(crate) fn apply(&self, package: &mut PackageRef) {
        if let Some(rebind) = self.0.iter().find(|r| r.from.ptr_eq(package)) {
            *package = rebind.to.clone();
        }
    }
}

impl ImportRegistry {
    /// Move every entry of `src` into this registry, in `src`'s insertion
    /// order.
    ///
    /// - A path this registry already has keeps its existing reference. The
    ///   source reference is forwarded to it, and reported in the returned
    ///   [`Rebinds`] so nodes holding it can be pointed at the surviving one.
    /// - A new path keeps its alias when that alias is free here. Otherwise
    ///   the alias is resolved again against this registry and changed in
    ///   place, so every node already built from the reference follows.
    ///   Either way the reference is moved over as-is.
    pub(crate) fn absorb(&mut self, mut src: ImportRegistry) -> Rebinds {
        let mut rebinds = Vec::new();

        for package in src.drain() {
            debug_assert!(
                !package.is_owned_by(self.token()),
                "absorbing a reference this registry already owns"
            );
            let import_path = package.import_path();

            if let Some(existing) = self.get(&import_path) {
                tracing::debug!(
                    import_path = %import_path,
                    alias = %existing.alias(),
                    "merge: sharing existing import"
                );
                package.forward_to(existing);
                rebinds.push(Rebind {
                    from: package,
                    to: existing.clone(),
                });
                continue;
            }

            let aliases = self.aliases();
            let alias = package.alias();
            if aliases.contains(&alias) {
                let renamed = resolve_alias(&import_path, &aliases);
                tracing::debug!(
                    import_path = %import_path,
                    from = %alias,
                    to = %renamed,
                    "merge: renamed colliding import"
                );
                package.set_alias(renamed);
            } else {
                tracing::debug!(import_path = %import_path, alias = %alias, "merge: kept import");
            }

            self.insert(package);
        }

        Rebinds(rebinds)
    }
}
