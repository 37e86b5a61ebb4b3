//! Package references and the qualified nodes built from them.
//!
//! A [`PackageRef`] is a shared handle: every node created from it keeps a
//! clone of the handle instead of a copy of the alias. When a merge renames
//! the package, all of those nodes render the new alias.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::call::Call;
use crate::node::Node;
use crate::types::{ChanDir, TypeExpr};
use crate::writer::{CodeBuilder, Render};

#[derive(Debug)]
struct Package {
    import_path: String,
    alias: String,
    owner: Weak<()>,
    forward: Option<PackageRef>,
}

/// Handle to an imported package inside one generator.
///
/// Cloning the handle shares the same package: alias changes made through
/// any clone are seen by all of them.
///
/// # Example
///
/// ```
/// use gogen::Generator;
///
/// let mut generator = Generator::new();
/// let types = generator.import("github.com/example/types");
///
/// let user = types.ty("User");
/// assert_eq!(user.to_string(), "types.User");
///
/// types.set_alias("models");
/// assert_eq!(user.to_string(), "models.User");
/// ```
#[derive(Clone)]
pub struct PackageRef {
    inner: Rc<RefCell<Package>>,
}

impl PackageRef {
    pub(crate) fn new(
        import_path: impl Into<String>,
        alias: impl Into<String>,
        owner: &Rc<()>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Package {
                import_path: import_path.into(),
                alias: alias.into(),
                owner: Rc::downgrade(owner),
                forward: None,
            })),
        }
    }

    /// The reference that actually carries the alias: `self`, or the
    /// reference it was folded into by a merge.
    fn target(&self) -> PackageRef {
        let mut current = self.clone();
        loop {
            let next = current.inner.borrow().forward.clone();
            match next {
                Some(next) => current = next,
                None => return current,
            }
        }
    }

    /// The full import path, e.g. `github.com/example/types`.
    pub fn import_path(&self) -> String {
        self.inner.borrow().import_path.clone()
    }

    /// The alias currently used to qualify identifiers from this package.
    pub fn alias(&self) -> String {
        self.target().inner.borrow().alias.clone()
    }

    /// Replace the alias in place.
    ///
    /// Every node already built from this package picks up the new alias.
    /// Uniqueness within the generator is not checked.
    pub fn set_alias(&self, alias: impl Into<String>) {
        self.target().inner.borrow_mut().alias = alias.into();
    }

    /// Whether both handles point at the same package object.
    pub fn ptr_eq(&self, other: &PackageRef) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn is_owned_by(&self, owner: &Rc<()>) -> bool {
        Weak::ptr_eq(&self.inner.borrow().owner, &Rc::downgrade(owner))
    }

    pub(crate) fn set_owner(&self, owner: &Rc<()>) {
        self.inner.borrow_mut().owner = Rc::downgrade(owner);
    }

    /// Make this reference a stand-in for `survivor`.
    ///
    /// Handles that still point here read and write the survivor's alias
    /// from now on.
    pub(crate) fn forward_to(&self, survivor: &PackageRef) {
        if survivor.target().ptr_eq(self) {
            return;
        }
        self.inner.borrow_mut().forward = Some(survivor.clone());
    }

    pub(crate) fn is_forwarded(&self) -> bool {
        self.inner.borrow().forward.is_some()
    }

    fn qualified(&self, name: impl Into<String>) -> Qualified {
        Qualified {
            package: self.clone(),
            name: name.into(),
        }
    }

    /// Qualified type name: `types.User`.
    pub fn ty(&self, name: impl Into<String>) -> Node {
        self.qualified(name).into()
    }

    /// Qualified identifier for constants and variables: `types.DefaultTimeout`.
    ///
    /// An empty name renders the bare alias.
    pub fn dot(&self, name: impl Into<String>) -> Node {
        self.qualified(name).into()
    }

    /// Qualified function reference without calling it: `types.ParseConfig`.
    pub fn func(&self, name: impl Into<String>) -> Node {
        self.qualified(name).into()
    }

    /// Qualified call: `types.NewUser(...)`.
    ///
    /// Add arguments with [`Call::arg`] or [`Call::args`].
    pub fn call(&self, name: impl Into<String>) -> Call {
        Call::new(self.qualified(name))
    }

    /// Slice type: `[]types.User`.
    pub fn slice(&self, name: impl Into<String>) -> Node {
        TypeExpr::slice(self.qualified(name)).into()
    }

    /// Pointer type: `*types.User`.
    pub fn ptr(&self, name: impl Into<String>) -> Node {
        TypeExpr::ptr(self.qualified(name)).into()
    }

    /// Map type. Bare names are qualified by this package; nodes, including
    /// types from other packages, are used as-is.
    ///
    /// ```
    /// use gogen::{Generator, ident};
    ///
    /// let mut generator = Generator::new();
    /// let types = generator.import("github.com/example/types");
    /// let other = generator.import("github.com/other/keys");
    ///
    /// assert_eq!(types.map("Key", "Value").to_string(), "map[types.Key]types.Value");
    /// assert_eq!(types.map(other.ty("Key"), "Value").to_string(), "map[keys.Key]types.Value");
    /// assert_eq!(types.map(ident("string"), "User").to_string(), "map[string]types.User");
    /// ```
    pub fn map(&self, key: impl Into<TypeArg>, value: impl Into<TypeArg>) -> Node {
        TypeExpr::map(key.into().resolve(self), value.into().resolve(self)).into()
    }

    /// Bidirectional channel: `chan types.Event`.
    pub fn chan(&self, name: impl Into<String>) -> Node {
        TypeExpr::chan(self.qualified(name), ChanDir::Both).into()
    }

    /// Receive-only channel: `<-chan types.Event`.
    pub fn chan_recv(&self, name: impl Into<String>) -> Node {
        TypeExpr::chan(self.qualified(name), ChanDir::Recv).into()
    }

    /// Send-only channel: `chan<- types.Event`.
    pub fn chan_send(&self, name: impl Into<String>) -> Node {
        TypeExpr::chan(self.qualified(name), ChanDir::Send).into()
    }

    /// Generic instantiation: `types.List[types.User]`.
    ///
    /// Type arguments resolve like [`PackageRef::map`] keys and values.
    pub fn generic<A>(&self, name: impl Into<String>, args: impl IntoIterator<Item = A>) -> Node
    where
        A: Into<TypeArg>,
    {
        let args = args.into_iter().map(|a| a.into().resolve(self)).collect();
        TypeExpr::generic(self.qualified(name), args).into()
    }
}

impl fmt::Debug for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageRef")
            .field("import_path", &self.import_path())
            .field("alias", &self.alias())
            .field("forwarded", &self.is_forwarded())
            .finish()
    }
}

/// A type position argument for [`PackageRef::map`] and
/// [`PackageRef::generic`].
#[derive(Debug, Clone)]
pub enum TypeArg {
    /// A bare name, qualified by the receiving package.
    Name(String),
    /// A ready node, used unchanged.
    Node(Node),
}

impl TypeArg {
    fn resolve(self, package: &PackageRef) -> Node {
        match self {
            Self::Name(name) => package.qualified(name).into(),
            Self::Node(node) => node,
        }
    }
}

impl From<&str> for TypeArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TypeArg {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Node> for TypeArg {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<TypeExpr> for TypeArg {
    fn from(t: TypeExpr) -> Self {
        Self::Node(t.into())
    }
}

/// An identifier qualified by a package alias, read at render time.
#[derive(Debug, Clone)]
pub struct Qualified {
    package: PackageRef,
    name: String,
}

impl Qualified {
    /// The package this identifier belongs to.
    pub fn package(&self) -> &PackageRef {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        f(&mut self.package);
    }
}

impl Render for Qualified {
    fn render(&self, out: &mut CodeBuilder) {
        let alias = self.package.alias();
        if !alias.is_empty() {
            out.push_raw(&alias);
            if !self.name.is_empty() {
                out.push_raw(".");
            }
        }
        out.push_raw(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ident, lit};

    fn package(path: &str, alias: &str) -> (PackageRef, Rc<()>) {
        let owner = Rc::new(());
        (PackageRef::new(path, alias, &owner), owner)
    }

    #[test]
    fn test_qualified_nodes() {
        let (types, _owner) = package("github.com/example/types", "types");

        assert_eq!(types.ty("User").to_string(), "types.User");
        assert_eq!(types.dot("DefaultTimeout").to_string(), "types.DefaultTimeout");
        assert_eq!(types.func("Parse").to_string(), "types.Parse");
        assert_eq!(types.dot("").to_string(), "types");
        assert_eq!(types.slice("User").to_string(), "[]types.User");
        assert_eq!(types.ptr("Config").to_string(), "*types.Config");
    }

    #[test]
    fn test_empty_alias_renders_bare_name() {
        let (dot_import, _owner) = package("github.com/example/types", "");
        assert_eq!(dot_import.ty("User").to_string(), "User");
    }

    #[test]
    fn test_channels() {
        let (events, _owner) = package("github.com/example/events", "events");

        assert_eq!(events.chan("Event").to_string(), "chan events.Event");
        assert_eq!(events.chan_recv("Event").to_string(), "<-chan events.Event");
        assert_eq!(events.chan_send("Event").to_string(), "chan<- events.Event");
    }

    #[test]
    fn test_generic_args_resolve_like_map() {
        let (types, _owner) = package("github.com/example/types", "types");

        assert_eq!(
            types.generic("List", ["string"]).to_string(),
            "types.List[types.string]"
        );
        assert_eq!(
            types.generic("Map", ["string", "User"]).to_string(),
            "types.Map[types.string, types.User]"
        );
        assert_eq!(
            types
                .generic("Result", [types.ty("Data"), ident("error")])
                .to_string(),
            "types.Result[types.Data, error]"
        );
    }

    #[test]
    fn test_cross_package_map() {
        let owner = Rc::new(());
        let types = PackageRef::new("github.com/example/types", "types", &owner);
        let other = PackageRef::new("github.com/other/types", "types2", &owner);

        assert_eq!(
            types.map("Key", "Value").to_string(),
            "map[types.Key]types.Value"
        );
        assert_eq!(
            types.map(other.ty("Key"), "Value").to_string(),
            "map[types2.Key]types.Value"
        );
    }

    #[test]
    fn test_call_reads_alias_lazily() {
        let (types, _owner) = package("github.com/example/types", "types");
        let call: Node = types.call("NewUser").arg(lit("name")).into();

        assert_eq!(call.to_string(), "types.NewUser(\"name\")");

        types.set_alias("types2");
        assert_eq!(call.to_string(), "types2.NewUser(\"name\")");
    }

    #[test]
    fn test_nodes_observe_alias_changes() {
        let (types, _owner) = package("github.com/example/types", "types");
        let nodes = [
            types.ty("User"),
            types.slice("User"),
            types.map("K", "V"),
            types.chan_recv("Event"),
            types.generic("List", ["T"]),
        ];

        types.set_alias("models");

        let rendered: Vec<String> = nodes.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "models.User",
                "[]models.User",
                "map[models.K]models.V",
                "<-chan models.Event",
                "models.List[models.T]",
            ]
        );
    }

    #[test]
    fn test_identity_and_ownership() {
        let owner = Rc::new(());
        let other_owner = Rc::new(());
        let types = PackageRef::new("github.com/example/types", "types", &owner);
        let clone = types.clone();
        let distinct = PackageRef::new("github.com/example/types", "types", &owner);

        assert!(types.ptr_eq(&clone));
        assert!(!types.ptr_eq(&distinct));
        assert!(types.is_owned_by(&owner));

        clone.set_owner(&other_owner);
        assert!(types.is_owned_by(&other_owner));
        assert!(!types.is_owned_by(&owner));
    }

    #[test]
    fn test_forwarded_reference_follows_survivor() {
        let owner = Rc::new(());
        let survivor = PackageRef::new("github.com/example/types", "types", &owner);
        let dropped = PackageRef::new("github.com/example/types", "types2", &owner);
        let user = dropped.ty("User");

        dropped.forward_to(&survivor);
        assert!(dropped.is_forwarded());
        assert!(!dropped.ptr_eq(&survivor));
        assert_eq!(user.to_string(), "types.User");

        survivor.set_alias("models");
        assert_eq!(dropped.alias(), "models");
        assert_eq!(user.to_string(), "models.User");

        dropped.set_alias("schema");
        assert_eq!(survivor.alias(), "schema");
    }

    #[test]
    fn test_forwarding_chains_and_ignores_cycles() {
        let owner = Rc::new(());
        let a = PackageRef::new("github.com/example/types", "a", &owner);
        let b = PackageRef::new("github.com/example/types", "b", &owner);
        let c = PackageRef::new("github.com/example/types", "c", &owner);

        a.forward_to(&b);
        b.forward_to(&c);
        assert_eq!(a.alias(), "c");

        c.forward_to(&a);
        assert!(!c.is_forwarded());
        assert_eq!(a.alias(), "c");
    }
}
