//! Composite type expressions: slices, pointers, maps, channels, generics.

use crate::node::{Node, render_joined};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChanDir {
    /// `chan T`
    #[default]
    Both,
    /// `<-chan T`
    Recv,
    /// `chan<- T`
    Send,
}

/// A composite type built from other type nodes.
///
/// Element nodes may be plain names or package-qualified types; see
/// [`PackageRef`] for the qualified shorthands.
///
/// ```
/// use gogen::{TypeExpr, ChanDir};
///
/// assert_eq!(TypeExpr::slice("byte").to_string(), "[]byte");
/// assert_eq!(TypeExpr::map("string", TypeExpr::ptr("User")).to_string(), "map[string]*User");
/// assert_eq!(TypeExpr::chan("int", ChanDir::Send).to_string(), "chan<- int");
/// ```
#[derive(Debug, Clone)]
pub enum TypeExpr {
    Slice(Node),
    Ptr(Node),
    Map { key: Node, value: Node },
    Chan { elem: Node, dir: ChanDir },
    Generic { base: Node, args: Vec<Node> },
}

impl TypeExpr {
    pub fn slice(elem: impl Into<Node>) -> Self {
        Self::Slice(elem.into())
    }

    pub fn ptr(elem: impl Into<Node>) -> Self {
        Self::Ptr(elem.into())
    }

    pub fn map(key: impl Into<Node>, value: impl Into<Node>) -> Self {
        Self::Map {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn chan(elem: impl Into<Node>, dir: ChanDir) -> Self {
        Self::Chan {
            elem: elem.into(),
            dir,
        }
    }

    pub fn generic(base: impl Into<Node>, args: Vec<Node>) -> Self {
        Self::Generic {
            base: base.into(),
            args,
        }
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        match self {
            Self::Slice(elem) | Self::Ptr(elem) | Self::Chan { elem, .. } => elem.visit_packages(f),
            Self::Map { key, value } => {
                key.visit_packages(f);
                value.visit_packages(f);
            }
            Self::Generic { base, args } => {
                base.visit_packages(f);
                for arg in args {
                    arg.visit_packages(f);
                }
            }
        }
    }
}

impl Render for TypeExpr {
    fn render(&self, out: &mut CodeBuilder) {
        match self {
            Self::Slice(elem) => {
                out.push_raw("[]");
                elem.render(out);
            }
            Self::Ptr(elem) => {
                out.push_raw("*");
                elem.render(out);
            }
            Self::Map { key, value } => {
                out.push_raw("map[");
                key.render(out);
                out.push_raw("]");
                value.render(out);
            }
            Self::Chan { elem, dir } => {
                out.push_raw(match dir {
                    ChanDir::Both => "chan ",
                    ChanDir::Recv => "<-chan ",
                    ChanDir::Send => "chan<- ",
                });
                elem.render(out);
            }
            Self::Generic { base, args } => {
                base.render(out);
                out.push_raw("[");
                render_joined(out, args, ", ");
                out.push_raw("]");
            }
        }
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}
