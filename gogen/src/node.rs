//! The closed set of syntax nodes and the conversions into them.

use crate::call::Call;
use crate::control::{For, If, Switch};
use crate::decl::{Interface, Struct, TypeDecl, Var};
use crate::function::Function;
use crate::group::Group;
use crate::package::{PackageRef, Qualified};
use crate::types::TypeExpr;
use crate::value::{ArrayLit, SliceLit, Value};
use crate::writer::{CodeBuilder, Render};

/// A piece of Go syntax.
///
/// Every builder in this crate converts into a `Node`, and every place that
/// accepts child syntax takes `impl Into<Node>`. Plain strings become raw
/// text, numbers and booleans become literals.
#[derive(Debug, Clone)]
pub enum Node {
    /// Text written verbatim.
    Raw(String),
    /// A literal value.
    Lit(Lit),
    /// A `//` comment, one line per line of text.
    Comment(String),
    /// An empty line.
    Blank,
    /// A package-qualified identifier like `types.User`.
    Qualified(Qualified),
    /// A composite type expression.
    Type(Box<TypeExpr>),
    /// A call expression.
    Call(Box<Call>),
    /// A `key: value` pair inside a composite literal.
    KeyValue(Box<KeyValue>),
    /// A sequence of nodes.
    Group(Group),
    Function(Box<Function>),
    Struct(Box<Struct>),
    Interface(Box<Interface>),
    Var(Box<Var>),
    TypeDecl(Box<TypeDecl>),
    If(Box<If>),
    For(Box<For>),
    Switch(Box<Switch>),
    Value(Box<Value>),
    SliceLit(Box<SliceLit>),
    ArrayLit(Box<ArrayLit>),
}

impl Node {
    /// Call `f` on every package reference held anywhere below this node.
    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        match self {
            Self::Raw(_) | Self::Lit(_) | Self::Comment(_) | Self::Blank => {}
            Self::Qualified(q) => q.visit_packages(f),
            Self::Type(t) => t.visit_packages(f),
            Self::Call(c) => c.visit_packages(f),
            Self::KeyValue(kv) => kv.visit_packages(f),
            Self::Group(g) => g.visit_packages(f),
            Self::Function(func) => func.visit_packages(f),
            Self::Struct(s) => s.visit_packages(f),
            Self::Interface(i) => i.visit_packages(f),
            Self::Var(v) => v.visit_packages(f),
            Self::TypeDecl(t) => t.visit_packages(f),
            Self::If(i) => i.visit_packages(f),
            Self::For(l) => l.visit_packages(f),
            Self::Switch(s) => s.visit_packages(f),
            Self::Value(v) => v.visit_packages(f),
            Self::SliceLit(s) => s.visit_packages(f),
            Self::ArrayLit(a) => a.visit_packages(f),
        }
    }
}

impl Render for Node {
    fn render(&self, out: &mut CodeBuilder) {
        match self {
            Self::Raw(s) => {
                out.push_raw(s);
            }
            Self::Lit(lit) => lit.render(out),
            Self::Comment(text) => render_comment(out, text),
            Self::Blank => {}
            Self::Qualified(q) => q.render(out),
            Self::Type(t) => t.render(out),
            Self::Call(c) => c.render(out),
            Self::KeyValue(kv) => kv.render(out),
            Self::Group(g) => g.render(out),
            Self::Function(f) => f.render(out),
            Self::Struct(s) => s.render(out),
            Self::Interface(i) => i.render(out),
            Self::Var(v) => v.render(out),
            Self::TypeDecl(t) => t.render(out),
            Self::If(i) => i.render(out),
            Self::For(l) => l.render(out),
            Self::Switch(s) => s.render(out),
            Self::Value(v) => v.render(out),
            Self::SliceLit(s) => s.render(out),
            Self::ArrayLit(a) => a.render(out),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

pub(crate) fn render_comment(out: &mut CodeBuilder, text: &str) {
    let mut first = true;
    for line in text.lines() {
        if !first {
            out.push_newline();
        }
        if line.is_empty() {
            out.push_raw("//");
        } else {
            out.push_raw("// ").push_raw(line);
        }
        first = false;
    }
    if first {
        out.push_raw("//");
    }
}

/// Write `nodes` separated by `sep`.
pub(crate) fn render_joined(out: &mut CodeBuilder, nodes: &[Node], sep: &str) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_raw(sep);
        }
        node.render(out);
    }
}

/// A Go literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    /// String literal (quoted and escaped on render).
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Render for Lit {
    fn render(&self, out: &mut CodeBuilder) {
        match self {
            Self::Str(s) => out.push_raw(&quote(s)),
            Self::Int(v) => out.push_raw(&v.to_string()),
            Self::UInt(v) => out.push_raw(&v.to_string()),
            Self::Float(v) => out.push_raw(&float_literal(*v)),
            Self::Bool(v) => out.push_raw(if *v { "true" } else { "false" }),
        };
    }
}

impl From<&str> for Lit {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Lit {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i32> for Lit {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Lit {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Lit {
    fn from(v: u32) -> Self {
        Self::UInt(v.into())
    }
}

impl From<u64> for Lit {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<usize> for Lit {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<f64> for Lit {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Lit {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Whole numbers keep a trailing `.0` so the constant stays a float.
fn float_literal(v: f64) -> String {
    let s = v.to_string();
    if v.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Quote a string as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let code = c as u32;
                if code < 0x80 {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// A `key: value` element of a composite literal.
#[derive(Debug, Clone)]
pub struct KeyValue {
    key: Node,
    value: Node,
}

impl KeyValue {
    pub fn new(key: impl Into<Node>, value: impl Into<Node>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.key.visit_packages(f);
        self.value.visit_packages(f);
    }
}

impl Render for KeyValue {
    fn render(&self, out: &mut CodeBuilder) {
        self.key.render(out);
        out.push_raw(": ");
        self.value.render(out);
    }
}

/// Raw text, written as-is.
pub fn raw(s: impl Into<String>) -> Node {
    Node::Raw(s.into())
}

/// A bare identifier such as `string` or `err`.
///
/// Identical to [`raw`]; the separate name reads better in type positions.
pub fn ident(name: impl Into<String>) -> Node {
    Node::Raw(name.into())
}

/// A literal value: strings are quoted, numbers and booleans written as Go.
pub fn lit(value: impl Into<Lit>) -> Node {
    Node::Lit(value.into())
}

/// A `//` line comment.
pub fn comment(text: impl Into<String>) -> Node {
    Node::Comment(text.into())
}

/// An empty line.
pub fn blank() -> Node {
    Node::Blank
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&String> for Node {
    fn from(s: &String) -> Self {
        Self::Raw(s.clone())
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl From<Lit> for Node {
    fn from(lit: Lit) -> Self {
        Self::Lit(lit)
    }
}

macro_rules! lit_into_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Self::Lit(Lit::from(v))
                }
            }
        )*
    };
}

lit_into_node!(i32, i64, u32, u64, usize, f64, bool);

impl From<Qualified> for Node {
    fn from(q: Qualified) -> Self {
        Self::Qualified(q)
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

macro_rules! boxed_into_node {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Self::$ty(Box::new(v))
                }
            }
        )*
    };
}

boxed_into_node!(
    KeyValue, Function, Struct, Interface, Var, TypeDecl, If, For, Switch, Value, SliceLit,
    ArrayLit, Call
);

impl From<TypeExpr> for Node {
    fn from(t: TypeExpr) -> Self {
        Self::Type(Box::new(t))
    }
}
