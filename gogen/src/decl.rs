//! Declarations: structs, interfaces, var/const blocks and type declarations.

use crate::function::Function;
use crate::node::{Node, comment, render_comment};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

fn render_doc(out: &mut CodeBuilder, doc: &Option<String>) {
    if let Some(doc) = doc {
        render_comment(out, doc);
        out.push_newline();
    }
}

/// A struct field.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: Node,
    tag: Option<String>,
    comment: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
            comment: None,
        }
    }

    /// An embedded field: only the type is written.
    pub fn embedded(ty: impl Into<Node>) -> Self {
        Self::new("", ty)
    }

    /// Struct tag contents without backticks: `json:"id"`.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Trailing `//` comment on the field line.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.ty.visit_packages(f);
    }
}

impl Render for Field {
    fn render(&self, out: &mut CodeBuilder) {
        if !self.name.is_empty() {
            out.push_raw(&self.name).push_raw(" ");
        }
        self.ty.render(out);
        if let Some(tag) = &self.tag {
            out.push_raw(" `").push_raw(tag).push_raw("`");
        }
        if let Some(comment) = &self.comment {
            out.push_raw(" // ").push_raw(comment);
        }
    }
}

#[derive(Debug, Clone)]
enum Member {
    Field(Field),
    Method(Function),
    Node(Node),
}

impl Member {
    fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        match self {
            Self::Field(field) => field.visit_packages(f),
            Self::Method(method) => method.visit_packages(f),
            Self::Node(node) => node.visit_packages(f),
        }
    }
}

impl Render for Member {
    fn render(&self, out: &mut CodeBuilder) {
        match self {
            Self::Field(field) => field.render(out),
            Self::Method(method) => method.render(out),
            Self::Node(node) => node.render(out),
        }
    }
}

fn render_members(out: &mut CodeBuilder, keyword: &str, members: &[Member]) {
    if members.is_empty() {
        out.push_raw(keyword).push_raw("{}");
        return;
    }
    out.push_raw(keyword).push_raw(" {").push_newline().push_indent();
    for member in members {
        member.render(out);
        out.push_newline();
    }
    out.push_dedent().push_raw("}");
}

/// Builder for `type Name struct { ... }`.
///
/// ```
/// use gogen::{Field, Struct};
///
/// let s = Struct::new("User")
///     .field(Field::new("ID", "int64").tag(r#"json:"id""#))
///     .field(Field::new("Name", "string"));
///
/// assert_eq!(
///     s.to_string(),
///     "type User struct {\n\tID int64 `json:\"id\"`\n\tName string\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    members: Vec<Member>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.members.push(Member::Field(field));
        self
    }

    /// Shorthand for a plain `name type` field.
    pub fn add_field(self, name: impl Into<String>, ty: impl Into<Node>) -> Self {
        self.field(Field::new(name, ty))
    }

    pub fn embed(self, ty: impl Into<Node>) -> Self {
        self.field(Field::embedded(ty))
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.members.push(Member::Node(comment(text)));
        self
    }

    pub fn blank(mut self) -> Self {
        self.members.push(Member::Node(Node::Blank));
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        for member in &mut self.members {
            member.visit_packages(f);
        }
    }
}

impl Render for Struct {
    fn render(&self, out: &mut CodeBuilder) {
        render_doc(out, &self.doc);
        out.push_raw("type ").push_raw(&self.name).push_raw(" ");
        render_members(out, "struct", &self.members);
    }
}

/// Builder for `type Name interface { ... }`.
///
/// Methods are given as [`Function`]s; only their signatures are rendered.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    members: Vec<Member>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn method(mut self, method: Function) -> Self {
        self.members.push(Member::Method(method.into_signature()));
        self
    }

    /// Embed another interface or a type constraint.
    pub fn embed(mut self, ty: impl Into<Node>) -> Self {
        self.members.push(Member::Node(ty.into()));
        self
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.members.push(Member::Node(comment(text)));
        self
    }

    pub fn blank(mut self) -> Self {
        self.members.push(Member::Node(Node::Blank));
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        for member in &mut self.members {
            member.visit_packages(f);
        }
    }
}

impl Render for Interface {
    fn render(&self, out: &mut CodeBuilder) {
        render_doc(out, &self.doc);
        out.push_raw("type ").push_raw(&self.name).push_raw(" ");
        render_members(out, "interface", &self.members);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VarKind {
    Var,
    Const,
}

#[derive(Debug, Clone)]
struct Binding {
    name: String,
    ty: Option<Node>,
    value: Option<Node>,
}

impl Render for Binding {
    fn render(&self, out: &mut CodeBuilder) {
        out.push_raw(&self.name);
        if let Some(ty) = &self.ty {
            out.push_raw(" ");
            ty.render(out);
        }
        if let Some(value) = &self.value {
            out.push_raw(" = ");
            value.render(out);
        }
    }
}

/// A `var` or `const` declaration.
///
/// A single name renders on one line, several render as a parenthesized
/// block.
///
/// ```
/// use gogen::{Var, lit};
///
/// assert_eq!(Var::new().value("name", lit("gogen")).to_string(), "var name = \"gogen\"");
///
/// let block = Var::constant().value("A", "iota").name("B");
/// assert_eq!(block.to_string(), "const (\n\tA = iota\n\tB\n)");
/// ```
#[derive(Debug, Clone)]
pub struct Var {
    kind: VarKind,
    doc: Option<String>,
    bindings: Vec<Binding>,
}

impl Var {
    /// Start a `var` declaration.
    pub fn new() -> Self {
        Self {
            kind: VarKind::Var,
            doc: None,
            bindings: Vec::new(),
        }
    }

    /// Start a `const` declaration.
    pub fn constant() -> Self {
        Self {
            kind: VarKind::Const,
            ..Self::new()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// `name = value`
    pub fn value(self, name: impl Into<String>, value: impl Into<Node>) -> Self {
        self.bind(name, None, Some(value.into()))
    }

    /// `name Type`
    pub fn typed(self, name: impl Into<String>, ty: impl Into<Node>) -> Self {
        self.bind(name, Some(ty.into()), None)
    }

    /// `name Type = value`
    pub fn typed_value(
        self,
        name: impl Into<String>,
        ty: impl Into<Node>,
        value: impl Into<Node>,
    ) -> Self {
        self.bind(name, Some(ty.into()), Some(value.into()))
    }

    /// A bare name, e.g. the implicit repetition in an `iota` block.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.bind(name, None, None)
    }

    fn bind(mut self, name: impl Into<String>, ty: Option<Node>, value: Option<Node>) -> Self {
        self.bindings.push(Binding {
            name: name.into(),
            ty,
            value,
        });
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        for binding in &mut self.bindings {
            if let Some(ty) = &mut binding.ty {
                ty.visit_packages(f);
            }
            if let Some(value) = &mut binding.value {
                value.visit_packages(f);
            }
        }
    }
}

impl Default for Var {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Var {
    fn render(&self, out: &mut CodeBuilder) {
        render_doc(out, &self.doc);
        let keyword = match self.kind {
            VarKind::Var => "var",
            VarKind::Const => "const",
        };
        out.push_raw(keyword);

        match self.bindings.as_slice() {
            [] => {
                out.push_raw(" ()");
            }
            [binding] => {
                out.push_raw(" ");
                binding.render(out);
            }
            bindings => {
                out.push_raw(" (").push_newline().push_indent();
                for binding in bindings {
                    binding.render(out);
                    out.push_newline();
                }
                out.push_dedent().push_raw(")");
            }
        }
    }
}

/// `type Name Underlying` or, as an alias, `type Name = Other`.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    name: String,
    doc: Option<String>,
    ty: Node,
    alias: bool,
    type_params: Vec<(String, Node)>,
}

impl TypeDecl {
    /// A type definition: `type UserID int64`.
    pub fn new(name: impl Into<String>, ty: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            alias: false,
            type_params: Vec::new(),
        }
    }

    /// A type alias: `type Reader = io.Reader`.
    pub fn alias(name: impl Into<String>, ty: impl Into<Node>) -> Self {
        Self {
            alias: true,
            ..Self::new(name, ty)
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a type parameter: `type List[T any] []T`.
    pub fn type_param(mut self, name: impl Into<String>, constraint: impl Into<Node>) -> Self {
        self.type_params.push((name.into(), constraint.into()));
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        for (_, constraint) in &mut self.type_params {
            constraint.visit_packages(f);
        }
        self.ty.visit_packages(f);
    }
}

impl Render for TypeDecl {
    fn render(&self, out: &mut CodeBuilder) {
        render_doc(out, &self.doc);
        out.push_raw("type ").push_raw(&self.name);
        if !self.type_params.is_empty() {
            out.push_raw("[");
            for (i, (name, constraint)) in self.type_params.iter().enumerate() {
                if i > 0 {
                    out.push_raw(", ");
                }
                out.push_raw(name).push_raw(" ");
                constraint.render(out);
            }
            out.push_raw("]");
        }
        out.push_raw(if self.alias { " = " } else { " " });
        self.ty.render(out);
    }
}

macro_rules! display_via_render {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.render_to_string())
                }
            }
        )*
    };
}

display_via_render!(Field, Struct, Interface, Var, TypeDecl);
