//! Composite literals.

use crate::node::{KeyValue, Node, render_joined};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

#[derive(Debug, Clone, Default)]
struct Elements {
    items: Vec<Node>,
    multi_line: bool,
}

impl Elements {
    fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        for item in &mut self.items {
            item.visit_packages(f);
        }
    }
}

impl Render for Elements {
    fn render(&self, out: &mut CodeBuilder) {
        if self.items.is_empty() {
            out.push_raw("{}");
            return;
        }
        if !self.multi_line {
            out.push_raw("{");
            render_joined(out, &self.items, ", ");
            out.push_raw("}");
            return;
        }
        out.push_raw("{").push_newline().push_indent();
        for item in &self.items {
            item.render(out);
            out.push_raw(",").push_newline();
        }
        out.push_dedent().push_raw("}");
    }
}

macro_rules! element_builders {
    () => {
        /// Add a keyed element: `key: value`.
        pub fn field(mut self, key: impl Into<Node>, value: impl Into<Node>) -> Self {
            self.elements.items.push(KeyValue::new(key, value).into());
            self
        }

        /// Add a positional element.
        pub fn element(mut self, value: impl Into<Node>) -> Self {
            self.elements.items.push(value.into());
            self
        }

        pub fn elements<E: Into<Node>>(mut self, values: impl IntoIterator<Item = E>) -> Self {
            self.elements
                .items
                .extend(values.into_iter().map(Into::into));
            self
        }

        /// Put every element on its own line with a trailing comma.
        pub fn multi_line(mut self) -> Self {
            self.elements.multi_line = true;
            self
        }

        pub fn is_empty(&self) -> bool {
            self.elements.items.is_empty()
        }
    };
}

/// A struct, map or named-type literal: `Type{...}`.
///
/// ```
/// use gogen::{Value, lit};
///
/// let user = Value::new("User").field("Name", lit("Alice")).field("Age", 30);
/// assert_eq!(user.to_string(), "User{Name: \"Alice\", Age: 30}");
///
/// let user = user.multi_line();
/// assert_eq!(user.to_string(), "User{\n\tName: \"Alice\",\n\tAge: 30,\n}");
/// ```
#[derive(Debug, Clone)]
pub struct Value {
    ty: Node,
    elements: Elements,
}

impl Value {
    pub fn new(ty: impl Into<Node>) -> Self {
        Self {
            ty: ty.into(),
            elements: Elements::default(),
        }
    }

    element_builders!();

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.ty.visit_packages(f);
        self.elements.visit_packages(f);
    }
}

impl Render for Value {
    fn render(&self, out: &mut CodeBuilder) {
        self.ty.render(out);
        self.elements.render(out);
    }
}

/// A slice literal: `[]T{...}`.
#[derive(Debug, Clone)]
pub struct SliceLit {
    elem: Node,
    elements: Elements,
}

impl SliceLit {
    pub fn new(elem: impl Into<Node>) -> Self {
        Self {
            elem: elem.into(),
            elements: Elements::default(),
        }
    }

    element_builders!();

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.elem.visit_packages(f);
        self.elements.visit_packages(f);
    }
}

impl Render for SliceLit {
    fn render(&self, out: &mut CodeBuilder) {
        out.push_raw("[]");
        self.elem.render(out);
        self.elements.render(out);
    }
}

/// An array literal: `[N]T{...}`. Use `"..."` as the size to let the
/// compiler count.
#[derive(Debug, Clone)]
pub struct ArrayLit {
    size: Node,
    elem: Node,
    elements: Elements,
}

impl ArrayLit {
    pub fn new(size: impl Into<Node>, elem: impl Into<Node>) -> Self {
        Self {
            size: size.into(),
            elem: elem.into(),
            elements: Elements::default(),
        }
    }

    element_builders!();

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.size.visit_packages(f);
        self.elem.visit_packages(f);
        self.elements.visit_packages(f);
    }
}

impl Render for ArrayLit {
    fn render(&self, out: &mut CodeBuilder) {
        out.push_raw("[");
        self.size.render(out);
        out.push_raw("]");
        self.elem.render(out);
        self.elements.render(out);
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

impl std::fmt::Display for SliceLit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

impl std::fmt::Display for ArrayLit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}
