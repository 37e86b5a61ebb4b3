//! Node sequences and the block helper shared by all braced constructs.

use crate::node::{Node, comment};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// How the items of a [`Group`] are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One item per line (statement lists).
    #[default]
    Lines,
    /// A blank line between items (top-level declarations).
    Paragraphs,
    /// No separator: items form a single expression or statement.
    Inline,
}

/// An ordered sequence of nodes.
///
/// Use [`Group::inline`] to compose one statement out of several nodes
/// without freezing the package aliases into a string:
///
/// ```
/// use gogen::{Generator, Group, lit};
///
/// let mut generator = Generator::new();
/// let fmt = generator.import("fmt");
///
/// let stmt = Group::inline()
///     .add("result := ")
///     .add(fmt.call("Sprintf").arg(lit("hello %s")).arg(lit("world")));
/// assert_eq!(stmt.to_string(), "result := fmt.Sprintf(\"hello %s\", \"world\")");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Group {
    items: Vec<Node>,
    layout: Layout,
}

impl Group {
    /// Create an empty group with one item per line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group with blank lines between items.
    pub fn paragraphs() -> Self {
        Self::with_layout(Layout::Paragraphs)
    }

    /// Create an empty group with no separators between items.
    pub fn inline() -> Self {
        Self::with_layout(Layout::Inline)
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self {
            items: Vec::new(),
            layout,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Add a node (consuming).
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Add a node (mutable).
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.items.push(node.into());
        self
    }

    /// Add several nodes of the same kind.
    pub fn extend<N: Into<Node>>(&mut self, nodes: impl IntoIterator<Item = N>) -> &mut Self {
        self.items.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Add a `//` comment line.
    pub fn push_comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(comment(text))
    }

    /// Add an empty line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.push(Node::Blank)
    }

    /// Move all items of `other` to the end of this group.
    pub fn append(&mut self, other: Group) -> &mut Self {
        self.items.extend(other.items);
        self
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        for item in &mut self.items {
            item.visit_packages(f);
        }
    }
}

impl Render for Group {
    fn render(&self, out: &mut CodeBuilder) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                match self.layout {
                    Layout::Lines => {
                        out.push_newline();
                    }
                    Layout::Paragraphs => {
                        out.push_blank();
                    }
                    Layout::Inline => {}
                }
            }
            item.render(out);
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

/// Write `{`, the items one per line one level deeper, then `}`.
pub(crate) fn render_block(out: &mut CodeBuilder, items: &[Node]) {
    out.push_raw("{").push_newline().push_indent();
    for item in items {
        item.render(out);
        out.push_newline();
    }
    out.push_dedent().push_raw("}");
}
