//! Code writer used as the render sink for every node.

use crate::Indent;

/// A node that can write itself into a [`CodeBuilder`].
///
/// Rendering happens on demand. Nodes that refer to a package read its
/// alias while rendering, so the output always reflects the current alias.
pub trait Render {
    /// Write this node into the builder.
    fn render(&self, out: &mut CodeBuilder);

    /// Render into a fresh builder with Go indentation and return the text.
    fn render_to_string(&self) -> String {
        let mut out = CodeBuilder::go();
        self.render(&mut out);
        out.build()
    }
}

/// Append-only buffer that tracks indentation.
///
/// Indentation is written lazily: the first non-empty text on a line is
/// prefixed with the current indent, and blank lines stay empty.
///
/// # Example
///
/// ```
/// use gogen::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("println(\"hello\")")
///     .push_dedent()
///     .push_raw("}");
///
/// assert_eq!(builder.build(), "func main() {\n\tprintln(\"hello\")\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    at_line_start: bool,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add raw text. Embedded newlines start new, indented lines.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.write_segment(first);
        }
        for line in lines {
            self.push_newline();
            self.write_segment(line);
        }
        self
    }

    /// Add a line of text followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.push_raw(s).push_newline()
    }

    /// End the current line.
    pub fn push_newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        if !self.at_line_start {
            self.push_newline();
        }
        self.push_newline()
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a node.
    pub fn emit(&mut self, node: &impl Render) -> &mut Self {
        node.render(self);
        self
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Build the final string.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_segment(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.indent.write_to(&mut self.buffer);
            }
            self.at_line_start = false;
        }
        self.buffer.push_str(segment);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}
