//! The generator: one Go source file under construction.

use std::path::PathBuf;

use gogen_core::{File, WriteResult};

use crate::group::Group;
use crate::imports::ImportRegistry;
use crate::indent::Indent;
use crate::node::{Node, render_comment};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// Builds one Go source file.
///
/// A generator owns an import registry and a body. Package references come
/// from [`Generator::import`], nodes go into the body, and the whole file is
/// rendered on demand.
///
/// ```
/// use gogen::{Function, Generator, lit};
///
/// let mut generator = Generator::new();
/// let fmt = generator.import("fmt");
/// generator.push(
///     Function::new("main").stmt(fmt.call("Println").arg(lit("hello"))),
/// );
///
/// assert_eq!(
///     generator.render(),
///     "package main\n\nimport (\n\t\"fmt\"\n)\n\nfunc main() {\n\tfmt.Println(\"hello\")\n}\n"
/// );
/// ```
#[derive(Debug)]
pub struct Generator {
    package: String,
    header: Option<String>,
    indent: Indent,
    registry: ImportRegistry,
    body: Group,
}

impl Generator {
    /// Create an empty generator for `package main`.
    pub fn new() -> Self {
        Self {
            package: "main".to_string(),
            header: None,
            indent: Indent::GO,
            registry: ImportRegistry::new(),
            body: Group::paragraphs(),
        }
    }

    /// Set the name in the `package` clause.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = name.into();
        self
    }

    /// Set a comment written above the `package` clause, e.g.
    /// `Code generated by gogen. DO NOT EDIT.`
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// The reference for `import_path`, importing it on first use.
    ///
    /// The first request for a package name claims it; later packages with
    /// the same name get `name2`, `name3`, ...
    pub fn import(&mut self, import_path: &str) -> PackageRef {
        self.registry.get_or_create(import_path)
    }

    /// Import `import_path` under a fixed alias.
    ///
    /// The alias is not checked against other imports. If the path is
    /// already imported the existing reference is returned unchanged.
    pub fn import_as(&mut self, import_path: &str, alias: &str) -> PackageRef {
        self.registry.get_or_create_with_alias(import_path, alias)
    }

    pub fn imports(&self) -> &ImportRegistry {
        &self.registry
    }

    /// Top-level items, rendered with a blank line between them.
    pub fn body(&self) -> &Group {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Group {
        &mut self.body
    }

    /// Append a top-level item.
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.body.push(node);
        self
    }

    /// Fold `other` into this generator.
    ///
    /// Imports are merged first: a path both generators import keeps this
    /// generator's alias, and a new path whose alias is already taken here
    /// is renamed. Nodes built by `other` follow those decisions. Then
    /// `other`'s body is appended to this one.
    pub fn merge(&mut self, other: Generator) {
        let Generator {
            registry, mut body, ..
        } = other;

        let incoming = registry.len();
        let rebinds = self.registry.absorb(registry);
        if !rebinds.is_empty() {
            body.visit_packages(&mut |package| rebinds.apply(package));
        }

        tracing::debug!(
            imports = incoming,
            items = body.len(),
            total_imports = self.registry.len(),
            "merged generator"
        );
        self.body.append(body);
    }

    /// Render the complete file.
    pub fn render(&self) -> String {
        let mut out = CodeBuilder::new(self.indent);
        Render::render(self, &mut out);
        out.build()
    }

    /// The rendered file, ready to be written to `path`.
    pub fn to_file(&self, path: impl Into<PathBuf>) -> File {
        File::new(path, Generator::render(self))
    }

    /// Render and write the file, creating parent directories as needed.
    pub fn write_file(&self, path: impl Into<PathBuf>) -> gogen_core::Result<WriteResult> {
        self.to_file(path).write()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Generator {
    fn render(&self, out: &mut CodeBuilder) {
        if let Some(header) = &self.header {
            render_comment(out, header);
            out.push_newline().push_newline();
        }

        out.push_raw("package ").push_raw(&self.package).push_newline();

        if !self.registry.is_empty() {
            out.push_newline();
            self.registry.render(out);
            out.push_newline();
        }

        if !self.body.is_empty() {
            out.push_newline();
            self.body.render(out);
            out.push_newline();
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Generator::render(self))
    }
}
