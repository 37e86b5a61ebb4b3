//! Function, method and interface method signatures.

use crate::group::{Group, render_block};
use crate::node::{Node, render_comment, render_joined};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// A named (or unnamed) parameter, result or receiver.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Node,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self, out: &mut CodeBuilder) {
        if !self.name.is_empty() {
            out.push_raw(&self.name).push_raw(" ");
        }
        self.ty.render(out);
    }
}

/// Builder for Go functions and methods.
///
/// Consecutive parameters (or results) whose types render the same are
/// merged: `a string, b string` becomes `a, b string`.
///
/// ```
/// use gogen::Function;
///
/// let f = Function::new("Add")
///     .param("a", "int")
///     .param("b", "int")
///     .returns("int")
///     .stmt("return a + b");
///
/// assert_eq!(f.to_string(), "func Add(a, b int) int {\n\treturn a + b\n}");
/// ```
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    doc: Option<String>,
    receiver: Option<Param>,
    params: Vec<Param>,
    results: Vec<Param>,
    body: Option<Group>,
    invoke: Option<Vec<Node>>,
    signature_only: bool,
}

impl Function {
    /// Create a function. An empty name gives a function literal.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            body: None,
            invoke: None,
            signature_only: false,
        }
    }

    /// Create a function literal: `func(...) {...}`.
    pub fn literal() -> Self {
        Self::new("")
    }

    /// Doc comment rendered as `//` lines above the declaration.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Make this a method: `func (r *Repo) Name()`.
    pub fn receiver(mut self, name: impl Into<String>, ty: impl Into<Node>) -> Self {
        self.receiver = Some(Param::new(name, ty));
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<Node>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    /// Add several parameters sharing one type: `ctx, id, key any`.
    pub fn params<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
        ty: impl Into<Node>,
    ) -> Self {
        let ty = ty.into();
        for name in names {
            self.params.push(Param::new(name, ty.clone()));
        }
        self
    }

    /// Add a named result. An empty name gives an unnamed result.
    pub fn result(mut self, name: impl Into<String>, ty: impl Into<Node>) -> Self {
        self.results.push(Param::new(name, ty));
        self
    }

    /// Add an unnamed result.
    pub fn returns(self, ty: impl Into<Node>) -> Self {
        self.result("", ty)
    }

    /// Add a statement to the body.
    pub fn stmt(mut self, stmt: impl Into<Node>) -> Self {
        self.body.get_or_insert_with(Group::new).push(stmt);
        self
    }

    /// Add several statements of the same kind.
    pub fn stmts<N: Into<Node>>(mut self, stmts: impl IntoIterator<Item = N>) -> Self {
        self.body.get_or_insert_with(Group::new).extend(stmts);
        self
    }

    /// Render a body even when it has no statements: `func Noop() {\n}`.
    pub fn with_body(mut self) -> Self {
        self.body.get_or_insert_with(Group::new);
        self
    }

    /// Mutable access to the body, created on first use.
    pub fn body_mut(&mut self) -> &mut Group {
        self.body.get_or_insert_with(Group::new)
    }

    /// Call the function right where it is defined: `func() {...}()`.
    pub fn invoke<A: Into<Node>>(mut self, args: impl IntoIterator<Item = A>) -> Self {
        self.invoke = Some(args.into_iter().map(Into::into).collect());
        self.body.get_or_insert_with(Group::new);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_signature(mut self) -> Self {
        self.signature_only = true;
        self.body = None;
        self.invoke = None;
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        let params = self
            .receiver
            .iter_mut()
            .chain(self.params.iter_mut())
            .chain(self.results.iter_mut());
        for param in params {
            param.ty.visit_packages(f);
        }
        if let Some(body) = &mut self.body {
            body.visit_packages(f);
        }
        for arg in self.invoke.iter_mut().flatten() {
            arg.visit_packages(f);
        }
    }

    fn render_results(&self, out: &mut CodeBuilder) {
        match self.results.as_slice() {
            [] => {}
            [single] if single.name.is_empty() => {
                out.push_raw(" ");
                single.ty.render(out);
            }
            results => {
                out.push_raw(" (");
                render_params(out, results);
                out.push_raw(")");
            }
        }
    }
}

impl Render for Function {
    fn render(&self, out: &mut CodeBuilder) {
        if let Some(doc) = &self.doc {
            render_comment(out, doc);
            out.push_newline();
        }

        if !self.signature_only {
            out.push_raw("func");
            if self.receiver.is_some() || !self.name.is_empty() {
                out.push_raw(" ");
            }
        }

        if let Some(receiver) = &self.receiver {
            out.push_raw("(");
            receiver.render(out);
            out.push_raw(") ");
        }

        out.push_raw(&self.name).push_raw("(");
        render_params(out, &self.params);
        out.push_raw(")");
        self.render_results(out);

        if let Some(body) = &self.body {
            out.push_raw(" ");
            render_block(out, body.items());
        }

        if let Some(args) = &self.invoke {
            out.push_raw("(");
            render_joined(out, args, ", ");
            out.push_raw(")");
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

/// Render a parameter list, merging runs of the same type.
///
/// Types are compared by their rendered text, so the comparison sees the
/// package aliases as they are at render time.
fn render_params(out: &mut CodeBuilder, params: &[Param]) {
    let types: Vec<String> = params.iter().map(|p| p.ty.render_to_string()).collect();

    if params.iter().all(|p| p.name.is_empty()) {
        out.push_raw(&types.join(", "));
        return;
    }

    let mut i = 0;
    while i < params.len() {
        if i > 0 {
            out.push_raw(", ");
        }
        if params[i].name.is_empty() {
            params[i].render(out);
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < params.len() && !params[j].name.is_empty() && types[j] == types[i] {
            j += 1;
        }

        let names: Vec<&str> = params[i..j].iter().map(|p| p.name.as_str()).collect();
        out.push_raw(&names.join(", ")).push_raw(" ");
        params[i].ty.render(out);
        i = j;
    }
}
