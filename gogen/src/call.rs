//! Call expressions.

use crate::node::{Node, render_joined};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// A call expression: `callee(arg1, arg2)`.
///
/// The callee is a node, so a call built with [`PackageRef::call`] keeps
/// following the package alias.
///
/// ```
/// use gogen::{Call, lit};
///
/// let call = Call::new("fmt.Println").arg(lit("hello")).arg("name");
/// assert_eq!(call.to_string(), "fmt.Println(\"hello\", name)");
/// ```
#[derive(Debug, Clone)]
pub struct Call {
    callee: Node,
    args: Vec<Node>,
}

impl Call {
    pub fn new(callee: impl Into<Node>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    /// Add one argument.
    pub fn arg(mut self, arg: impl Into<Node>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add several arguments of the same kind.
    pub fn args<A: Into<Node>>(mut self, args: impl IntoIterator<Item = A>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Call a method on the result: `callee(...).name()`.
    pub fn then(self, name: impl AsRef<str>) -> Call {
        let mut selector = crate::group::Group::inline();
        selector.push(self).push(format!(".{}", name.as_ref()));
        Call::new(selector)
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.callee.visit_packages(f);
        for arg in &mut self.args {
            arg.visit_packages(f);
        }
    }
}

impl Render for Call {
    fn render(&self, out: &mut CodeBuilder) {
        self.callee.render(out);
        out.push_raw("(");
        render_joined(out, &self.args, ", ");
        out.push_raw(")");
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::lit;

    #[test]
    fn test_call_without_args() {
        assert_eq!(Call::new("run").to_string(), "run()");
    }

    #[test]
    fn test_call_args() {
        let call = Call::new("max").args([lit(1), lit(2), lit(3)]);
        assert_eq!(call.to_string(), "max(1, 2, 3)");
    }

    #[test]
    fn test_nested_call() {
        let call = Call::new("fmt.Println").arg(Call::new("strings.ToUpper").arg("name"));
        assert_eq!(call.to_string(), "fmt.Println(strings.ToUpper(name))");
    }

    #[test]
    fn test_chained_call() {
        let call = Call::new("NewBuilder").then("Build").arg(lit(true));
        assert_eq!(call.to_string(), "NewBuilder().Build(true)");
    }
}
