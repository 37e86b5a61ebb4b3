//! Control flow statements.

use crate::group::{Group, render_block};
use crate::node::{Node, render_joined};
use crate::package::PackageRef;
use crate::writer::{CodeBuilder, Render};

/// `if cond { ... } else if cond { ... } else { ... }`
///
/// ```
/// use gogen::{Group, If};
///
/// let stmt = If::new("err != nil")
///     .stmt("return err")
///     .otherwise(Group::new().add("return nil"));
///
/// assert_eq!(
///     stmt.to_string(),
///     "if err != nil {\n\treturn err\n} else {\n\treturn nil\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct If {
    cond: Node,
    body: Group,
    else_ifs: Vec<(Node, Group)>,
    otherwise: Option<Group>,
}

impl If {
    pub fn new(cond: impl Into<Node>) -> Self {
        Self {
            cond: cond.into(),
            body: Group::new(),
            else_ifs: Vec::new(),
            otherwise: None,
        }
    }

    pub fn stmt(mut self, stmt: impl Into<Node>) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn body(mut self, body: Group) -> Self {
        self.body.append(body);
        self
    }

    pub fn else_if(mut self, cond: impl Into<Node>, body: Group) -> Self {
        self.else_ifs.push((cond.into(), body));
        self
    }

    /// The final `else` branch. Calling it again replaces the branch.
    pub fn otherwise(mut self, body: Group) -> Self {
        self.otherwise = Some(body);
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        self.cond.visit_packages(f);
        self.body.visit_packages(f);
        for (cond, body) in &mut self.else_ifs {
            cond.visit_packages(f);
            body.visit_packages(f);
        }
        if let Some(body) = &mut self.otherwise {
            body.visit_packages(f);
        }
    }
}

impl Render for If {
    fn render(&self, out: &mut CodeBuilder) {
        out.push_raw("if ");
        self.cond.render(out);
        out.push_raw(" ");
        render_block(out, self.body.items());

        for (cond, body) in &self.else_ifs {
            out.push_raw(" else if ");
            cond.render(out);
            out.push_raw(" ");
            render_block(out, body.items());
        }

        if let Some(body) = &self.otherwise {
            out.push_raw(" else ");
            render_block(out, body.items());
        }
    }
}

/// `for clause { ... }`, or `for { ... }` without a clause.
#[derive(Debug, Clone)]
pub struct For {
    clause: Option<Node>,
    body: Group,
}

impl For {
    /// A loop with a condition, three-part clause or range clause.
    pub fn new(clause: impl Into<Node>) -> Self {
        Self {
            clause: Some(clause.into()),
            body: Group::new(),
        }
    }

    /// An infinite loop.
    pub fn forever() -> Self {
        Self {
            clause: None,
            body: Group::new(),
        }
    }

    pub fn stmt(mut self, stmt: impl Into<Node>) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn body(mut self, body: Group) -> Self {
        self.body.append(body);
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        if let Some(clause) = &mut self.clause {
            clause.visit_packages(f);
        }
        self.body.visit_packages(f);
    }
}

impl Render for For {
    fn render(&self, out: &mut CodeBuilder) {
        out.push_raw("for ");
        if let Some(clause) = &self.clause {
            clause.render(out);
            out.push_raw(" ");
        }
        render_block(out, self.body.items());
    }
}

#[derive(Debug, Clone)]
struct Case {
    exprs: Vec<Node>,
    body: Group,
}

/// `switch tag { case ...: ... default: ... }`
///
/// Case labels sit at the level of the `switch` keyword and their bodies one
/// level deeper, as `gofmt` lays them out.
#[derive(Debug, Clone)]
pub struct Switch {
    tag: Option<Node>,
    cases: Vec<Case>,
    default: Option<Group>,
}

impl Switch {
    /// Switch on a value: `switch kind { ... }`.
    pub fn new(tag: impl Into<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            cases: Vec::new(),
            default: None,
        }
    }

    /// Tagless switch, where each case is a boolean expression.
    pub fn bare() -> Self {
        Self {
            tag: None,
            cases: Vec::new(),
            default: None,
        }
    }

    /// Add a case matching any of `exprs`.
    pub fn case<E: Into<Node>>(mut self, exprs: impl IntoIterator<Item = E>, body: Group) -> Self {
        self.cases.push(Case {
            exprs: exprs.into_iter().map(Into::into).collect(),
            body,
        });
        self
    }

    pub fn default(mut self, body: Group) -> Self {
        self.default = Some(body);
        self
    }

    pub(crate) fn visit_packages(&mut self, f: &mut dyn FnMut(&mut PackageRef)) {
        if let Some(tag) = &mut self.tag {
            tag.visit_packages(f);
        }
        for case in &mut self.cases {
            for expr in &mut case.exprs {
                expr.visit_packages(f);
            }
            case.body.visit_packages(f);
        }
        if let Some(body) = &mut self.default {
            body.visit_packages(f);
        }
    }
}

fn render_clause_body(out: &mut CodeBuilder, body: &Group) {
    out.push_newline().push_indent();
    for item in body.items() {
        item.render(out);
        out.push_newline();
    }
    out.push_dedent();
}

impl Render for Switch {
    fn render(&self, out: &mut CodeBuilder) {
        out.push_raw("switch ");
        if let Some(tag) = &self.tag {
            tag.render(out);
            out.push_raw(" ");
        }
        out.push_raw("{").push_newline();

        for case in &self.cases {
            out.push_raw("case ");
            render_joined(out, &case.exprs, ", ");
            out.push_raw(":");
            render_clause_body(out, &case.body);
        }
        if let Some(body) = &self.default {
            out.push_raw("default:");
            render_clause_body(out, body);
        }

        out.push_raw("}");
    }
}

impl std::fmt::Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

impl std::fmt::Display for For {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}
