//! Demo programs rendered by `gogen demo`.

use gogen::{ArrayLit, Function, Generator, Group, SliceLit, Value, Var, comment, lit};

/// Settings shared by every demo.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub package: String,
    pub header: Option<String>,
}

impl DemoOptions {
    fn generator(&self) -> Generator {
        Generator::new().package(&self.package)
    }

    fn finish(&self, generator: Generator) -> Generator {
        match &self.header {
            Some(header) => generator.header(header),
            None => generator,
        }
    }
}

fn book_processor(options: &DemoOptions, import_path: &str, name: &str, note: &str) -> Generator {
    let mut generator = options.generator();
    let book = generator.import(import_path);
    generator.push(
        Function::new(name)
            .param("b", book.ty("Book"))
            .stmt(comment(note))
            .stmt("_ = b"),
    );
    generator
}

/// Two generators import packages that are both called `book`. After the
/// merge the second one is imported as `book2` and its function follows.
pub fn merge(options: &DemoOptions) -> Generator {
    let mut google = book_processor(
        options,
        "github.com/google/a/book",
        "ProcessGoogleBook",
        "Process Google book",
    );
    let facebook = book_processor(
        options,
        "github.com/facebook/book",
        "ProcessFacebookBook",
        "Process Facebook book",
    );

    google.merge(facebook);
    options.finish(google)
}

/// Calls composed with inline groups keep following their package when a
/// merge renames it.
pub fn call(options: &DemoOptions) -> Generator {
    let mut first = options.generator();
    let gsql = first.import("github.com/google/gsql");
    first.push(
        Group::inline()
            .add("tn := ")
            .add(gsql.call("TableName").arg(lit("tableName"))),
    );

    let mut second = options.generator();
    let gsql2 = second.import("github.com/facebook/gsql");
    second.push(
        Group::inline()
            .add("tn2 := ")
            .add(gsql2.call("TableName").arg(lit("tableName2"))),
    );

    let before = gsql2.alias();
    first.merge(second);
    tracing::info!(before = %before, after = %gsql2.alias(), "gsql alias after merge");

    options.finish(first)
}

fn commented(lines: &[&str], node: impl Into<gogen::Node>) -> Group {
    let mut group = Group::new();
    for line in lines {
        group.push(comment(*line));
    }
    group.push(node);
    group
}

/// Slice and array literals, on one line and with one element per line.
pub fn multiline(options: &DemoOptions) -> Generator {
    let mut generator = options.generator();
    let types = generator.import("github.com/example/types");

    generator
        .push(commented(
            &["Single line (default)"],
            Var::new().value("numbers1", SliceLit::new("int").elements(1..=5)),
        ))
        .push(commented(
            &["One element per line"],
            Var::new().value("numbers2", SliceLit::new("int").elements(1..=5).multi_line()),
        ))
        .push(commented(
            &[
                "Named slice type, one element per line",
                "Assumes: type UserList []User",
            ],
            Var::new().value(
                "users",
                Value::new("UserList")
                    .element(r#"User{ID: 1, Name: "Alice"}"#)
                    .element(r#"User{ID: 2, Name: "Bob"}"#)
                    .element(r#"User{ID: 3, Name: "Charlie"}"#)
                    .element(r#"User{ID: 4, Name: "David"}"#)
                    .multi_line(),
            ),
        ))
        .push(commented(
            &["Element type from another package"],
            Var::new().value(
                "configs",
                SliceLit::new(types.ptr("Config"))
                    .element(r#"&types.Config{Name: "dev", Port: 8080}"#)
                    .element(r#"&types.Config{Name: "staging", Port: 8081}"#)
                    .element(r#"&types.Config{Name: "prod", Port: 8082}"#)
                    .multi_line(),
            ),
        ))
        .push(commented(
            &["Fixed size array"],
            Var::new().value(
                "matrix",
                ArrayLit::new(3, "[]int")
                    .element(SliceLit::new("int").elements(1..=3))
                    .element(SliceLit::new("int").elements(4..=6))
                    .element(SliceLit::new("int").elements(7..=9))
                    .multi_line(),
            ),
        ));

    options.finish(generator)
}

/// Composite literals: anonymous slices, named types, structs and maps.
pub fn values(options: &DemoOptions) -> Generator {
    let mut generator = options.generator();
    let types = generator.import("github.com/example/types");

    generator
        .push(commented(
            &["Anonymous slice type"],
            Var::new().value(
                "users1",
                SliceLit::new("User")
                    .element(r#"User{ID: 1, Name: "Alice"}"#)
                    .element(r#"User{ID: 2, Name: "Bob"}"#),
            ),
        ))
        .push(commented(
            &["Named slice type", "Assumes: type UserList []User"],
            Var::new().value(
                "users2",
                Value::new("UserList")
                    .element(r#"User{ID: 1, Name: "Alice"}"#)
                    .element(r#"User{ID: 2, Name: "Bob"}"#),
            ),
        ))
        .push(commented(
            &["Named type from another package"],
            Var::new().value(
                "users3",
                Value::new(types.ty("UserList"))
                    .element("types.User{ID: 1}")
                    .element("types.User{ID: 2}"),
            ),
        ))
        .push(commented(
            &["Struct literal"],
            Var::new().value(
                "config",
                Value::new("Config")
                    .field("Host", lit("localhost"))
                    .field("Port", 8080),
            ),
        ))
        .push(commented(
            &["Map type", "Assumes: type StringMap map[string]string"],
            Var::new().value(
                "settings",
                Value::new("StringMap")
                    .field(lit("timeout"), lit("30s"))
                    .field(lit("retry"), lit("3")),
            ),
        ));

    options.finish(generator)
}
