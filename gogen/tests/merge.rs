//! Merging generators that import clashing or shared packages.
//!
//! Exact output is checked with inline snapshots. Run `cargo insta review`
//! after intentional formatting changes.

use gogen::{Function, Generator, Group, If, Interface, SliceLit, Var, lit};

fn book_processor(path: &str, func: &str) -> Generator {
    let mut generator = Generator::new().package("example");
    let book = generator.import(path);
    generator.push(
        Function::new(func)
            .param("b", book.ty("Book"))
            .returns("error")
            .stmt("return nil"),
    );
    generator
}

fn typed_var(path: &str, name: &str) -> Generator {
    let mut generator = Generator::new();
    let types = generator.import(path);
    generator.push(Var::new().typed(name, types.ty("T")));
    generator
}

#[test]
fn test_merge_renames_clashing_package() {
    let mut google = book_processor("github.com/google/a/book", "ProcessGoogleBook");
    let facebook = book_processor("github.com/facebook/book", "ProcessFacebookBook");

    google.merge(facebook);

    insta::assert_snapshot!(google.render(), @r#"
package example

import (
	"github.com/google/a/book"
	book2 "github.com/facebook/book"
)

func ProcessGoogleBook(b book.Book) error {
	return nil
}

func ProcessFacebookBook(b book2.Book) error {
	return nil
}
"#);
}

#[test]
fn test_merge_without_collision_keeps_aliases() {
    let mut dest = Generator::new();
    let fmt = dest.import("fmt");
    dest.push(Function::new("main").stmt(fmt.call("Println").arg(lit("hi"))));

    let mut src = Generator::new();
    let uuid = src.import("github.com/google/uuid");
    src.push(Var::new().value("id", uuid.call("New")));

    dest.merge(src);

    assert_eq!(uuid.alias(), "uuid");
    insta::assert_snapshot!(dest.render(), @r#"
package main

import (
	"fmt"

	"github.com/google/uuid"
)

func main() {
	fmt.Println("hi")
}

var id = uuid.New()
"#);
}

#[test]
fn test_merge_complex_types() {
    let mut a = Generator::new();
    let types_a = a.import("github.com/example/types");
    a.push(Var::new().value(
        "users",
        SliceLit::new(types_a.ty("User")).element("types.User{ID: 1}"),
    ));

    let mut b = Generator::new();
    let types_b = b.import("github.com/other/types");
    b.push(Var::new().value(
        "configs",
        SliceLit::new(types_b.ptr("Config")).element("types.Config{}"),
    ));

    a.merge(b);
    let output = a.render();

    assert!(output.contains("\t\"github.com/example/types\"\n"));
    assert!(output.contains("\ttypes2 \"github.com/other/types\"\n"));
    assert!(output.contains("var users = []types.User{types.User{ID: 1}}"));
    assert!(output.contains("var configs = []*types2.Config{types.Config{}}"));
}

#[test]
fn test_merge_same_path_shares_one_import() {
    let mut a = Generator::new();
    let types = a.import("github.com/example/types");
    a.push(Var::new().typed("u1", types.ty("User")));

    let mut b = Generator::new();
    let other = b.import("github.com/example/types");
    b.push(Var::new().typed("u2", other.ty("User")));

    a.merge(b);
    let output = a.render();

    assert_eq!(output.matches("\"github.com/example/types\"").count(), 1);
    assert!(output.contains("var u1 types.User"));
    assert!(output.contains("var u2 types.User"));
    assert!(!output.contains("types2"));

    // both variables now follow the surviving reference
    types.set_alias("models");
    let output = a.render();
    assert!(output.contains("var u1 models.User"));
    assert!(output.contains("var u2 models.User"));
    assert_eq!(other.alias(), "models");
}

#[test]
fn test_merge_dropped_handle_names_surviving_import() {
    let mut a = Generator::new();
    a.import("x.com/a/types");

    let mut b = Generator::new();
    let b_other = b.import("y.com/b/types");
    let b_types = b.import("x.com/a/types");
    let pending = Var::new().typed("u", b_types.ty("User"));
    b.push(Var::new().typed("o", b_other.ty("Order")));

    a.merge(b);
    a.push(pending);
    a.push(Var::new().typed("g", b_types.ty("Group")));

    insta::assert_snapshot!(a.render(), @r#"
package main

import (
	"x.com/a/types"
	types2 "y.com/b/types"
)

var o types2.Order

var u types.User

var g types.Group
"#);
}

#[test]
fn test_merge_rewires_nested_nodes() {
    let mut a = Generator::new();
    let errors = a.import("errors");

    let mut b = Generator::new();
    let errors_b = b.import("errors");
    b.push(
        Function::new("check")
            .param("err", "error")
            .returns("bool")
            .stmt(
                If::new(errors_b.call("Is").arg("err").arg("ErrSkip")).stmt("return true"),
            )
            .stmt("return false"),
    );

    a.merge(b);
    errors.set_alias("stderrors");

    insta::assert_snapshot!(a.render(), @r#"
package main

import (
	stderrors "errors"
)

func check(err error) bool {
	if stderrors.Is(err, ErrSkip) {
		return true
	}
	return false
}
"#);
}

#[test]
fn test_three_way_merge() {
    let mut a = typed_var("github.com/a/types", "v1");
    a.merge(typed_var("github.com/b/types", "v2"));
    a.merge(typed_var("github.com/c/types", "v3"));

    insta::assert_snapshot!(a.render(), @r#"
package main

import (
	"github.com/a/types"
	types2 "github.com/b/types"
	types3 "github.com/c/types"
)

var v1 types.T

var v2 types2.T

var v3 types3.T
"#);
}

#[test]
fn test_merge_order_independent_of_grouping() {
    let mut sequential = typed_var("github.com/a/types", "v1");
    sequential.merge(typed_var("github.com/b/types", "v2"));
    sequential.merge(typed_var("github.com/c/types", "v3"));

    let mut tail = typed_var("github.com/b/types", "v2");
    tail.merge(typed_var("github.com/c/types", "v3"));
    let mut grouped = typed_var("github.com/a/types", "v1");
    grouped.merge(tail);

    assert_eq!(sequential.render(), grouped.render());
}

#[test]
fn test_merge_interface_signatures() {
    let mut a = Generator::new().package("example");
    let types_a = a.import("github.com/google/types");
    a.push(
        Interface::new("Service").method(
            Function::new("GetUser")
                .param("id", "int64")
                .returns(types_a.ptr("User"))
                .returns("error"),
        ),
    );

    let mut b = Generator::new().package("example");
    let types_b = b.import("github.com/facebook/types");
    b.push(
        Interface::new("Repository").method(
            Function::new("FindUser")
                .param("id", "int64")
                .returns(types_b.ptr("User"))
                .returns("error"),
        ),
    );

    a.merge(b);

    insta::assert_snapshot!(a.render(), @r#"
package example

import (
	"github.com/google/types"
	types2 "github.com/facebook/types"
)

type Service interface {
	GetUser(id int64) (*types.User, error)
}

type Repository interface {
	FindUser(id int64) (*types2.User, error)
}
"#);
}

#[test]
fn test_merge_inline_group_call() {
    let mut a = Generator::new().package("example");
    let pkg_a = a.import("github.com/google/pkg");
    a.push(Group::inline().add("x := ").add(pkg_a.call("Foo").arg(lit("a"))));

    let mut b = Generator::new().package("example");
    let pkg_b = b.import("github.com/facebook/pkg");
    b.push(Group::inline().add("y := ").add(pkg_b.call("Bar").arg(lit("b"))));

    a.merge(b);
    let output = a.render();

    assert!(output.contains("x := pkg.Foo(\"a\")\n"));
    assert!(output.contains("y := pkg2.Bar(\"b\")\n"));
    assert_eq!(pkg_b.alias(), "pkg2");
}

#[test]
fn test_merge_source_alias_free_in_dest() {
    // the source already had to suffix its second import
    let mut src = Generator::new();
    let first = src.import("github.com/a/types");
    let second = src.import("github.com/b/types");
    src.push(Var::new().typed("x", second.ty("T")));

    let mut dest = Generator::new();
    dest.import("github.com/c/models");
    dest.merge(src);

    assert_eq!(first.alias(), "types");
    assert_eq!(second.alias(), "types2");
    assert!(dest.render().contains("var x types2.T"));
}

#[test]
fn test_merge_into_empty_generator() {
    let mut dest = Generator::new().package("example");
    dest.merge(book_processor("github.com/google/a/book", "Process"));

    assert_eq!(dest.imports().len(), 1);
    assert!(dest.render().contains("func Process(b book.Book) error {"));
}
