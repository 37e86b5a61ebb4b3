//! Whole-file rendering: alias assignment, live references and the
//! composite literal layouts.

use gogen::{
    ArrayLit, Field, Function, Generator, Group, Interface, Node, SliceLit, Struct, Switch,
    TypeDecl, Value, Var, comment, ident, lit,
};

#[test]
fn test_aliases_unique_and_first_claim_wins() {
    let mut generator = Generator::new();
    let first = generator.import("github.com/a/types");
    let second = generator.import("github.com/b/types");
    let again = generator.import("github.com/a/types");

    assert_eq!(first.alias(), "types");
    assert_eq!(second.alias(), "types2");
    assert!(again.ptr_eq(&first));
    assert_eq!(generator.imports().aliases().len(), 2);
}

#[test]
fn test_suffix_beyond_nine() {
    let mut generator = Generator::new();
    let packages: Vec<_> = (1..=11)
        .map(|i| generator.import(&format!("github.com/p{i}/types")))
        .collect();

    assert_eq!(packages[0].alias(), "types");
    assert_eq!(packages[8].alias(), "types9");
    assert_eq!(packages[9].alias(), "types10");
    assert_eq!(packages[10].alias(), "types11");
    assert!(
        generator
            .render()
            .contains("\ttypes11 \"github.com/p11/types\"\n")
    );
}

#[test]
fn test_version_suffix_uses_parent_segment() {
    let mut generator = Generator::new();
    let pgx = generator.import("github.com/jackc/pgx/v5");
    let vue = generator.import("github.com/vuejs/vue");
    let vault = generator.import("github.com/hashicorp/vault");

    assert_eq!(pgx.alias(), "pgx");
    assert_eq!(vue.alias(), "vuejs");
    assert_eq!(vault.alias(), "vault");
    assert!(
        generator
            .render()
            .contains("\t\"github.com/vuejs/vue\"\n")
    );
}

#[test]
fn test_live_reference_after_alias_change() {
    let mut generator = Generator::new();
    let types = generator.import("github.com/example/types");
    generator.push(
        Function::new("Load")
            .param("ids", types.slice("ID"))
            .returns(types.map("ID", "User")),
    );

    types.set_alias("models");

    insta::assert_snapshot!(generator.render(), @r#"
package main

import (
	models "github.com/example/types"
)

func Load(ids []models.ID) map[models.ID]models.User
"#);
}

#[test]
fn test_type_helpers_render() {
    let mut generator = Generator::new();
    let events = generator.import("github.com/example/events");
    let keys = generator.import("github.com/example/keys");

    let rendered: Vec<String> = [
        events.ty("Event"),
        events.dot("MaxSize"),
        events.func("Decode"),
        events.call("New").arg(lit(1)).arg("opts").into(),
        events.slice("Event"),
        events.ptr("Event"),
        events.map(keys.ty("Key"), "Event"),
        events.map(ident("string"), "Event"),
        events.chan("Event"),
        events.chan_recv("Event"),
        events.chan_send("Event"),
        events.generic("Stream", [keys.ty("Key"), ident("int")]),
    ]
    .iter()
    .map(Node::to_string)
    .collect();

    assert_eq!(
        rendered,
        [
            "events.Event",
            "events.MaxSize",
            "events.Decode",
            "events.New(1, opts)",
            "[]events.Event",
            "*events.Event",
            "map[keys.Key]events.Event",
            "map[string]events.Event",
            "chan events.Event",
            "<-chan events.Event",
            "chan<- events.Event",
            "events.Stream[keys.Key, int]",
        ]
    );
}

#[test]
fn test_multi_line_literals() {
    let mut generator = Generator::new().package("example");
    let types = generator.import("github.com/example/types");

    generator
        .push(
            Group::new()
                .add(comment("Single line (default)"))
                .add(Var::new().value("numbers1", SliceLit::new("int").elements(1..=3))),
        )
        .push(
            Group::new().add(comment("One element per line")).add(Var::new().value(
                "numbers2",
                SliceLit::new("int").elements(1..=3).multi_line(),
            )),
        )
        .push(
            Var::new().value(
                "configs",
                SliceLit::new(types.ptr("Config"))
                    .element(r#"&types.Config{Name: "dev", Port: 8080}"#)
                    .element(r#"&types.Config{Name: "prod", Port: 8082}"#)
                    .multi_line(),
            ),
        )
        .push(
            Var::new().value(
                "matrix",
                ArrayLit::new(2, "[]int")
                    .element(SliceLit::new("int").elements(1..=2))
                    .element(SliceLit::new("int").elements(3..=4))
                    .multi_line(),
            ),
        );

    insta::assert_snapshot!(generator.render(), @r#"
package example

import (
	"github.com/example/types"
)

// Single line (default)
var numbers1 = []int{1, 2, 3}

// One element per line
var numbers2 = []int{
	1,
	2,
	3,
}

var configs = []*types.Config{
	&types.Config{Name: "dev", Port: 8080},
	&types.Config{Name: "prod", Port: 8082},
}

var matrix = [2][]int{
	[]int{1, 2},
	[]int{3, 4},
}
"#);
}

#[test]
fn test_value_versus_slice() {
    let mut generator = Generator::new()
        .package("example")
        .header("Code generated. DO NOT EDIT.");
    let types = generator.import("github.com/example/types");

    generator
        .push(Var::new().value(
            "users1",
            SliceLit::new("User").element(r#"User{ID: 1, Name: "Alice"}"#),
        ))
        .push(Var::new().value(
            "users2",
            Value::new(types.ty("UserList")).element("types.User{ID: 1}"),
        ))
        .push(Var::new().value(
            "config",
            Value::new("Config")
                .field("Host", lit("localhost"))
                .field("Port", 8080),
        ))
        .push(Var::new().value(
            "settings",
            Value::new("StringMap")
                .field(lit("timeout"), lit("30s"))
                .field(lit("retry"), lit("3")),
        ));

    insta::assert_snapshot!(generator.render(), @r#"
// Code generated. DO NOT EDIT.

package example

import (
	"github.com/example/types"
)

var users1 = []User{User{ID: 1, Name: "Alice"}}

var users2 = types.UserList{types.User{ID: 1}}

var config = Config{Host: "localhost", Port: 8080}

var settings = StringMap{"timeout": "30s", "retry": "3"}
"#);
}

#[test]
fn test_declarations_file() {
    let mut generator = Generator::new().package("models");
    let time = generator.import("time");
    let uuid = generator.import("github.com/google/uuid");

    generator
        .push(TypeDecl::new("Status", "int"))
        .push(
            Var::constant()
                .typed_value("StatusActive", "Status", "iota")
                .name("StatusDisabled"),
        )
        .push(
            Struct::new("User")
                .doc("User is an account holder.")
                .field(Field::new("ID", uuid.ty("UUID")).tag(r#"json:"id""#))
                .field(Field::new("CreatedAt", time.ty("Time")).tag(r#"json:"created_at""#))
                .add_field("Status", "Status"),
        )
        .push(
            Interface::new("Store")
                .method(
                    Function::new("Get")
                        .param("id", uuid.ty("UUID"))
                        .returns("*User")
                        .returns("error"),
                )
                .method(Function::new("Close").returns("error")),
        )
        .push(
            Function::new("String")
                .receiver("s", "Status")
                .returns("string")
                .stmt(
                    Switch::new("s")
                        .case(["StatusActive"], Group::new().add(r#"return "active""#))
                        .default(Group::new().add(r#"return "disabled""#)),
                ),
        );

    insta::assert_snapshot!(generator.render(), @r#"
package models

import (
	"time"

	"github.com/google/uuid"
)

type Status int

const (
	StatusActive Status = iota
	StatusDisabled
)

// User is an account holder.
type User struct {
	ID uuid.UUID `json:"id"`
	CreatedAt time.Time `json:"created_at"`
	Status Status
}

type Store interface {
	Get(id uuid.UUID) (*User, error)
	Close() error
}

func (s Status) String() string {
	switch s {
	case StatusActive:
		return "active"
	default:
		return "disabled"
	}
}
"#);
}
