//! Build Go source files from a typed node tree.
//!
//! A [`Generator`] holds the imports and top-level items of one Go file.
//! Importing a path hands out a [`PackageRef`]; every type, call or
//! identifier built from it reads the package alias when it is rendered.
//! That keeps already built code correct when [`Generator::merge`] has to
//! rename a package to avoid a clash.
//!
//! ```
//! use gogen::{Function, Generator};
//!
//! let mut google = Generator::new();
//! let book = google.import("github.com/google/book");
//! google.push(Function::new("ProcessGoogleBook").param("b", book.ty("Book")).with_body());
//!
//! let mut facebook = Generator::new();
//! let book = facebook.import("github.com/facebook/book");
//! facebook.push(Function::new("ProcessFacebookBook").param("b", book.ty("Book")).with_body());
//!
//! google.merge(facebook);
//! let output = google.render();
//!
//! assert!(output.contains("book2 \"github.com/facebook/book\""));
//! assert!(output.contains("func ProcessFacebookBook(b book2.Book) {"));
//! ```
//!
//! # Module Organization
//!
//! - [`writer`] - The [`CodeBuilder`] render sink and the [`Render`] trait
//! - [`node`] - The [`Node`] enum, literals and small constructors
//! - [`package`] - Package references and qualified identifiers
//! - [`imports`] - The per-generator import registry
//! - [`generator`] - Whole-file generation and merging

mod call;
mod control;
mod decl;
mod function;
mod group;
mod indent;
mod merge;
mod types;
mod value;

pub mod generator;
pub mod imports;
pub mod node;
pub mod package;
pub mod writer;

// Code writing
pub use indent::Indent;
pub use writer::{CodeBuilder, Render};
// Nodes
pub use call::Call;
pub use control::{For, If, Switch};
pub use decl::{Field, Interface, Struct, TypeDecl, Var};
pub use function::{Function, Param};
pub use group::{Group, Layout};
pub use node::{KeyValue, Lit, Node, blank, comment, ident, lit, quote, raw};
pub use types::{ChanDir, TypeExpr};
pub use value::{ArrayLit, SliceLit, Value};
// Packages and imports
pub use imports::{ImportRegistry, import_line};
pub use package::{PackageRef, Qualified, TypeArg};
// Generation
pub use generator::Generator;
