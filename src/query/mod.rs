//! # Query Trees
//!
//! The `json_graphql_query::query` module contains the typed query tree and the compiler that
//! turns it into GraphQL Query Language. A [`QueryNode`] is one level of field selection: an
//! ordered list of fields mapped to either leaf flags or nested nodes, plus control data such as
//! arguments, aliases, variable declarations, a directive, and inline fragments.
//!
//! Compiling happens in two passes:
//! - [`walk`] visits the tree and emits a flat list of [`Line`]s, each tagged with its nesting
//!   level, onto the arena of a [`QueryContext`]
//! - [`render`] joins those lines into compact or indented text
//!
//! Most of the time both are used via [`compile`].
//!
//! ```
//! use json_graphql_query::query::*;
//!
//! let query = QueryNode::new().field(
//!     "query",
//!     QueryNode::new().field(
//!         "Posts",
//!         QueryNode::new()
//!             .argument("orderBy", Value::enumeration("CREATED_AT"))
//!             .select("id")
//!             .select("title"),
//!     ),
//! );
//!
//! let output = compile(&query, &Options::new().with_pretty(true)).unwrap();
//! assert_eq!(
//!     output,
//!     "query {\n    Posts (orderBy: CREATED_AT) {\n        id\n        title\n    }\n}"
//! );
//! ```

mod compile;
mod node;
mod printer;
mod render;
mod walker;


pub use compile::*;
pub(crate) use compile::compile_unchecked;
pub use node::*;
pub use printer::PrintNode;
pub use render::render;
pub use walker::{walk, IgnoredFields, Line, Lines, QueryContext};
