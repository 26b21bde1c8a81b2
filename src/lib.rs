//! `json_graphql_query`
//! =========
//!
//! _Write GraphQL queries as nested data, not as strings._
//!
//! The **`json_graphql_query`** library compiles a nested query tree into GraphQL Query Language.
//! Fields are selected by mapping them to `true` or to a nested node, and arguments, aliases,
//! variable declarations, a directive, and inline fragments are attached to a field's node.
//!
//! Query trees can either be built with the typed [`QueryNode`] builder or written as JSON
//! objects that use reserved control keys such as `__args` and are converted by the [`json`]
//! module.
//!
//! ```
//! use json_graphql_query::*;
//!
//! let query = QueryNode::new().field(
//!     "query",
//!     QueryNode::new().field(
//!         "Posts",
//!         QueryNode::new()
//!             .argument("where", ObjectValue::new().field("id", 1))
//!             .select("id")
//!             .select("title"),
//!     ),
//! );
//!
//! let output = compile(&query, &Options::default()).unwrap();
//! assert_eq!(output, "query { Posts (where: {id: 1}) { id title } }");
//! ```
//!
//! The crate does not parse GraphQL, validate queries against a schema, or send them anywhere.
//!
//! [A good place to start learning more about this crate is the `query` module...](query)

pub mod error;
pub mod query;

pub use bumpalo;
pub use query::*;

#[cfg(feature = "json")]
pub mod json;
