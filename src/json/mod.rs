//! # JSON Conversion
//!
//! The `json_graphql_query::json` module converts `serde_json` values into query trees. A JSON
//! query object maps field names to `true`/`false` flags or to nested objects, and uses reserved
//! control keys to attach everything that isn't a field:
//!
//! - `__args`: an object of arguments, e.g. `{ "__args": { "id": 1 } }`
//! - `__aliasFor`: the real field name when the key is used as an alias
//! - `__alias`: a deprecated alias which wraps the printed field
//! - `__variables`: an object of variable names to their types, e.g. `{ "id": "ID!" }`
//! - `__directives`: an object with a single directive mapped to `true` or to its arguments
//! - `__on`: one or a list of inline fragments, each carrying a `__fragmentName`
//!
//! JSON object keys are kept in their source order, which is the order fields are printed in.
//!
//! The module contains a handful of utility functions:
//!
//! - [query_from_value] is used to convert a JSON query object to a [`QueryNode`](crate::QueryNode).
//! - [query_from_value_ignoring] does the same while leaving out a list of field names.
//! - [value_from_json] is used to convert any JSON value to an argument [`Value`](crate::Value).
//! - [compile_json] is used to compile a JSON query object straight to GraphQL.

#[cfg(feature = "json")]
extern crate serde_json;

#[cfg(feature = "json")]
extern crate serde;

mod conversion;

pub use conversion::*;
