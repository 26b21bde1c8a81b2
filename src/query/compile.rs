use super::{node::QueryNode, render::render, walker::walk, walker::QueryContext};
use crate::error::{Error, ErrorType, Result};

/// Options that control how a query tree is compiled.
///
/// With the `json` feature enabled this can be deserialized from JSON configuration, e.g.
/// `{ "pretty": true, "ignoreFields": ["__typename"] }`, where every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Print one field per line, indented by four spaces per level, instead of a single line.
    pub pretty: bool,
    /// Field names that are never selected, at any level of the query tree.
    pub ignore_fields: Vec<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the output is indented over multiple lines.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Add a field name that's skipped at every level.
    pub fn with_ignored_field<S: Into<String>>(mut self, name: S) -> Self {
        self.ignore_fields.push(name.into());
        self
    }
}

/// Compile a query tree into GraphQL Query Language.
///
/// Only the root's fields are printed, so operations are written as a root with a single
/// `query`, `mutation`, or `subscription` field. Fails when the root carries no data at all.
pub fn compile(query: &QueryNode, options: &Options) -> Result<String> {
    if query.is_empty() {
        return Err(Error::new("query object has no data", ErrorType::InvalidInput));
    }
    compile_unchecked(query, options)
}

/// Compile a query tree without checking whether its root carries any data.
pub(crate) fn compile_unchecked(query: &QueryNode, options: &Options) -> Result<String> {
    log::debug!(
        "Compiling query with {} root fields (pretty: {}, ignored: {:?})",
        query.fields.len(),
        options.pretty,
        options.ignore_fields
    );
    let ctx = QueryContext::new();
    let lines = walk(&ctx, query, options.ignore_fields.as_slice())?;
    Ok(render(&lines, options.pretty))
}

impl QueryNode {
    /// Compile this node as the root of a query tree. See [`compile`].
    #[inline]
    pub fn compile(&self, options: &Options) -> Result<String> {
        compile(self, options)
    }
}
