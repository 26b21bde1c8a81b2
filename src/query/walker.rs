use super::node::*;
use super::printer::PrintNode;
use bumpalo::collections::{String as BumpString, Vec as BumpVec};
use hashbrown::{hash_map::DefaultHashBuilder, HashSet};
use std::{fmt, fmt::Write};

/// A context for a single compilation which holds an arena allocator.
///
/// The lines a query tree is walked into and the set of ignored field names are allocated onto
/// this arena. It represents the lifetime of those lines, and once the lines have been rendered
/// the entire allocated memory can be dropped all at once. Hence it's inadvisable to reuse the
/// context across many compilations.
pub struct QueryContext {
    /// An arena allocator that holds the memory allocated for the context's lifetime
    pub arena: bumpalo::Bump,
}

impl QueryContext {
    /// Create a new query context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        QueryContext { arena }
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A single line of output and the level of nesting it's printed at.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    pub level: usize,
}

/// The ordered lines a query tree is walked into.
pub type Lines<'a> = BumpVec<'a, Line<'a>>;

/// Set of field names that are skipped at every level of a query tree.
pub type IgnoredFields<'a> = HashSet<&'a str, DefaultHashBuilder, &'a bumpalo::Bump>;

/// Walk the fields of a query tree into a flat list of [Line]s, starting at level `0`.
///
/// The root node's own control data isn't printed, only its fields are. Any field whose name is
/// in `ignore_fields` is skipped, including fields of nested nodes and inline fragments.
pub fn walk<'a, S: AsRef<str>>(
    ctx: &'a QueryContext,
    root: &QueryNode,
    ignore_fields: &[S],
) -> Result<Lines<'a>, fmt::Error> {
    let mut ignored = HashSet::new_in(&ctx.arena);
    for name in ignore_fields.iter() {
        ignored.insert(ctx.alloc_str(name.as_ref()));
    }
    let mut walker = Walker {
        ctx,
        ignored,
        lines: BumpVec::new_in(&ctx.arena),
    };
    walker.visit(root, 0)?;
    Ok(walker.lines)
}

struct Walker<'a> {
    ctx: &'a QueryContext,
    ignored: IgnoredFields<'a>,
    lines: Lines<'a>,
}

impl<'a> Walker<'a> {
    #[inline]
    fn push(&mut self, text: &'a str, level: usize) {
        log::trace!("{:indent$}{}", "", text, indent = level * 2);
        self.lines.push(Line { text, level });
    }

    /// Counts the fields of a node that aren't ignored.
    #[inline]
    fn field_count(&self, node: &QueryNode) -> usize {
        node.fields
            .iter()
            .filter(|field| !self.ignored.contains(field.name.as_str()))
            .count()
    }

    fn visit(&mut self, node: &QueryNode, level: usize) -> fmt::Result {
        for field in node.fields.iter() {
            if self.ignored.contains(field.name.as_str()) {
                continue;
            }
            match &field.value {
                FieldValue::Leaf(value) => {
                    if value.is_truthy() {
                        let ctx = self.ctx;
                        let text = ctx.alloc_str(&field.name);
                        self.push(text, level);
                    }
                }
                FieldValue::Node(child) => self.visit_field(&field.name, child, level)?,
            }
        }
        Ok(())
    }

    fn visit_field(&mut self, name: &str, node: &QueryNode, level: usize) -> fmt::Result {
        let ctx = self.ctx;
        let opens_selection = self.field_count(node) > 0 || node.inline_fragments.is_some();

        let mut token = self.field_token(name, node)?;
        if opens_selection {
            token.push_str(" {");
        }
        self.push(token.into_bump_str(), level);

        self.visit(node, level + 1)?;

        if let Some(fragments) = &node.inline_fragments {
            for fragment in fragments.iter() {
                let mut opening = BumpString::new_in(&ctx.arena);
                write!(opening, "... on {} {{", fragment.type_condition)?;
                self.push(opening.into_bump_str(), level + 1);
                self.visit(&fragment.selection, level + 2)?;
                self.push("}", level + 1);
            }
        }

        if opens_selection {
            self.push("}", level);
        }
        Ok(())
    }

    /// Builds a field's name, alias, and attached variables, directive, or arguments.
    fn field_token(&self, name: &str, node: &QueryNode) -> Result<BumpString<'a>, fmt::Error> {
        let ctx = self.ctx;
        let mut token = BumpString::new_in(&ctx.arena);
        token.push_str(name);

        if let Some(alias_for) = &node.alias_for {
            write!(token, ": {}", alias_for)?;
        }

        if let Some(variables) = &node.variables {
            token.push_str(" (");
            variables.write_to_buffer(&mut token)?;
            token.push(')');
        } else if node.arguments.is_some() || node.directive.is_some() {
            token.push(' ');
            if let Some(directive) = &node.directive {
                token.push('@');
                directive.write_to_buffer(&mut token)?;
            }
            if let Some(arguments) = &node.arguments {
                if node.directive.is_some() {
                    token.push(' ');
                }
                token.push('(');
                arguments.write_to_buffer(&mut token)?;
                token.push(')');
            }
        }

        if let Some(alias) = &node.alias {
            let mut aliased =
                BumpString::with_capacity_in(alias.len() + token.len() + 2, &ctx.arena);
            write!(aliased, "{}: {}", alias, token)?;
            return Ok(aliased);
        }
        Ok(token)
    }
}
