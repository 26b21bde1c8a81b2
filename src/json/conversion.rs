use hashbrown::HashSet;
use serde_json::{Map as JSMap, Value as JSValue};

use crate::error::{Error, ErrorType, Result};
use crate::query::{compile_unchecked, *};

/// Keys of a JSON query object that are never selected as fields.
pub const CONTROL_KEYS: [&str; 7] = [
    "__args",
    "__alias",
    "__aliasFor",
    "__variables",
    "__directives",
    "__on",
    "__fragmentName",
];

/// Compile a JSON query object into GraphQL Query Language.
///
/// Fails when the input isn't an object or is an empty object, and when a printed field's
/// directives or inline fragments are malformed. Fields in `options.ignore_fields` are skipped
/// before they're converted.
pub fn compile_json(query: &JSValue, options: &Options) -> Result<String> {
    let node = query_from_value_ignoring(query, options.ignore_fields.as_slice())?;
    compile_unchecked(&node, options)
}

/// Convert a JSON query object to a [QueryNode].
pub fn query_from_value(query: &JSValue) -> Result<QueryNode> {
    query_from_value_ignoring(query, &[] as &[&str])
}

/// Convert a JSON query object to a [QueryNode], leaving out fields named in `ignore_fields` at
/// every level.
///
/// The root object's own control keys are dropped since they're never printed.
pub fn query_from_value_ignoring<S: AsRef<str>>(
    query: &JSValue,
    ignore_fields: &[S],
) -> Result<QueryNode> {
    match query {
        JSValue::Object(map) if map.is_empty() => Err(Error::new(
            "query object has no data",
            ErrorType::InvalidInput,
        )),
        JSValue::Object(map) => {
            let converter = Converter {
                ignored: ignore_fields.iter().map(|field| field.as_ref()).collect(),
            };
            converter.selection(map)
        }
        _ => Err(Error::new(
            "query object not specified",
            ErrorType::InvalidInput,
        )),
    }
}

impl TryFrom<&JSValue> for QueryNode {
    type Error = Error;

    fn try_from(value: &JSValue) -> Result<Self> {
        query_from_value(value)
    }
}

/// Convert a JSON value to an argument [Value] without casting it to a type.
///
/// Strings are always converted to string values. Enum literals and variable references have no
/// JSON representation and need to be added to a converted tree as [`EnumValue`]s and
/// [`Variable`]s.
pub fn value_from_json(value: &JSValue) -> Value {
    match value {
        JSValue::Array(list) => Value::List(ListValue {
            children: list.iter().map(value_from_json).collect(),
        }),
        JSValue::Object(map) => Value::Object(ObjectValue {
            children: map
                .iter()
                .map(|(key, value)| ObjectField {
                    name: key.to_string(),
                    value: value_from_json(value),
                })
                .collect(),
        }),
        JSValue::Number(num) => num
            .as_i64()
            .map(Value::Int)
            .unwrap_or_else(|| Value::Float(num.as_f64().unwrap_or(0.0))),
        JSValue::Bool(x) => Value::Boolean(*x),
        JSValue::String(str) => Value::String(str.to_string()),
        JSValue::Null => Value::Null,
    }
}

impl From<&JSValue> for Value {
    fn from(value: &JSValue) -> Self {
        value_from_json(value)
    }
}

struct Converter<'a> {
    ignored: HashSet<&'a str>,
}

impl<'a> Converter<'a> {
    /// Converts the selectable fields of an object. Control keys and ignored names are skipped.
    fn selection(&self, map: &JSMap<String, JSValue>) -> Result<QueryNode> {
        let mut node = QueryNode::new();
        for (key, value) in map.iter() {
            let key = key.as_str();
            if CONTROL_KEYS.contains(&key) || self.ignored.contains(key) {
                continue;
            }
            node = match value {
                JSValue::Object(child) => node.field(key, self.field_node(child, key)?),
                value => node.field(key, value_from_json(value)),
            };
        }
        Ok(node)
    }

    /// Converts the object the field `name` is mapped to, along with its control data.
    ///
    /// Directives are only checked when they can be printed, which isn't the case when the same
    /// object declares `__variables`.
    fn field_node(&self, map: &JSMap<String, JSValue>, name: &str) -> Result<QueryNode> {
        let mut node = self.selection(map)?;
        let has_variables = matches!(map.get("__variables"), Some(JSValue::Object(_)));
        for (key, value) in map.iter() {
            match (key.as_str(), value) {
                ("__args", JSValue::Object(args)) => {
                    node.arguments = Some(arguments_from_map(args))
                }
                ("__alias", JSValue::String(alias)) => node.alias = Some(alias.to_string()),
                ("__aliasFor", JSValue::String(alias_for)) => {
                    node.alias_for = Some(alias_for.to_string())
                }
                ("__variables", JSValue::Object(vars)) => {
                    node.variables = Some(variables_from_map(vars))
                }
                ("__directives", JSValue::Object(dirs)) if !has_variables => {
                    node.directive = directive_from_map(dirs, name)?
                }
                ("__on", JSValue::Object(fragment)) => {
                    node.inline_fragments = Some(vec![self.inline_fragment(fragment)?])
                }
                ("__on", JSValue::Array(fragments)) => {
                    let fragments = fragments
                        .iter()
                        .map(|fragment| match fragment {
                            JSValue::Object(fragment) => self.inline_fragment(fragment),
                            value => Err(Error::new(
                                format!(
                                    "Inline fragments must be objects, got: {}",
                                    type_name(value)
                                ),
                                ErrorType::InvalidInput,
                            )),
                        })
                        .collect::<Result<Vec<_>>>()?;
                    node.inline_fragments = Some(fragments);
                }
                _ => {}
            }
        }
        Ok(node)
    }

    /// A fragment's own control keys other than `__fragmentName` are never printed.
    fn inline_fragment(&self, map: &JSMap<String, JSValue>) -> Result<InlineFragment> {
        match map.get("__fragmentName") {
            Some(JSValue::String(type_condition)) => Ok(InlineFragment {
                type_condition: type_condition.to_string(),
                selection: self.selection(map)?,
            }),
            _ => Err(Error::new(
                "Inline fragments require a __fragmentName string",
                ErrorType::InvalidInput,
            )),
        }
    }
}

fn arguments_from_map(map: &JSMap<String, JSValue>) -> Arguments {
    Arguments {
        children: map
            .iter()
            .map(|(name, value)| Argument {
                name: name.to_string(),
                value: value_from_json(value),
            })
            .collect(),
    }
}

/// Variable types are used verbatim. Non-string types are printed as JSON.
fn variables_from_map(map: &JSMap<String, JSValue>) -> VariableDefinitions {
    VariableDefinitions {
        children: map
            .iter()
            .map(|(name, of_type)| VariableDefinition {
                name: name.to_string(),
                of_type: match of_type {
                    JSValue::String(of_type) => of_type.to_string(),
                    of_type => of_type.to_string(),
                },
            })
            .collect(),
    }
}

fn directive_from_map(map: &JSMap<String, JSValue>, field: &str) -> Result<Option<Directive>> {
    if map.len() > 1 {
        return Err(Error::new(
            format!(
                "Too many directives. The field '{}' had {} directives, \
                 but only 1 directive per field is supported.",
                field,
                map.len()
            ),
            ErrorType::TooManyDirectives,
        ));
    }
    match map.iter().next() {
        None => Ok(None),
        Some((name, JSValue::Bool(_))) => Ok(Some(Directive::new(name.as_str()))),
        Some((name, JSValue::Object(args))) => Ok(Some(Directive::with_arguments(
            name.as_str(),
            arguments_from_map(args),
        ))),
        Some((_, value)) => Err(Error::new_with_context(
            format!(
                "Unsupported type for directive: {}. Types allowed: object, boolean.",
                type_name(value)
            ),
            format!("Offending object: {}", JSValue::Object(map.clone())),
            ErrorType::UnsupportedDirectiveValue,
        )),
    }
}

fn type_name(value: &JSValue) -> &'static str {
    match value {
        JSValue::Null => "null",
        JSValue::Bool(_) => "boolean",
        JSValue::Number(_) => "number",
        JSValue::String(_) => "string",
        JSValue::Array(_) => "array",
        JSValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use serde_json::json;

    fn compact(query: JSValue) -> String {
        compile_json(&query, &Options::default()).unwrap()
    }

    #[test]
    fn simple_query() {
        let query = json!({
            "query": {
                "Posts": {
                    "id": true,
                    "title": true,
                    "post_date": true
                }
            }
        });
        assert_eq!(compact(query), "query { Posts { id title post_date } }");
    }

    #[test]
    fn pretty_query() {
        let query = json!({
            "query": {
                "Posts": {
                    "__args": { "orderBy": "post_date", "userId": 12 },
                    "id": true,
                    "comments": { "id": true }
                }
            }
        });
        let options = Options::new().with_pretty(true);
        let expected = indoc! {r#"
            query {
                Posts (orderBy: "post_date", userId: 12) {
                    id
                    comments {
                        id
                    }
                }
            }"#};
        assert_eq!(compile_json(&query, &options).unwrap(), expected);
    }

    #[test]
    fn falsy_leaves() {
        assert_eq!(
            compact(json!({ "a": 0, "b": false, "c": "", "d": 1, "e": null })),
            "d"
        );
    }

    #[test]
    fn arguments() {
        let query = json!({
            "query": {
                "Posts": {
                    "__args": {
                        "a": 1,
                        "b": "x",
                        "c": [1, 2],
                        "d": { "e": true },
                        "f": 2.5,
                        "g": null
                    },
                    "id": true
                }
            }
        });
        assert_eq!(
            compact(query),
            r#"query { Posts (a: 1, b: "x", c: [1, 2], d: {e: true}, f: 2.5, g: null) { id } }"#
        );
    }

    #[test]
    fn empty_arguments() {
        assert_eq!(
            compact(json!({ "query": { "Posts": { "__args": {}, "id": true } } })),
            "query { Posts () { id } }"
        );
    }

    #[test]
    fn variables() {
        let query = json!({
            "query": {
                "__variables": { "variable1": "String!", "variableWithDefault": "String = \"default_value\"" },
                "Posts": {
                    "__args": { "arg1": 20 },
                    "id": true
                }
            }
        });
        assert_eq!(
            compact(query),
            r#"query ($variable1: String!, $variableWithDefault: String = "default_value") { Posts (arg1: 20) { id } }"#
        );
    }

    #[test]
    fn variables_override_arguments() {
        let query = json!({
            "mutation": {
                "__variables": { "id": "ID!" },
                "__args": { "ignored": true },
                "__directives": { "ignored": true },
                "deleteUser": { "id": true }
            }
        });
        assert_eq!(compact(query), "mutation ($id: ID!) { deleteUser { id } }");
    }

    #[test]
    fn aliases() {
        let query = json!({ "users": { "__aliasFor": "people", "id": true } });
        assert_eq!(compact(query), "users: people { id }");

        let query = json!({
            "query": {
                "Posts": { "__alias": "allPosts", "__args": { "first": 2 }, "id": true }
            }
        });
        assert_eq!(compact(query), "query { allPosts: Posts (first: 2) { id } }");
    }

    #[test]
    fn directives() {
        let query = json!({
            "query": {
                "Posts": {
                    "__directives": { "include": { "if": true } },
                    "id": true
                }
            }
        });
        assert_eq!(compact(query), "query { Posts @include(if: true) { id } }");

        let query = json!({
            "query": {
                "Posts": {
                    "__args": { "arg1": "value1" },
                    "__directives": { "cached": { "ttl": "1h" } },
                    "id": true
                }
            }
        });
        assert_eq!(
            compact(query),
            r#"query { Posts @cached(ttl: 1h) (arg1: "value1") { id } }"#
        );

        let query = json!({ "query": { "Posts": { "__directives": { "client": false } } } });
        assert_eq!(compact(query), "query { Posts @client }");

        let query = json!({ "query": { "Posts": { "__directives": {}, "id": true } } });
        assert_eq!(compact(query), "query { Posts { id } }");
    }

    #[test]
    fn too_many_directives() {
        let query = json!({
            "query": {
                "Posts": {
                    "__directives": { "include": { "if": true }, "skip": { "if": false } },
                    "id": true
                }
            }
        });
        let error = compile_json(&query, &Options::default()).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::TooManyDirectives);
        assert!(error.message().contains("'Posts' had 2 directives"));
    }

    #[test]
    fn directives_next_to_variables_are_not_checked() {
        let query = json!({
            "query": {
                "__variables": { "id": "ID!" },
                "__directives": { "include": true, "skip": true },
                "x": true
            }
        });
        assert_eq!(compact(query), "query ($id: ID!) { x }");

        let query = json!({
            "query": {
                "__variables": { "id": "ID!" },
                "__directives": { "include": "yes" },
                "x": true
            }
        });
        assert_eq!(compact(query), "query ($id: ID!) { x }");
    }

    #[test]
    fn ignored_fields_are_not_checked() {
        let query = json!({
            "query": {
                "secret": { "__directives": { "include": 1 }, "id": true },
                "x": true
            }
        });
        let options = Options::new().with_ignored_field("secret");
        assert_eq!(compile_json(&query, &options).unwrap(), "query { x }");

        let error = compile_json(&query, &Options::default()).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::UnsupportedDirectiveValue);
    }

    #[test]
    fn root_control_keys_are_not_checked() {
        let query = json!({
            "__directives": { "include": true, "skip": true },
            "__on": [true],
            "__args": { "id": 1 },
            "query": { "x": true }
        });
        assert_eq!(compact(query), "query { x }");

        let node = QueryNode::try_from(&json!({ "__args": { "id": 1 }, "x": true })).unwrap();
        assert_eq!(node.arguments, None);
    }

    #[test]
    fn fragment_control_keys_are_not_checked() {
        let query = json!({
            "query": {
                "Posts": {
                    "__on": {
                        "__fragmentName": "Post",
                        "__directives": { "include": true, "skip": true },
                        "__on": { "id": true },
                        "title": true
                    }
                }
            }
        });
        assert_eq!(compact(query), "query { Posts { ... on Post { title } } }");
    }

    #[test]
    fn unsupported_directive_value() {
        let query = json!({ "query": { "Posts": { "__directives": { "skip": "yes" } } } });
        let error = compile_json(&query, &Options::default()).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::UnsupportedDirectiveValue);
        assert_eq!(
            error.message(),
            "Unsupported type for directive: string. Types allowed: object, boolean."
        );
        assert_eq!(error.context(), Some(r#"Offending object: {"skip":"yes"}"#));
    }

    #[test]
    fn inline_fragments() {
        let query = json!({
            "query": {
                "Posts": {
                    "title": true,
                    "__on": [
                        { "__fragmentName": "ConfigurablePost", "id": true },
                        { "__fragmentName": "UnconfigurablePost", "name": true, "rating": true }
                    ]
                }
            }
        });
        assert_eq!(
            compact(query),
            "query { Posts { title ... on ConfigurablePost { id } ... on UnconfigurablePost { name rating } } }"
        );

        let query = json!({
            "query": {
                "Posts": {
                    "__on": { "__fragmentName": "ConfigurablePost", "id": true }
                }
            }
        });
        assert_eq!(
            compact(query),
            "query { Posts { ... on ConfigurablePost { id } } }"
        );
    }

    #[test]
    fn inline_fragment_without_name() {
        let query = json!({ "query": { "Posts": { "__on": { "id": true } } } });
        let error = compile_json(&query, &Options::default()).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidInput);

        let query = json!({ "query": { "Posts": { "__on": [true] } } });
        let error = compile_json(&query, &Options::default()).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidInput);
    }

    #[test]
    fn ignored_fields() {
        let query = json!({
            "query": {
                "Posts": { "id": true, "__typename": true, "title": true }
            }
        });
        let options: Options = serde_json::from_value(json!({ "ignoreFields": ["__typename"] })).unwrap();
        assert_eq!(
            compile_json(&query, &options).unwrap(),
            "query { Posts { id title } }"
        );
    }

    #[test]
    fn options_from_json() {
        let options: Options = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, Options::default());
        let options: Options =
            serde_json::from_value(json!({ "pretty": true, "ignoreFields": ["a", "b"] })).unwrap();
        assert!(options.pretty);
        assert_eq!(options.ignore_fields, vec!["a", "b"]);
    }

    #[test]
    fn invalid_input() {
        for query in [json!(null), json!({}), json!("query"), json!([1])] {
            let error = compile_json(&query, &Options::default()).unwrap_err();
            assert_eq!(error.error_type(), ErrorType::InvalidInput);
        }
        let error = compile_json(&json!(null), &Options::default()).unwrap_err();
        assert_eq!(error.message(), "query object not specified");
        let error = compile_json(&json!({}), &Options::default()).unwrap_err();
        assert_eq!(error.message(), "query object has no data");
    }

    #[test]
    fn control_keys_only() {
        assert_eq!(compact(json!({ "__fragmentName": "Unused" })), "");
    }

    #[test]
    fn fixture_parses() {
        let query: JSValue =
            serde_json::from_str(include_str!("../../fixture/kitchen_sink.json")).unwrap();
        for pretty in [false, true] {
            let output = compile_json(&query, &Options::new().with_pretty(pretty)).unwrap();
            graphql_parser::parse_query::<&str>(&output).unwrap();
        }
        let output = compact(query);
        assert!(output.starts_with(
            "query ($id: ID!, $first: Int = 10, $withEmail: Boolean!) { viewer: user (id: 1) {"
        ));
        assert!(output.contains("email @include(if: true) avatar (size: 64, formats: [\"png\", \"webp\"])"));
        assert!(!output.contains("nickname"));
    }

    #[test]
    fn values_from_json() {
        assert_eq!(value_from_json(&json!(1)), Value::Int(1));
        assert_eq!(value_from_json(&json!(1.5)), Value::Float(1.5));
        assert_eq!(value_from_json(&json!("a")), Value::from("a"));
        assert_eq!(
            Value::from(&json!({ "b": [true] })).print(),
            "{b: [true]}"
        );
    }

    #[test]
    fn typed_values_in_converted_tree() {
        let query = json!({ "query": { "Posts": { "id": true } } });
        let mut node = QueryNode::try_from(&query).unwrap();
        if let Some(FieldValue::Node(query)) = node.fields.first_mut().map(|field| &mut field.value) {
            if let Some(FieldValue::Node(posts)) = query.fields.first_mut().map(|field| &mut field.value) {
                posts.arguments = Some(
                    Arguments::new()
                        .argument("status", Value::enumeration("PUBLISHED"))
                        .argument("after", Value::variable("cursor")),
                );
            }
        }
        assert_eq!(
            node.compile(&Options::default()).unwrap(),
            "query { Posts (status: PUBLISHED, after: $cursor) { id } }"
        );
    }
}
