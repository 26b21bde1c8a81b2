/// Node of a variable reference value.
///
/// Variables are printed as their name prefixed with a `$` sign and are never quoted, e.g. `$id`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Variable { name: name.into() }
    }
}

/// Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`", and are printed
/// verbatim without quotes.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct EnumValue {
    pub value: String,
}

impl EnumValue {
    pub fn new<S: Into<String>>(value: S) -> Self {
        EnumValue {
            value: value.into(),
        }
    }
}

/// Possible input values that are passed to fields and directives as arguments.
///
/// Scalars print as JSON literals, while [`EnumValue`]s and [`Variable`]s print unquoted.
/// Object keys are never quoted.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Variable(Variable),
    Enum(EnumValue),
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    List(ListValue),
    Object(ObjectValue),
    /// Representing JSON-like `null` values
    Null,
}

impl Value {
    /// Create an enum literal value.
    pub fn enumeration<S: Into<String>>(value: S) -> Self {
        Value::Enum(EnumValue::new(value))
    }

    /// Create a variable reference value.
    pub fn variable<S: Into<String>>(name: S) -> Self {
        Value::Variable(Variable::new(name))
    }

    /// Whether a value selects a field when it's used in a field's position.
    ///
    /// Follows JavaScript truthiness: `false`, `0`, `NaN`, `""`, and `null` are falsy, and lists,
    /// objects, enums, and variables are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(value) => *value,
            Value::Int(value) => *value != 0,
            Value::Float(value) => *value != 0.0 && !value.is_nan(),
            Value::String(value) => !value.is_empty(),
            Value::List(_) | Value::Object(_) | Value::Enum(_) | Value::Variable(_) => true,
        }
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Value::Enum(value)
    }
}

impl From<Variable> for Value {
    fn from(variable: Variable) -> Self {
        Value::Variable(variable)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(ListValue {
            children: values.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A List of values, printed as `[a, b]`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ListValue {
    pub children: Vec<Value>,
}

impl ListValue {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A field of an Object value.
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}

/// An Object value, which is an ordered list of Object fields printed as `{a: 1, b: 2}`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ObjectValue {
    pub children: Vec<ObjectField>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a field to the object, keeping insertion order.
    pub fn field<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.children.push(ObjectField {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// An Argument, which carries a name and a value.
#[derive(Debug, PartialEq, Clone)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// An ordered list of Arguments, which are similar to parameterized inputs to a function.
///
/// An empty list is still printed as `()` when it's attached to a field.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Arguments {
    pub children: Vec<Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether this list contains any arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append an argument, keeping insertion order.
    pub fn argument<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.children.push(Argument {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// A variable declaration, e.g. `$id: ID!`.
///
/// The type is a raw string and is printed as-is.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VariableDefinition {
    pub name: String,
    pub of_type: String,
}

/// An ordered list of variable declarations of an operation.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct VariableDefinitions {
    pub children: Vec<VariableDefinition>,
}

impl VariableDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether this list contains any variable declarations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a variable declaration, keeping insertion order.
    pub fn variable<N: Into<String>, T: Into<String>>(mut self, name: N, of_type: T) -> Self {
        self.children.push(VariableDefinition {
            name: name.into(),
            of_type: of_type.into(),
        });
        self
    }
}

/// A directive annotating a field, e.g. `@include(if: $withFriends)`.
///
/// A directive without arguments is printed as its bare name. A field may carry at most one
/// directive.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive {
    pub name: String,
    pub arguments: Option<Arguments>,
}

impl Directive {
    /// Create a directive without arguments.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Directive {
            name: name.into(),
            arguments: None,
        }
    }

    /// Create a directive with a list of arguments.
    pub fn with_arguments<S: Into<String>>(name: S, arguments: Arguments) -> Self {
        Directive {
            name: name.into(),
            arguments: Some(arguments),
        }
    }
}

/// An inline fragment selecting fields conditionally on a type, e.g. `... on User { id }`.
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment {
    pub type_condition: String,
    pub selection: QueryNode,
}

/// The value a [Field] is mapped to in its parent [QueryNode].
#[derive(Debug, PartialEq, Clone)]
pub enum FieldValue {
    /// A scalar flag which selects the field only when it's truthy.
    Leaf(Value),
    /// A nested node carrying the field's own selection and control data.
    Node(QueryNode),
}

impl From<QueryNode> for FieldValue {
    fn from(node: QueryNode) -> Self {
        FieldValue::Node(node)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Leaf(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Leaf(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Leaf(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Leaf(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Leaf(value.into())
    }
}

/// A named entry of a [QueryNode].
#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// One level of a query tree: the fields selected at this level plus the control data that
/// applies to the field this node is mapped to.
///
/// Fields are kept in insertion order, which is the order they're printed in. The control data
/// (`arguments`, `alias`, `alias_for`, `variables`, `directive`, `inline_fragments`) is never
/// selected as a field. When `variables` is set, `arguments` and `directive` aren't printed.
///
/// ```
/// use json_graphql_query::*;
///
/// let query = QueryNode::new().field(
///     "query",
///     QueryNode::new().field(
///         "user",
///         QueryNode::new().argument("id", Value::variable("id")).select("name"),
///     ),
/// );
/// let output = compile(&query, &Options::default()).unwrap();
/// assert_eq!(output, "query { user (id: $id) { name } }");
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct QueryNode {
    pub fields: Vec<Field>,
    pub arguments: Option<Arguments>,
    /// Deprecated alias which wraps the whole printed field, e.g. `alias: field(arg: 1)`.
    /// Prefer [`QueryNode::alias_for`].
    pub alias: Option<String>,
    pub alias_for: Option<String>,
    pub variables: Option<VariableDefinitions>,
    pub directive: Option<Directive>,
    pub inline_fragments: Option<Vec<InlineFragment>>,
}

impl QueryNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether this node carries neither fields nor any control data.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.arguments.is_none()
            && self.alias.is_none()
            && self.alias_for.is_none()
            && self.variables.is_none()
            && self.directive.is_none()
            && self.inline_fragments.is_none()
    }

    /// Append a field mapped to a leaf value or a nested node.
    pub fn field<S: Into<String>, V: Into<FieldValue>>(mut self, name: S, value: V) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a field that's selected without a sub-selection.
    pub fn select<S: Into<String>>(self, name: S) -> Self {
        self.field(name, true)
    }

    /// Append an argument to this node's field.
    pub fn argument<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        let arguments = self.arguments.take().unwrap_or_default();
        self.arguments = Some(arguments.argument(name, value));
        self
    }

    /// Replace this node's field's arguments.
    pub fn arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Set the deprecated alias, which wraps the printed field.
    pub fn alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Use the node's key as an alias for the field named `name`.
    pub fn alias_for<S: Into<String>>(mut self, name: S) -> Self {
        self.alias_for = Some(name.into());
        self
    }

    /// Append a variable declaration, e.g. on a `query` or `mutation` node.
    pub fn variable<N: Into<String>, T: Into<String>>(mut self, name: N, of_type: T) -> Self {
        let variables = self.variables.take().unwrap_or_default();
        self.variables = Some(variables.variable(name, of_type));
        self
    }

    /// Set this node's field's directive, replacing any previous one.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directive = Some(directive);
        self
    }

    /// Append an inline fragment on `type_condition` with the given selection.
    pub fn on<S: Into<String>>(mut self, type_condition: S, selection: QueryNode) -> Self {
        self.inline_fragments
            .get_or_insert_with(Vec::new)
            .push(InlineFragment {
                type_condition: type_condition.into(),
                selection,
            });
        self
    }
}
