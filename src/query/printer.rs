use super::node::*;
use std::num::NonZeroI32;
use std::{fmt, fmt::Write};

/// Trait for printing query values and argument lists to a new String allocated on the heap.
///
/// This is implemented by every input value and by the lists that are attached to fields:
/// [`Arguments`], [`VariableDefinitions`], and [`Directive`]. Lists are printed without their
/// surrounding parentheses, since the tree walker decides how they're attached to a field.
///
/// For convience when debugging, nodes that implement `PrintNode` also automatically
/// implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write a node to a buffer implementing the [Write] trait.
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result;

    /// Print a node to source text as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(&mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(f)
    }
}

impl fmt::Display for Value {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(f)
    }
}

impl PrintNode for Variable {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl PrintNode for EnumValue {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(&self.value)
    }
}

impl PrintNode for Value {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Variable(value) => value.write_to_buffer(buffer),
            Value::Enum(value) => value.write_to_buffer(buffer),
            Value::String(value) => write_string(value, buffer),
            Value::Int(value) => write!(buffer, "{}", value),
            Value::Float(value) => write_float(*value, buffer),
            Value::Boolean(true) => buffer.write_str("true"),
            Value::Boolean(false) => buffer.write_str("false"),
            Value::List(value) => value.write_to_buffer(buffer),
            Value::Object(value) => value.write_to_buffer(buffer),
            Value::Null => buffer.write_str("null"),
        }
    }
}

impl PrintNode for ObjectField {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(buffer)
    }
}

impl PrintNode for ObjectValue {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{")?;
        let mut first = true;
        for field in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            field.write_to_buffer(buffer)?;
        }
        buffer.write_str("}")
    }
}

impl PrintNode for ListValue {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("[")?;
        let mut first = true;
        for value in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            value.write_to_buffer(buffer)?;
        }
        buffer.write_str("]")
    }
}

impl PrintNode for Argument {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(buffer)
    }
}

impl PrintNode for Arguments {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for argument in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            argument.write_to_buffer(buffer)?;
        }
        Ok(())
    }
}

impl PrintNode for VariableDefinition {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}: {}", self.name, self.of_type)
    }
}

impl PrintNode for VariableDefinitions {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for var_definition in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            var_definition.write_to_buffer(buffer)?;
        }
        Ok(())
    }
}

/// Directives are printed without their `@` sign. Argument values have all double quotes
/// stripped, so string arguments are printed unquoted.
impl PrintNode for Directive {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(&self.name)?;
        if let Some(arguments) = &self.arguments {
            buffer.write_str("(")?;
            let mut value = String::new();
            let mut first = true;
            for argument in arguments.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                value.clear();
                argument.value.write_to_buffer(&mut value)?;
                write!(buffer, "{}: {}", argument.name, value.replace('"', ""))?;
            }
            buffer.write_str(")")?;
        }
        Ok(())
    }
}

/// Writes a string as a JSON string literal.
fn write_string(value: &str, buffer: &mut dyn Write) -> fmt::Result {
    buffer.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => buffer.write_str("\\\"")?,
            '\\' => buffer.write_str(r"\\")?,
            '\u{0008}' => buffer.write_str(r"\b")?,
            '\u{000C}' => buffer.write_str(r"\f")?,
            '\n' => buffer.write_str(r"\n")?,
            '\r' => buffer.write_str(r"\r")?,
            '\t' => buffer.write_str(r"\t")?,
            '\u{0000}'..='\u{001F}' => write!(buffer, "\\u{:04x}", c as u32)?,
            _ => buffer.write_char(c)?,
        };
    }
    buffer.write_char('"')
}

/// JSON number syntax: exponents always carry a sign, as in `1.5e+25`.
const JSON_NUMBER: u128 = lexical_core::NumberFormatBuilder::new()
    .required_exponent_sign(true)
    .build();

/// Writes a float the way `JSON.stringify` does. Integral values drop their fraction, exponents
/// are used below `1e-6` and from `1e21` on, and non-finite values become `null`.
fn write_float(value: f64, buffer: &mut dyn Write) -> fmt::Result {
    if !value.is_finite() {
        return buffer.write_str("null");
    } else if value == 0.0 {
        return buffer.write_char('0');
    }
    let options = lexical_core::WriteFloatOptions::builder()
        .trim_floats(true)
        .negative_exponent_break(NonZeroI32::new(-6))
        .positive_exponent_break(NonZeroI32::new(20))
        .build()
        .map_err(|_| fmt::Error)?;
    let mut buf = [b'0'; lexical_core::BUFFER_SIZE];
    let digits = lexical_core::write_with_options::<_, JSON_NUMBER>(value, &mut buf, &options);
    buffer.write_str(std::str::from_utf8(digits).map_err(|_| fmt::Error)?)
}
