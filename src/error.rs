//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's returned by [`compile`](crate::compile)
//! and by the JSON conversion utilities.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For directive errors, for
/// instance, the context string echoes the offending directive object.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of failure an [Error] represents.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// The query root is missing, isn't an object, or carries no data at all.
    InvalidInput,
    /// A single field declared more than one directive.
    TooManyDirectives,
    /// A directive's value was neither a boolean nor an object.
    UnsupportedDirectiveValue,
    /// Writing a serialized value to its output buffer failed.
    Serialization,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(message: S, context: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the context of the current error, if any was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the kind of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::InvalidInput => format!("Invalid Input: {}", self.message),
            ErrorType::TooManyDirectives | ErrorType::UnsupportedDirectiveValue => {
                format!("Directive Error: {}", self.message)
            }
            ErrorType::Serialization => format!("Serialization Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::new("Failed to write query output", ErrorType::Serialization)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}
