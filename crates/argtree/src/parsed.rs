use std::fmt;

use crate::spec::{ArgumentSpec, CommandSpec, OptionSpec};

/// A positional value, coerced to its [`ValueType`](crate::ValueType).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(it) => Some(it.as_str()),
            _ => None,
        }
    }

    pub fn as_unsigned(&self) -> Option<u64> {
        match *self {
            Value::Unsigned(it) => Some(it),
            _ => None,
        }
    }

    pub fn as_signed(&self) -> Option<i64> {
        match *self {
            Value::Signed(it) => Some(it),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(it) => fmt::Display::fmt(it, f),
            Value::Unsigned(it) => fmt::Display::fmt(it, f),
            Value::Signed(it) => fmt::Display::fmt(it, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgument<'s> {
    pub spec: &'s ArgumentSpec,
    pub value: Value,
}

/// A supplied option; `value` is `None` for flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption<'s> {
    pub spec: &'s OptionSpec,
    pub value: Option<String>,
}

/// A command line accepted by a [`CommandSpec`].
///
/// There is exactly one argument per [`ArgumentSpec`], in spec order, and at
/// most one option per [`OptionSpec`], in the order they were typed.
#[derive(Debug)]
pub struct ParsedCommand<'s, C = ()> {
    command: &'s CommandSpec<C>,
    arguments: Vec<ParsedArgument<'s>>,
    options: Vec<ParsedOption<'s>>,
}

impl<'s, C> ParsedCommand<'s, C> {
    pub(crate) fn new(
        command: &'s CommandSpec<C>,
        arguments: Vec<ParsedArgument<'s>>,
        options: Vec<ParsedOption<'s>>,
    ) -> Self {
        Self { command, arguments, options }
    }

    pub fn command(&self) -> &'s CommandSpec<C> {
        self.command
    }

    pub fn arguments(&self) -> &[ParsedArgument<'s>] {
        &self.arguments
    }

    pub fn options(&self) -> &[ParsedOption<'s>] {
        &self.options
    }

    pub fn argument(&self, name: &str) -> Option<&ParsedArgument<'s>> {
        self.arguments.iter().find(|it| it.spec.name == name)
    }

    pub fn option(&self, long_name: &str) -> Option<&ParsedOption<'s>> {
        self.options.iter().find(|it| it.spec.long_name == long_name)
    }

    pub fn is_present(&self, long_name: &str) -> bool {
        self.option(long_name).is_some()
    }

    /// Value of a non-flag option, if it was supplied.
    pub fn value_of(&self, long_name: &str) -> Option<&str> {
        self.option(long_name)?.value.as_deref()
    }
}

pub fn extract_argument<'p, 's, C>(
    parsed: &'p ParsedCommand<'s, C>,
    name: &str,
) -> Option<&'p ParsedArgument<'s>> {
    parsed.argument(name)
}

pub fn extract_option<'p, 's, C>(
    parsed: &'p ParsedCommand<'s, C>,
    long_name: &str,
) -> Option<&'p ParsedOption<'s>> {
    parsed.option(long_name)
}
