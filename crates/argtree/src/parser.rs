use std::ptr;

use crate::{
    classify::{self, Token, TokenKind, Tokens},
    config::Config,
    error::{Error, ErrorKind, Scope},
    parsed::{ParsedArgument, ParsedCommand, ParsedOption, Value},
    resolve,
    spec::{ArgumentSpec, CommandNode, CommandSpec, OptionSpec, ValueType},
    validate, Result,
};

/// Entry point carrying a [`Config`].
///
/// The free functions of the crate root use `Parser::default()`.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parse_command<'s, S, C>(
        &self,
        tokens: &[S],
        command: &'s CommandSpec<C>,
    ) -> Result<'s, ParsedCommand<'s, C>, C>
    where
        S: AsRef<str>,
    {
        self.parse_command_(tokens, command).map_err(|kind| {
            tracing::debug!(error = %kind, "rejected command line");
            Error::scoped(kind, Scope::Command(command))
        })
    }

    pub fn parse_multicommand<'s, S, C>(
        &self,
        tokens: &[S],
        root: &'s CommandNode<C>,
    ) -> Result<'s, ParsedCommand<'s, C>, C>
    where
        S: AsRef<str>,
    {
        classify::check_limits(tokens, &self.config)
            .map_err(|kind| Error::scoped(kind, Scope::Node(root)))?;
        let (consumed, command) = resolve::resolve(tokens, root)?;
        self.parse_command(&tokens[consumed..], command)
    }

    pub fn validate_command<'s, C>(&self, command: &'s CommandSpec<C>) -> Result<'s, (), C> {
        validate::validate_command(command)
    }

    pub fn validate_multicommand<'s, C>(&self, root: &'s CommandNode<C>) -> Result<'s, (), C> {
        validate::validate_multicommand(root)
    }

    fn parse_command_<'s, S, C>(
        &self,
        tokens: &[S],
        command: &'s CommandSpec<C>,
    ) -> std::result::Result<ParsedCommand<'s, C>, ErrorKind>
    where
        S: AsRef<str>,
    {
        classify::check_limits(tokens, &self.config)?;
        let mut p = Tokens::new(classify::classify_all(tokens));

        let (count, max) = (p.markers(), self.config.max_options);
        if count > max {
            return Err(ErrorKind::TooManyOptions { count, max });
        }

        let mut positionals = Vec::new();
        while let Some(token) = p.next_if(TokenKind::Positional) {
            positionals.push(token);
        }
        let expected = command.arguments.len();
        let found = positionals.len();
        if found > expected {
            return Err(ErrorKind::ArgumentExceededSpec { expected, found });
        }
        if found < expected {
            return Err(ErrorKind::ArgumentExpectedInSpec { expected, found });
        }

        // Bound in order of appearance.
        let mut arguments = Vec::with_capacity(expected);
        for (spec, token) in command.arguments.iter().zip(&positionals) {
            arguments.push(ParsedArgument { spec, value: coerce(spec, token.text)? });
        }

        let mut options: Vec<ParsedOption<'s>> = Vec::new();
        let mut pending: Option<&'s OptionSpec> = None;
        while let Some(token) = p.next() {
            if token.kind.is_marker() {
                if let Some(option) = pending {
                    return Err(ErrorKind::OptionValueExpected { option: option.long_name.clone() });
                }
                let option = self.find_option(command, &token)?;
                if options.iter().any(|it| ptr::eq(it.spec, option)) {
                    return Err(ErrorKind::OptionDuplicated { name: option.long_name.clone() });
                }
                if option.is_flag {
                    options.push(ParsedOption { spec: option, value: None });
                } else {
                    pending = Some(option);
                }
            } else {
                let Some(option) = pending.take() else {
                    return Err(ErrorKind::OptionNameExpected { token: token.text.to_string() });
                };
                tracing::trace!(idx = token.idx, option = %option.long_name, "option value");
                options.push(ParsedOption { spec: option, value: Some(token.text.to_string()) });
            }
        }
        if let Some(option) = pending {
            return Err(ErrorKind::OptionValueExpected { option: option.long_name.clone() });
        }

        let missing = command
            .options
            .iter()
            .filter(|spec| spec.required)
            .find(|spec| !options.iter().any(|it| ptr::eq(it.spec, *spec)));
        if let Some(spec) = missing {
            return Err(ErrorKind::OptionNameRequiredInSpec { name: spec.long_name.clone() });
        }

        Ok(ParsedCommand::new(command, arguments, options))
    }

    fn find_option<'s, C>(
        &self,
        command: &'s CommandSpec<C>,
        token: &Token<'_>,
    ) -> std::result::Result<&'s OptionSpec, ErrorKind> {
        let not_found = || ErrorKind::OptionNameNotInSpec { token: token.text.to_string() };

        if token.kind == TokenKind::ShortOption {
            let short = token.text[1..].chars().next().ok_or_else(not_found)?;
            return command.find_short(short).ok_or_else(not_found);
        }

        let name = &token.text[2..];
        if let Some(option) = command.find_long(name) {
            return Ok(option);
        }
        if !self.config.long_prefix_match {
            return Err(not_found());
        }
        let mut candidates = command.options.iter().filter(|it| it.long_name.starts_with(name));
        match (candidates.next(), candidates.next()) {
            (Some(option), None) => Ok(option),
            (Some(_), Some(_)) => {
                Err(ErrorKind::OptionNameAmbiguous { token: token.text.to_string() })
            }
            (None, _) => Err(not_found()),
        }
    }
}

fn coerce(spec: &ArgumentSpec, token: &str) -> std::result::Result<Value, ErrorKind> {
    let invalid =
        || ErrorKind::InvalidInteger { argument: spec.name.clone(), token: token.to_string() };

    match spec.value_type {
        ValueType::String => Ok(Value::String(token.to_string())),
        ValueType::Unsigned => parse_magnitude(token).map(Value::Unsigned).ok_or_else(invalid),
        ValueType::Signed => {
            let value = match token.strip_prefix('-') {
                Some(rest) => parse_magnitude(rest).and_then(|it| 0i64.checked_sub_unsigned(it)),
                None => parse_magnitude(token).and_then(|it| i64::try_from(it).ok()),
            };
            value.map(Value::Signed).ok_or_else(invalid)
        }
    }
}

/// Base 10, or base 16 behind `0x`. Signs, blanks and empty digits are rejected.
fn parse_magnitude(text: &str) -> Option<u64> {
    let (digits, radix) = match text.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    if digits.is_empty() || !digits.chars().all(|it| it.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}
