//! Spec-driven command line arguments parser.
//!
//! You describe the positional arguments and options a command accepts, and
//! optionally a tree of named subcommands, then feed the raw tokens in.
//! Out comes a [`ParsedCommand`] borrowing the spec, or an [`Error`] saying
//! exactly what was wrong with the input.
//!
//! ```
//! let fruit = argtree::command! {
//!     /// A command for specifying fruit quantities.
//!     cmd fruit {
//!         /// number of apples
//!         required -a, --apple
//!         /// change in the number of bananas
//!         optional -b, --banana
//!     }
//! };
//! argtree::validate_command(&fruit).unwrap();
//!
//! let parsed = argtree::parse_command(&["-b", "-2", "--apple", "5"], &fruit).unwrap();
//! assert_eq!(parsed.value_of("apple"), Some("5"));
//! assert_eq!(parsed.value_of("banana"), Some("-2"));
//!
//! let err = argtree::parse_command(&["-a"], &fruit).unwrap_err();
//! assert_eq!(err.to_string(), "expected a value for `--apple`");
//! ```
//!
//! Classification is purely lexical: `--name` (two or more ASCII letters)
//! and `-x` (one ASCII letter) are option markers, everything else is a
//! value. Positional arguments come first, bound in order; once a marker is
//! seen every following value belongs to an option. So `-1` is a perfectly
//! fine positional.
//!
//! The parser never prints anything; render help with [`render_help`] and
//! report errors however you see fit.

mod classify;
mod config;
mod error;
mod help;
mod parsed;
mod parser;
mod resolve;
mod spec;
mod validate;

pub use argtree_macros::{command, multicommand};

pub use crate::{
    classify::{classify, TokenKind},
    config::Config,
    error::{Category, Error, ErrorKind, Scope},
    help::{render_help, Help},
    parsed::{extract_argument, extract_option, ParsedArgument, ParsedCommand, ParsedOption, Value},
    parser::Parser,
    spec::{ArgumentSpec, CommandNode, CommandSpec, OptionSpec, Subcommand, Subcommands, ValueType},
    validate::{validate_command, validate_multicommand},
};

pub type Result<'s, T, C = ()> = std::result::Result<T, Error<'s, C>>;

pub fn parse_command<'s, S, C>(
    tokens: &[S],
    command: &'s CommandSpec<C>,
) -> Result<'s, ParsedCommand<'s, C>, C>
where
    S: AsRef<str>,
{
    Parser::default().parse_command(tokens, command)
}

pub fn parse_multicommand<'s, S, C>(
    tokens: &[S],
    root: &'s CommandNode<C>,
) -> Result<'s, ParsedCommand<'s, C>, C>
where
    S: AsRef<str>,
{
    Parser::default().parse_multicommand(tokens, root)
}
