use std::fmt;

use crate::{
    help::Help,
    spec::{CommandNode, CommandSpec},
};

/// What went wrong, with the context needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    // Caller misuse
    #[error("invalid parameter: `{what}`")]
    InvalidParameter { what: &'static str },

    #[error("argument #{index} has no name")]
    ArgumentNameMissing { index: usize },

    #[error("option #{index} has no long name")]
    OptionNameMissing { index: usize },

    #[error("option name must be alphabetic: `{name}`")]
    OptionNameInvalid { name: String },

    #[error("short name of `--{name}` must be alphabetic: `{short}`")]
    OptionShortNameInvalid { name: String, short: char },

    #[error("a flag can't be required: `--{name}`")]
    OptionFlagRequired { name: String },

    #[error("subcommand #{index} has no name")]
    CommandNameMissing { index: usize },

    // Resource limits
    #[error("too many arguments: {count} (max {max})")]
    TooManyTokens { count: usize, max: usize },

    #[error("argument #{index} is too long: {len} bytes (max {max})")]
    TokenTooLong { index: usize, len: usize, max: usize },

    #[error("too many options: {count} (max {max})")]
    TooManyOptions { count: usize, max: usize },

    // User input
    #[error("unexpected argument: expected {expected}, got {found}")]
    ArgumentExceededSpec { expected: usize, found: usize },

    #[error("missing argument: expected {expected}, got {found}")]
    ArgumentExpectedInSpec { expected: usize, found: usize },

    #[error("unknown option: `{token}`")]
    OptionNameNotInSpec { token: String },

    #[error("ambiguous option: `{token}`")]
    OptionNameAmbiguous { token: String },

    #[error("expected an option before `{token}`")]
    OptionNameExpected { token: String },

    #[error("option is required: `--{name}`")]
    OptionNameRequiredInSpec { name: String },

    #[error("expected a value for `--{option}`")]
    OptionValueExpected { option: String },

    #[error("option specified more than once: `--{name}`")]
    OptionDuplicated { name: String },

    #[error("can't parse `{argument}`, invalid integer: `{token}`")]
    InvalidInteger { argument: String, token: String },

    #[error("unknown command: `{token}`")]
    CommandNameNotInSpec { token: String },

    #[error("a subcommand is required")]
    CommandNameRequired,

    #[error("invalid command name at position {index}")]
    CommandNameInvalid { index: usize },
}

/// Who is to blame for an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A malformed spec or a misused entry point, a bug in the embedding program.
    CallerMisuse,
    /// The input exceeds a [`Config`](crate::Config) limit.
    ResourceLimit,
    /// The user typed something the spec doesn't accept.
    Input,
}

impl ErrorKind {
    pub fn category(&self) -> Category {
        match self {
            ErrorKind::InvalidParameter { .. }
            | ErrorKind::ArgumentNameMissing { .. }
            | ErrorKind::OptionNameMissing { .. }
            | ErrorKind::OptionNameInvalid { .. }
            | ErrorKind::OptionShortNameInvalid { .. }
            | ErrorKind::OptionFlagRequired { .. }
            | ErrorKind::CommandNameMissing { .. } => Category::CallerMisuse,
            ErrorKind::TooManyTokens { .. }
            | ErrorKind::TokenTooLong { .. }
            | ErrorKind::TooManyOptions { .. } => Category::ResourceLimit,
            ErrorKind::ArgumentExceededSpec { .. }
            | ErrorKind::ArgumentExpectedInSpec { .. }
            | ErrorKind::OptionNameNotInSpec { .. }
            | ErrorKind::OptionNameAmbiguous { .. }
            | ErrorKind::OptionNameExpected { .. }
            | ErrorKind::OptionNameRequiredInSpec { .. }
            | ErrorKind::OptionValueExpected { .. }
            | ErrorKind::OptionDuplicated { .. }
            | ErrorKind::InvalidInteger { .. }
            | ErrorKind::CommandNameNotInSpec { .. }
            | ErrorKind::CommandNameRequired
            | ErrorKind::CommandNameInvalid { .. } => Category::Input,
        }
    }
}

/// The part of the spec that was active when an error was detected.
pub enum Scope<'s, C = ()> {
    Command(&'s CommandSpec<C>),
    Node(&'s CommandNode<C>),
}

impl<C> Clone for Scope<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Scope<'_, C> {}

impl<C> fmt::Debug for Scope<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, help) = match self {
            Scope::Command(command) => ("Command", command.help.as_deref()),
            Scope::Node(node) => ("Node", node.help()),
        };
        f.debug_tuple(kind).field(&help).finish()
    }
}

impl<C> Scope<'_, C> {
    pub fn render_help(&self) -> String {
        match self {
            Scope::Command(command) => command.render_help(),
            Scope::Node(node) => node.render_help(),
        }
    }
}

/// A rejected spec or command line.
pub struct Error<'s, C = ()> {
    kind: ErrorKind,
    scope: Option<Scope<'s, C>>,
}

impl<'s, C> Error<'s, C> {
    pub(crate) fn scoped(kind: ErrorKind, scope: Scope<'s, C>) -> Self {
        Self { kind, scope: Some(scope) }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn scope(&self) -> Option<Scope<'s, C>> {
        self.scope
    }

    /// Help text of the command or node the error occurred in, suitable to
    /// print next to the message.
    pub fn help(&self) -> Option<String> {
        self.scope.map(|it| it.render_help())
    }
}

impl<C> From<ErrorKind> for Error<'_, C> {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, scope: None }
    }
}

impl<C> fmt::Debug for Error<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error").field("kind", &self.kind).field("scope", &self.scope).finish()
    }
}

impl<C> fmt::Display for Error<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<C> std::error::Error for Error<'_, C> {}
