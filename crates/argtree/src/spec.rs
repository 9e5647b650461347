//! Caller-authored description of the expected command line shape.
//!
//! Specs are built once, usually at startup or through [`command!`] /
//! [`multicommand!`], and are only ever read by the parser afterwards.
//!
//! [`command!`]: crate::command
//! [`multicommand!`]: crate::multicommand

/// Type a positional value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    #[default]
    String,
    Unsigned,
    Signed,
}

/// A required positional slot, bound by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub help: Option<String>,
    pub value_type: ValueType,
}

impl ArgumentSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), help: None, value_type: ValueType::String }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

/// A named, order-independent slot introduced by `--long` or `-s`.
///
/// A non-flag option always takes exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub long_name: String,
    pub short_name: Option<char>,
    pub help: Option<String>,
    pub is_flag: bool,
    pub required: bool,
}

impl OptionSpec {
    pub fn new(long_name: impl Into<String>) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: None,
            help: None,
            is_flag: false,
            required: false,
        }
    }

    pub fn short(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn flag(mut self) -> Self {
        self.is_flag = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The leaf parsing unit.
///
/// `id` and `context` are never looked at by the engine: they let the caller
/// tell apart commands that share the same shape once a tree is resolved.
#[derive(Debug, Clone, Default)]
pub struct CommandSpec<C = ()> {
    pub help: Option<String>,
    pub id: usize,
    pub context: C,
    pub arguments: Vec<ArgumentSpec>,
    pub options: Vec<OptionSpec>,
}

impl CommandSpec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> CommandSpec<C> {
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    pub fn with_context<D>(self, context: D) -> CommandSpec<D> {
        CommandSpec {
            help: self.help,
            id: self.id,
            context,
            arguments: self.arguments,
            options: self.options,
        }
    }

    pub fn argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn find_short(&self, short_name: char) -> Option<&OptionSpec> {
        self.options.iter().find(|it| it.short_name == Some(short_name))
    }

    pub fn find_long(&self, long_name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|it| it.long_name == long_name)
    }
}

/// A node of a command tree.
#[derive(Debug, Clone)]
pub enum CommandNode<C = ()> {
    Terminal(CommandSpec<C>),
    Parent(Subcommands<C>),
}

impl<C> CommandNode<C> {
    pub fn help(&self) -> Option<&str> {
        match self {
            CommandNode::Terminal(command) => command.help.as_deref(),
            CommandNode::Parent(subcommands) => subcommands.help.as_deref(),
        }
    }
}

impl<C> From<CommandSpec<C>> for CommandNode<C> {
    fn from(command: CommandSpec<C>) -> Self {
        CommandNode::Terminal(command)
    }
}

impl<C> From<Subcommands<C>> for CommandNode<C> {
    fn from(subcommands: Subcommands<C>) -> Self {
        CommandNode::Parent(subcommands)
    }
}

/// Children of a parent node, in declaration order.
#[derive(Debug, Clone)]
pub struct Subcommands<C = ()> {
    pub help: Option<String>,
    pub subcommands: Vec<Subcommand<C>>,
}

#[derive(Debug, Clone)]
pub struct Subcommand<C = ()> {
    pub name: String,
    pub node: CommandNode<C>,
}

impl<C> Subcommands<C> {
    pub fn new() -> Self {
        Self { help: None, subcommands: Vec::new() }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn subcommand(mut self, name: impl Into<String>, node: impl Into<CommandNode<C>>) -> Self {
        self.subcommands.push(Subcommand { name: name.into(), node: node.into() });
        self
    }

    /// Exact, case-sensitive lookup; the first child with this name wins.
    pub fn find(&self, name: &str) -> Option<&Subcommand<C>> {
        self.subcommands.iter().find(|it| it.name == name)
    }
}

impl<C> Default for Subcommands<C> {
    fn default() -> Self {
        Self::new()
    }
}
