//! Self-checks of a spec, meant to run once at startup or in tests.

use crate::{
    error::{Error, ErrorKind, Scope},
    spec::{CommandNode, CommandSpec},
    Result,
};

pub fn validate_command<C>(command: &CommandSpec<C>) -> Result<'_, (), C> {
    check_command(command).map_err(|kind| Error::scoped(kind, Scope::Command(command)))
}

/// Validates a whole tree, depth-first, left to right.
pub fn validate_multicommand<C>(root: &CommandNode<C>) -> Result<'_, (), C> {
    if let CommandNode::Terminal(_) = root {
        return Err(Error::scoped(ErrorKind::InvalidParameter { what: "root" }, Scope::Node(root)));
    }
    validate_node(root)
}

fn validate_node<C>(node: &CommandNode<C>) -> Result<'_, (), C> {
    match node {
        CommandNode::Terminal(command) => validate_command(command),
        CommandNode::Parent(subcommands) => {
            for (index, subcommand) in subcommands.subcommands.iter().enumerate() {
                if subcommand.name.is_empty() {
                    let kind = ErrorKind::CommandNameMissing { index };
                    return Err(Error::scoped(kind, Scope::Node(node)));
                }
                validate_node(&subcommand.node)?;
            }
            Ok(())
        }
    }
}

fn check_command<C>(command: &CommandSpec<C>) -> std::result::Result<(), ErrorKind> {
    for (index, argument) in command.arguments.iter().enumerate() {
        if argument.name.is_empty() {
            return Err(ErrorKind::ArgumentNameMissing { index });
        }
    }
    for (index, option) in command.options.iter().enumerate() {
        let name = &option.long_name;
        if name.is_empty() {
            return Err(ErrorKind::OptionNameMissing { index });
        }
        if !name.chars().all(|it| it.is_ascii_alphabetic()) {
            return Err(ErrorKind::OptionNameInvalid { name: name.clone() });
        }
        if let Some(short) = option.short_name {
            if !short.is_ascii_alphabetic() {
                return Err(ErrorKind::OptionShortNameInvalid { name: name.clone(), short });
            }
        }
        if option.is_flag && option.required {
            return Err(ErrorKind::OptionFlagRequired { name: name.clone() });
        }
    }
    Ok(())
}
