//! Descent through a command tree.

use crate::{
    error::{Error, ErrorKind, Scope},
    spec::{CommandNode, CommandSpec},
    Result,
};

/// Matches the leading command names of `tokens` against the tree.
///
/// Returns how many tokens were consumed and the terminal command they
/// name. Descent stops at the first terminal, whatever follows it.
pub(crate) fn resolve<'s, S, C>(
    tokens: &[S],
    root: &'s CommandNode<C>,
) -> Result<'s, (usize, &'s CommandSpec<C>), C>
where
    S: AsRef<str>,
{
    if let CommandNode::Terminal(_) = root {
        return Err(Error::scoped(ErrorKind::InvalidParameter { what: "root" }, Scope::Node(root)));
    }
    if tokens.first().is_some_and(|it| it.as_ref().is_empty()) {
        return Err(Error::scoped(ErrorKind::CommandNameInvalid { index: 0 }, Scope::Node(root)));
    }

    let n_names = tokens
        .iter()
        .map(AsRef::as_ref)
        .take_while(|it| !it.is_empty() && !it.starts_with('-'))
        .count();

    let mut node = root;
    let mut consumed = 0;
    loop {
        let subcommands = match node {
            CommandNode::Terminal(command) => {
                tracing::debug!(
                    path = ?tokens[..consumed].iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
                    id = command.id,
                    "resolved subcommand"
                );
                return Ok((consumed, command));
            }
            CommandNode::Parent(it) => it,
        };
        if consumed == n_names {
            return Err(Error::scoped(ErrorKind::CommandNameRequired, Scope::Node(node)));
        }
        let name = tokens[consumed].as_ref();
        let subcommand = subcommands.find(name).ok_or_else(|| {
            Error::scoped(
                ErrorKind::CommandNameNotInSpec { token: name.to_string() },
                Scope::Node(node),
            )
        })?;
        node = &subcommand.node;
        consumed += 1;
    }
}
