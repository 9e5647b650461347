use std::fmt::Write;

use crate::spec::{CommandNode, CommandSpec, Subcommands};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Anything [`render_help`] can format.
pub trait Help {
    fn render_help(&self) -> String;
}

pub fn render_help<H: Help + ?Sized>(spec: &H) -> String {
    spec.render_help()
}

impl<C> Help for CommandSpec<C> {
    fn render_help(&self) -> String {
        let mut buf = String::new();
        command_help(&mut buf, self);
        buf
    }
}

impl<C> Help for Subcommands<C> {
    fn render_help(&self) -> String {
        let mut buf = String::new();
        subcommands_help(&mut buf, self);
        buf
    }
}

impl<C> Help for CommandNode<C> {
    fn render_help(&self) -> String {
        match self {
            CommandNode::Terminal(command) => command.render_help(),
            CommandNode::Parent(subcommands) => subcommands.render_help(),
        }
    }
}

fn command_help<C>(buf: &mut String, cmd: &CommandSpec<C>) {
    let mut blank = "";
    if let Some(help) = &cmd.help {
        w!(buf, "{help}\n");
        blank = "\n";
    }

    if !cmd.arguments.is_empty() {
        w!(buf, "{blank}Arguments:\n");
        blank = "\n";

        let width = cmd.arguments.iter().map(|it| it.name.chars().count()).max().unwrap_or(0);
        for arg in &cmd.arguments {
            let mut line = format!("  {:<width$} ", arg.name);
            line.push_str(arg.help.as_deref().unwrap_or_default());
            push_line(buf, &line);
        }
    }

    if !cmd.options.is_empty() {
        w!(buf, "{blank}Options:\n");

        let width = cmd.options.iter().map(|it| it.long_name.chars().count()).max().unwrap_or(0);
        for opt in &cmd.options {
            let short = match opt.short_name {
                Some(it) => format!("-{it}, "),
                None => " ".repeat(4),
            };
            let help = opt.help.as_deref().unwrap_or_default();
            let mut line = format!("  {short}--{:<width$} {help}", opt.long_name);
            if opt.required {
                if !help.is_empty() {
                    line.push(' ');
                }
                line.push_str("(required)");
            }
            push_line(buf, &line);
        }
    }
}

fn subcommands_help<C>(buf: &mut String, subcommands: &Subcommands<C>) {
    let mut blank = "";
    if let Some(help) = &subcommands.help {
        w!(buf, "{help}\n");
        blank = "\n";
    }

    if subcommands.subcommands.is_empty() {
        return;
    }
    w!(buf, "{blank}Commands:\n");

    let width = subcommands.subcommands.iter().map(|it| it.name.chars().count()).max().unwrap_or(0);
    for sub in &subcommands.subcommands {
        let mut line = format!("  {:<width$} ", sub.name);
        line.push_str(sub.node.help().unwrap_or_default());
        push_line(buf, &line);
    }
}

fn push_line(buf: &mut String, line: &str) {
    w!(buf, "{}\n", line.trim_end());
}
