use std::fmt::Write;

use crate::ast;

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// `command!`: a `CommandSpec` expression.
pub(crate) fn emit_command(cmd: &ast::Cmd) -> String {
    let mut buf = String::new();
    emit_spec(&mut buf, cmd, 0);
    buf
}

/// `multicommand!`: a `CommandNode` expression.
pub(crate) fn emit_multicommand(cmd: &ast::Cmd) -> String {
    let mut buf = String::new();
    emit_node(&mut buf, cmd, 0);
    buf
}

fn emit_node(buf: &mut String, cmd: &ast::Cmd, level: usize) {
    if !cmd.is_parent() {
        w!(buf, "::argtree::CommandNode::Terminal(\n");
        indent(buf, level + 1);
        emit_spec(buf, cmd, level + 1);
        w!(buf, "\n");
        indent(buf, level);
        w!(buf, ")");
        return;
    }

    w!(buf, "::argtree::CommandNode::Parent(\n");
    indent(buf, level + 1);
    w!(buf, "::argtree::Subcommands::new()");
    if let Some(doc) = &cmd.doc {
        w!(buf, "\n");
        indent(buf, level + 2);
        w!(buf, ".help({doc:?})");
    }
    for sub in &cmd.subcommands {
        w!(buf, "\n");
        indent(buf, level + 2);
        w!(buf, ".subcommand({:?}, ", sub.name);
        emit_node(buf, sub, level + 2);
        w!(buf, ")");
    }
    w!(buf, "\n");
    indent(buf, level);
    w!(buf, ")");
}

fn emit_spec(buf: &mut String, cmd: &ast::Cmd, level: usize) {
    w!(buf, "::argtree::CommandSpec::new()");
    let call = |buf: &mut String| {
        w!(buf, "\n");
        indent(buf, level + 1);
    };

    if let Some(doc) = &cmd.doc {
        call(buf);
        w!(buf, ".help({doc:?})");
    }
    if let Some(id) = &cmd.id {
        call(buf);
        w!(buf, ".id({id})");
    }
    for arg in &cmd.args {
        call(buf);
        w!(buf, ".argument(::argtree::ArgumentSpec::new({:?})", arg.name);
        if let Some(doc) = &arg.doc {
            w!(buf, ".help({doc:?})");
        }
        match arg.ty {
            ast::Ty::String => (),
            ast::Ty::Unsigned => w!(buf, ".value_type(::argtree::ValueType::Unsigned)"),
            ast::Ty::Signed => w!(buf, ".value_type(::argtree::ValueType::Signed)"),
        }
        w!(buf, ")");
    }
    for opt in &cmd.opts {
        call(buf);
        w!(buf, ".option(::argtree::OptionSpec::new({:?})", opt.name);
        if let Some(short) = opt.short {
            w!(buf, ".short({short:?})");
        }
        if let Some(doc) = &opt.doc {
            w!(buf, ".help({doc:?})");
        }
        match opt.arity {
            ast::Arity::Optional => (),
            ast::Arity::Required => w!(buf, ".required()"),
            ast::Arity::Switch => w!(buf, ".flag()"),
        }
        w!(buf, ")");
    }
}

fn indent(buf: &mut String, level: usize) {
    buf.push_str(&"    ".repeat(level));
}
