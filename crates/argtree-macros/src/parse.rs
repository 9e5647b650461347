use std::{fmt, mem};

#[cfg(not(test))]
use proc_macro::{Delimiter, TokenStream, TokenTree};
#[cfg(test)]
use proc_macro2::{Delimiter, TokenStream, TokenTree};

use crate::ast;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub(crate) struct Error {
    msg: String,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.msg, f)
    }
}

macro_rules! format_err {
    ($($tt:tt)*) => {
        Error { msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

pub(crate) fn command(ts: TokenStream) -> Result<ast::Cmd> {
    let p = &mut Parser::new(ts);
    let cmd = root(p)?;
    if cmd.is_parent() {
        bail!("subcommands are not allowed here, use `multicommand!`")
    }
    Ok(cmd)
}

pub(crate) fn multicommand(ts: TokenStream) -> Result<ast::Cmd> {
    let p = &mut Parser::new(ts);
    let cmd = root(p)?;
    if !cmd.is_parent() {
        bail!("expected at least one subcommand in `{}`", cmd.name)
    }
    Ok(cmd)
}

fn root(p: &mut Parser) -> Result<ast::Cmd> {
    let doc = opt_doc(p)?;
    let mut cmd = cmd(p)?;
    cmd.doc = doc;
    if !p.end() {
        bail!("unexpected input after `{}`", cmd.name)
    }
    Ok(cmd)
}

fn cmd(p: &mut Parser) -> Result<ast::Cmd> {
    p.expect_keyword("cmd")?;
    let name = cmd_name(p)?;
    let id = if p.eat_punct('=') { Some(p.expect_id()?) } else { None };

    let mut res = ast::Cmd {
        name,
        doc: None,
        id,
        args: Vec::new(),
        opts: Vec::new(),
        subcommands: Vec::new(),
    };

    p.enter_delim(Delimiter::Brace)?;
    while !p.end() {
        let doc = opt_doc(p)?;
        if p.at_keyword("cmd") {
            let mut sub = cmd(p)?;
            sub.doc = doc;
            res.subcommands.push(sub);
            continue;
        }

        let arity = arity(p)?;
        let is_val = p.lookahead_punct(':', 1);
        let name = p.expect_name()?;
        if name.starts_with('-') {
            let mut opt = opt(p, name, arity)?;
            opt.doc = doc;
            res.opts.push(opt);
        } else if is_val {
            if arity != ast::Arity::Required {
                bail!("positional arguments are always `required`: `{name}`")
            }
            p.expect_punct(':')?;
            let ty = ty(p)?;
            res.args.push(ast::Arg { name, doc, ty });
        } else {
            bail!("expected `--option` or `arg: Type`, got `{name}`")
        }
    }
    p.exit_delim()?;

    if res.is_parent() {
        if !res.args.is_empty() || !res.opts.is_empty() {
            bail!("`{}` has subcommands, it can't declare arguments or options", res.name)
        }
        if res.id.is_some() {
            bail!("`{}` has subcommands, only terminal commands take an id", res.name)
        }
    }
    Ok(res)
}

fn opt(p: &mut Parser, name: String, arity: ast::Arity) -> Result<ast::Opt> {
    let (short, long) = if name.starts_with("--") {
        (None, name)
    } else {
        if !p.eat_punct(',') {
            bail!("long option is required for `{name}`");
        }
        let long = flag_name(p)?;
        if !long.starts_with("--") {
            bail!("long name must begin with `--`: `{long}`");
        }
        (Some(short_name(&name)?), long)
    };

    Ok(ast::Opt { arity, name: long[2..].to_string(), short, doc: None })
}

fn short_name(flag: &str) -> Result<char> {
    let mut chars = flag[1..].chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("short name must be a single character: `{flag}`"),
    }
}

fn arity(p: &mut Parser) -> Result<ast::Arity> {
    if p.eat_keyword("optional") {
        return Ok(ast::Arity::Optional);
    }
    if p.eat_keyword("required") {
        return Ok(ast::Arity::Required);
    }
    if p.eat_keyword("switch") {
        return Ok(ast::Arity::Switch);
    }
    let next = p.ts.last().map(|it| it.to_string()).unwrap_or_default();
    bail!("expected one of `optional`, `required`, `switch`, `cmd`, got `{next}`")
}

fn ty(p: &mut Parser) -> Result<ast::Ty> {
    let name = p.expect_name()?;
    let res = match name.as_str() {
        "String" => ast::Ty::String,
        "u64" => ast::Ty::Unsigned,
        "i64" => ast::Ty::Signed,
        _ => bail!("unsupported argument type `{name}`, expected `String`, `u64` or `i64`"),
    };
    Ok(res)
}

fn opt_single_doc(p: &mut Parser) -> Result<Option<String>> {
    if !p.eat_punct('#') {
        return Ok(None);
    }
    p.enter_delim(Delimiter::Bracket)?;
    p.expect_keyword("doc")?;
    p.expect_punct('=')?;
    let mut res = p.expect_string()?;
    if let Some(suf) = res.strip_prefix(' ') {
        res = suf.to_string();
    }
    p.exit_delim()?;
    Ok(Some(res))
}

fn opt_doc(p: &mut Parser) -> Result<Option<String>> {
    let lines =
        core::iter::from_fn(|| opt_single_doc(p).transpose()).collect::<Result<Vec<String>>>()?;
    let lines = lines.join("\n");

    if lines.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lines))
    }
}

fn cmd_name(p: &mut Parser) -> Result<String> {
    let name = p.expect_name()?;
    if name.starts_with('-') {
        bail!("command name can't begin with `-`: `{name}`");
    }
    Ok(name)
}

fn flag_name(p: &mut Parser) -> Result<String> {
    let name = p.expect_name()?;
    if !name.starts_with('-') {
        bail!("option name should begin with `-`: `{name}`");
    }
    Ok(name)
}

/// Reversed token stream, with a stack of the enclosing groups.
struct Parser {
    stack: Vec<Vec<TokenTree>>,
    ts: Vec<TokenTree>,
}

impl Parser {
    fn new(ts: TokenStream) -> Self {
        let mut ts = ts.into_iter().collect::<Vec<_>>();
        ts.reverse();
        Self { stack: Vec::new(), ts }
    }

    fn enter_delim(&mut self, delimiter: Delimiter) -> Result<()> {
        match self.ts.pop() {
            Some(TokenTree::Group(g)) if g.delimiter() == delimiter => {
                let mut ts = g.stream().into_iter().collect::<Vec<_>>();
                ts.reverse();
                let outer = mem::replace(&mut self.ts, ts);
                self.stack.push(outer);
            }
            _ => bail!("expected `{}`", open_delim(delimiter)),
        }
        Ok(())
    }
    fn exit_delim(&mut self) -> Result<()> {
        if !self.end() {
            let next = self.ts.last().map(|it| it.to_string()).unwrap_or_default();
            bail!("unexpected `{next}`")
        }
        match self.stack.pop() {
            Some(outer) => self.ts = outer,
            None => bail!("unbalanced delimiters"),
        }
        Ok(())
    }
    fn end(&mut self) -> bool {
        self.ts.last().is_none()
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<()> {
        if !self.eat_keyword(kw) {
            bail!("expected `{kw}`")
        }
        Ok(())
    }
    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.at_keyword(kw) {
            self.ts.pop();
            true
        } else {
            false
        }
    }
    fn at_keyword(&mut self, kw: &str) -> bool {
        match self.ts.last() {
            Some(TokenTree::Ident(ident)) => ident.to_string() == kw,
            _ => false,
        }
    }

    fn expect_name(&mut self) -> Result<String> {
        self.eat_name().ok_or_else(|| {
            let next = self.ts.pop().map(|it| it.to_string()).unwrap_or_default();
            format_err!("expected a name, got: `{next}`")
        })
    }
    /// Glues `-`, `--` and identifiers: `--dry-run`, `analysis-stats`.
    fn eat_name(&mut self) -> Option<String> {
        let mut buf = String::new();
        let mut prev_ident = false;
        loop {
            match self.ts.last() {
                Some(TokenTree::Punct(p)) if p.as_char() == '-' => {
                    prev_ident = false;
                    buf.push('-');
                }
                Some(TokenTree::Ident(ident)) if !prev_ident => {
                    prev_ident = true;
                    buf.push_str(&ident.to_string());
                }
                _ => break,
            }
            self.ts.pop();
        }
        if buf.is_empty() {
            None
        } else {
            Some(buf)
        }
    }

    fn expect_punct(&mut self, punct: char) -> Result<()> {
        if !self.eat_punct(punct) {
            bail!("expected `{punct}`")
        }
        Ok(())
    }
    fn eat_punct(&mut self, punct: char) -> bool {
        match self.ts.last() {
            Some(TokenTree::Punct(p)) if p.as_char() == punct => {
                self.ts.pop();
                true
            }
            _ => false,
        }
    }
    fn lookahead_punct(&mut self, punct: char, n: usize) -> bool {
        match self.ts.iter().rev().nth(n) {
            Some(TokenTree::Punct(p)) => p.as_char() == punct,
            _ => false,
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.ts.pop() {
            Some(TokenTree::Literal(lit)) if lit.to_string().starts_with('"') => {
                Ok(str_lit_value(lit.to_string()))
            }
            _ => bail!("expected a string"),
        }
    }

    /// An integer literal, or a path to a `usize` constant.
    fn expect_id(&mut self) -> Result<String> {
        match self.ts.pop() {
            Some(TokenTree::Literal(lit)) => {
                let text = lit.to_string();
                let digits = text.trim_end_matches("usize").replace('_', "");
                match digits.parse::<usize>() {
                    Ok(id) => Ok(id.to_string()),
                    Err(_) => bail!("expected an integer id, got `{text}`"),
                }
            }
            Some(TokenTree::Ident(ident)) => {
                let mut path = ident.to_string();
                while self.lookahead_punct(':', 0) && self.lookahead_punct(':', 1) {
                    self.ts.truncate(self.ts.len() - 2);
                    match self.ts.pop() {
                        Some(TokenTree::Ident(ident)) => {
                            path.push_str("::");
                            path.push_str(&ident.to_string());
                        }
                        _ => bail!("expected a path segment after `{path}::`"),
                    }
                }
                Ok(path)
            }
            other => {
                let other = other.map(|it| it.to_string()).unwrap_or_default();
                bail!("expected an integer id, got `{other}`")
            }
        }
    }
}

fn open_delim(delimiter: Delimiter) -> &'static str {
    match delimiter {
        Delimiter::Brace => "{",
        Delimiter::Bracket => "[",
        Delimiter::Parenthesis => "(",
        Delimiter::None => "group",
    }
}

/// Value of a string literal, good enough for doc comments.
///
/// Needs support in the proc_macro library to be done properly:
/// <https://internals.rust-lang.org/t/getting-value-out-of-proc-macro-literal/14140>
fn str_lit_value(lit: String) -> String {
    lit.trim_matches('"').replace("\\'", "'").replace("\\\"", "\"").replace("\\\\", "\\")
}

#[cfg(test)]
mod tests {
    use expect_test::{expect, Expect};

    use super::{command, multicommand, Result, TokenStream};
    use crate::ast;

    fn check_err(f: fn(TokenStream) -> Result<ast::Cmd>, src: &str, expect: Expect) {
        let ts = src.parse::<TokenStream>().unwrap();
        match f(ts) {
            Ok(cmd) => panic!("expected an error, got {cmd:?}"),
            Err(err) => expect.assert_eq(&err.to_string()),
        }
    }

    #[test]
    fn parses_command() {
        let ts = r#"
            /// Perform zlib compression.
            cmd compress = 1 {
                /// A path to the file to compress.
                required FILE: String
                required LEVEL: u64
                optional -l, --level
                switch --progress
            }
        "#
        .parse()
        .unwrap();
        let cmd = command(ts).unwrap();
        assert_eq!(cmd.name, "compress");
        assert_eq!(cmd.doc.as_deref(), Some("Perform zlib compression."));
        assert_eq!(cmd.id.as_deref(), Some("1"));
        assert_eq!(cmd.args.len(), 2);
        assert_eq!(cmd.args[0].doc.as_deref(), Some("A path to the file to compress."));
        assert_eq!(cmd.args[1].ty, ast::Ty::Unsigned);
        assert_eq!(cmd.opts[0].short, Some('l'));
        assert_eq!(cmd.opts[0].arity, ast::Arity::Optional);
        assert_eq!(cmd.opts[1].name, "progress");
        assert_eq!(cmd.opts[1].arity, ast::Arity::Switch);
    }

    #[test]
    fn parses_tree() {
        let ts = "cmd git { cmd remote { cmd add {} cmd show-url { required NAME: String } } }"
            .parse()
            .unwrap();
        let cmd = multicommand(ts).unwrap();
        assert_eq!(cmd.subcommands[0].subcommands[1].name, "show-url");
        assert!(!cmd.subcommands[0].subcommands[0].is_parent());
    }

    #[test]
    fn command_ids() {
        let ids = |src: &str| command(src.parse().unwrap()).unwrap().id;
        assert_eq!(ids("cmd a {}"), None);
        assert_eq!(ids("cmd a = 7 {}"), Some("7".to_string()));
        assert_eq!(ids("cmd a = 1_000usize {}"), Some("1000".to_string()));
        assert_eq!(ids("cmd a = COMPRESS {}"), Some("COMPRESS".to_string()));
        assert_eq!(ids("cmd a = self::ids::COMPRESS {}"), Some("self::ids::COMPRESS".to_string()));
    }

    #[test]
    fn errors() {
        check_err(
            command,
            "cmd a { cmd b {} }",
            expect![["subcommands are not allowed here, use `multicommand!`"]],
        );
        check_err(multicommand, "cmd a { }", expect![["expected at least one subcommand in `a`"]]);
        check_err(
            command,
            "cmd a { optional FILE: String }",
            expect![["positional arguments are always `required`: `FILE`"]],
        );
        check_err(
            command,
            "cmd a { required FILE: PathBuf }",
            expect![["unsupported argument type `PathBuf`, expected `String`, `u64` or `i64`"]],
        );
        check_err(command, "cmd a { required -a }", expect![["long option is required for `-a`"]]);
        check_err(
            command,
            "cmd a { switch -ab, --apple }",
            expect![["short name must be a single character: `-ab`"]],
        );
        check_err(
            multicommand,
            "cmd a { required --x cmd b {} }",
            expect![["`a` has subcommands, it can't declare arguments or options"]],
        );
        check_err(
            multicommand,
            "cmd a = 3 { cmd b {} }",
            expect![["`a` has subcommands, only terminal commands take an id"]],
        );
        check_err(command, "cmd a = -1 {}", expect![["expected an integer id, got `-`"]]);
        check_err(command, "cmd a = ids:: {}", expect![["expected a path segment after `ids::`"]]);
        check_err(command, "cmd a {} cmd b {}", expect![["unexpected input after `a`"]]);
    }

    #[test]
    fn unknown_item_names_a_single_token() {
        check_err(
            command,
            "cmd a { repeated --apple }",
            expect![["expected one of `optional`, `required`, `switch`, `cmd`, got `repeated`"]],
        );
        check_err(
            command,
            "cmd a { flag -x, --xray }",
            expect![["expected one of `optional`, `required`, `switch`, `cmd`, got `flag`"]],
        );
        check_err(
            command,
            "cmd a { --apple }",
            expect![["expected one of `optional`, `required`, `switch`, `cmd`, got `-`"]],
        );
    }
}
