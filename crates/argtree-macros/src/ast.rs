#[derive(Debug)]
pub(crate) struct Cmd {
    pub(crate) name: String,
    pub(crate) doc: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) args: Vec<Arg>,
    pub(crate) opts: Vec<Opt>,
    pub(crate) subcommands: Vec<Cmd>,
}

impl Cmd {
    pub(crate) fn is_parent(&self) -> bool {
        !self.subcommands.is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct Arg {
    pub(crate) name: String,
    pub(crate) doc: Option<String>,
    pub(crate) ty: Ty,
}

#[derive(Debug)]
pub(crate) struct Opt {
    pub(crate) arity: Arity,
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) doc: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    Optional,
    Required,
    Switch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ty {
    String,
    Unsigned,
    Signed,
}
