mod ast;
mod emit;
mod parse;

/// Builds an `argtree::CommandSpec` from a declarative description.
#[proc_macro]
pub fn command(_ts: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Stub out the code, but let rust-analyzer resolve the invocation
    #[cfg(not(test))]
    {
        let text = match parse::command(_ts) {
            Ok(cmd) => emit::emit_command(&cmd),
            Err(err) => compile_error(&err),
        };
        text.parse().unwrap()
    }
    #[cfg(test)]
    unimplemented!()
}

/// Builds an `argtree::CommandNode` tree of subcommands.
#[proc_macro]
pub fn multicommand(_ts: proc_macro::TokenStream) -> proc_macro::TokenStream {
    #[cfg(not(test))]
    {
        let text = match parse::multicommand(_ts) {
            Ok(cmd) => emit::emit_multicommand(&cmd),
            Err(err) => compile_error(&err),
        };
        text.parse().unwrap()
    }
    #[cfg(test)]
    unimplemented!()
}

#[cfg(not(test))]
fn compile_error(err: &parse::Error) -> String {
    format!("compile_error!({:?})", format!("invalid command syntax, {err}"))
}

#[cfg(test)]
fn compile_command(src: &str) -> String {
    let ts = src.parse::<proc_macro2::TokenStream>().unwrap();
    let cmd = parse::command(ts).unwrap();
    emit::emit_command(&cmd)
}

#[cfg(test)]
fn compile_multicommand(src: &str) -> String {
    let ts = src.parse::<proc_macro2::TokenStream>().unwrap();
    let cmd = parse::multicommand(ts).unwrap();
    emit::emit_multicommand(&cmd)
}
