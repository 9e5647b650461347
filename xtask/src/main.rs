use std::time::Instant;

use xshell::{cmd, Shell};

/// Shared by every crate of the workspace, see `[workspace.package]`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = Section::new("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
    }

    {
        let _s = Section::new("TEST");
        cmd!(sh, "cargo test --workspace").run()?;
    }

    {
        let _s = Section::new("FMT");
        cmd!(sh, "cargo fmt --all -- --check").run()?;
    }

    let tag = format!("v{VERSION}");
    let tags_at_head = cmd!(sh, "git tag --points-at HEAD").read()?;
    if tags_at_head.lines().any(|it| it.trim() == tag) {
        let _s = Section::new("PUBLISH");
        // The runtime pins the macros by exact version, so they go first.
        cmd!(sh, "cargo publish -p argtree-macros").run()?;
        cmd!(sh, "cargo publish -p argtree").run()?;
    } else {
        eprintln!("HEAD is not tagged {tag}, not publishing");
    }

    Ok(())
}

/// A collapsible group in the CI log, timed.
struct Section {
    name: &'static str,
    start: Instant,
}

impl Section {
    fn new(name: &'static str) -> Section {
        println!("::group::{name}");
        Section { name, start: Instant::now() }
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        eprintln!("{}: {:.2?}", self.name, self.start.elapsed());
        println!("::endgroup::");
    }
}
