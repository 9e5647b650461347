use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let fruit = argtree::command! {
        /// A command for specifying fruit quantities.
        cmd fruit {
            /// number of apples
            required -a, --apple
            /// change in the number of bananas
            optional -b, --banana
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        print!("{}", argtree::render_help(&fruit));
        return ExitCode::FAILURE;
    }

    if let Err(err) = argtree::validate_command(&fruit) {
        eprintln!("broken command spec: {err}");
        return ExitCode::FAILURE;
    }

    let parsed = match argtree::parse_command(&args, &fruit) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("error: {err}\n");
            eprint!("{}", err.help().unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    let apples = parsed.value_of("apple").unwrap_or_default();
    match parsed.value_of("banana") {
        Some(bananas) => println!("{apples} apples, {bananas} bananas"),
        None => println!("{apples} apples, bananas unchanged"),
    }
    ExitCode::SUCCESS
}
