use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

const COMPRESS: usize = 1;
const DECOMPRESS: usize = 2;

fn main() -> ExitCode {
    let zlib = argtree::multicommand! {
        /// A zlib compress command line utility
        cmd zlib {
            /// Perform zlib compression.
            cmd compress = COMPRESS {
                /// A path to the file to compress.
                required FILE: String
                /// The compression level to use.
                optional -l, --level
                /// Whether to print progress to stdout
                switch -p, --progress
            }
            /// Perform zlib decompression.
            cmd decompress = DECOMPRESS {
                /// A path to the file to decompress.
                required FILE: String
                /// The compression level to use.
                optional -l, --level
                /// Whether to print progress to stdout
                switch -p, --progress
            }
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        print!("{}", argtree::render_help(&zlib));
        return ExitCode::FAILURE;
    }

    if let Err(err) = argtree::validate_multicommand(&zlib) {
        eprintln!("broken command spec: {err}");
        return ExitCode::FAILURE;
    }

    let parsed = match argtree::parse_multicommand(&args, &zlib) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("error: {err}\n");
            eprint!("{}", err.help().unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    match parsed.command().id {
        COMPRESS => println!("Doing compression!"),
        DECOMPRESS => println!("Doing decompression!"),
        id => unreachable!("no command with id {id}"),
    }

    if let Some(file) = parsed.argument("FILE") {
        println!("Using file path: {}", file.value);
    }
    let progress = parsed.is_present("progress");
    println!("tracking progress: {}", if progress { "YES" } else { "NO" });
    println!("level set to: {}", parsed.value_of("level").unwrap_or("DEFAULT"));

    ExitCode::SUCCESS
}
