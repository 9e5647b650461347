use expect_test::expect;

use crate::{fruit, zlib};

#[test]
fn command_help() {
    expect![[r#"
        A command for specifying fruit quantities.

        Options:
          -a, --apple  number of apples (required)
          -b, --banana change in the number of bananas
    "#]]
    .assert_eq(&argtree::render_help(&fruit::fruit()));

    expect![[r#"
        Arguments:
          COUNT
          DELTA
          NAME

        Options:
              --verbose
    "#]]
    .assert_eq(&argtree::render_help(&fruit::typed()));
}

#[test]
fn multicommand_help() {
    let zlib = zlib::zlib();
    expect![[r#"
        A zlib compress command line utility

        Commands:
          compress   Perform zlib compression.
          decompress Perform zlib decompression.
    "#]]
    .assert_eq(&argtree::render_help(&zlib));

    let argtree::CommandNode::Parent(subcommands) = &zlib else { panic!("zlib is a tree") };
    expect![[r#"
        Perform zlib compression.

        Arguments:
          FILE A path to the file to compress.

        Options:
          -l, --level    The compression level to use.
          -p, --progress Whether to print progress to stdout
    "#]]
    .assert_eq(&argtree::render_help(&subcommands.subcommands[0].node));
}

#[test]
fn error_help() {
    let fruit = fruit::fruit();
    let err = argtree::parse_command(&["--banana"], &fruit).unwrap_err();
    assert_eq!(err.to_string(), "expected a value for `--banana`");
    assert_eq!(err.help(), Some(argtree::render_help(&fruit)));
}
