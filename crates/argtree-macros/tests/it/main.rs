mod fruit;
mod help;
mod zlib;

use std::fmt::Write;

use expect_test::{expect, Expect};

fn render(parsed: &argtree::ParsedCommand<'_>) -> String {
    let mut buf = String::new();
    drop(writeln!(buf, "id={}", parsed.command().id));
    for arg in parsed.arguments() {
        drop(writeln!(buf, "{}={:?}", arg.spec.name, arg.value));
    }
    for opt in parsed.options() {
        match &opt.value {
            Some(value) => drop(writeln!(buf, "--{} {value}", opt.spec.long_name)),
            None => drop(writeln!(buf, "--{}", opt.spec.long_name)),
        }
    }
    buf
}

fn check(command: &argtree::CommandSpec, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().collect::<Vec<_>>();
    let actual = match argtree::parse_command(&args, command) {
        Ok(parsed) => render(&parsed),
        Err(err) => format!("error: {err}\n"),
    };
    expect.assert_eq(&actual);
}

fn check_multi(root: &argtree::CommandNode, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().collect::<Vec<_>>();
    let actual = match argtree::parse_multicommand(&args, root) {
        Ok(parsed) => render(&parsed),
        Err(err) => format!("error: {err}\n"),
    };
    expect.assert_eq(&actual);
}

#[test]
fn specs_are_valid() {
    argtree::validate_command(&fruit::fruit()).unwrap();
    argtree::validate_command(&fruit::typed()).unwrap();
    argtree::validate_multicommand(&zlib::zlib()).unwrap();
    argtree::validate_multicommand(&zlib::nested()).unwrap();
}

#[test]
fn fruit_quantities() {
    let fruit = fruit::fruit();
    check(
        &fruit,
        "-a 5",
        expect![[r#"
            id=0
            --apple 5
        "#]],
    );
    check(
        &fruit,
        "--banana -1 --apple 3",
        expect![[r#"
            id=0
            --banana -1
            --apple 3
        "#]],
    );
    check(
        &fruit,
        "-a",
        expect![[r#"
            error: expected a value for `--apple`
        "#]],
    );
    check(
        &fruit,
        "-b 2",
        expect![[r#"
            error: option is required: `--apple`
        "#]],
    );
    check(
        &fruit,
        "-a 1 -a 2",
        expect![[r#"
            error: option specified more than once: `--apple`
        "#]],
    );
    check(
        &fruit,
        "-c 1",
        expect![[r#"
            error: unknown option: `-c`
        "#]],
    );
    check(
        &fruit,
        "pear -a 1",
        expect![[r#"
            error: unexpected argument: expected 0, got 1
        "#]],
    );
}

#[test]
fn typed_arguments() {
    let typed = fruit::typed();
    check(
        &typed,
        "0x10 -5 plum --verbose",
        expect![[r#"
            id=0
            COUNT=Unsigned(16)
            DELTA=Signed(-5)
            NAME=String("plum")
            --verbose
        "#]],
    );
    check(
        &typed,
        "-1 -5 plum",
        expect![[r#"
            error: can't parse `COUNT`, invalid integer: `-1`
        "#]],
    );
    check(
        &typed,
        "1 2",
        expect![[r#"
            error: missing argument: expected 3, got 2
        "#]],
    );
    check(
        &typed,
        "1 2 plum --verbose 3",
        expect![[r#"
            error: expected an option before `3`
        "#]],
    );
}

#[test]
fn zlib_tree() {
    let zlib = zlib::zlib();
    check_multi(
        &zlib,
        "compress data.bin -l 9 -p",
        expect![[r#"
            id=1
            FILE=String("data.bin")
            --level 9
            --progress
        "#]],
    );
    check_multi(
        &zlib,
        "decompress data.bin.z",
        expect![[r#"
            id=2
            FILE=String("data.bin.z")
        "#]],
    );
    check_multi(
        &zlib,
        "",
        expect![[r#"
            error: a subcommand is required
        "#]],
    );
    check_multi(
        &zlib,
        "--level 9",
        expect![[r#"
            error: a subcommand is required
        "#]],
    );
    check_multi(
        &zlib,
        "inflate data.bin",
        expect![[r#"
            error: unknown command: `inflate`
        "#]],
    );
    check_multi(
        &zlib,
        "compress",
        expect![[r#"
            error: missing argument: expected 1, got 0
        "#]],
    );
}

#[test]
fn nested_tree() {
    let nested = zlib::nested();
    check_multi(
        &nested,
        "group leaf x",
        expect![[r#"
            id=7
            ITEM=String("x")
        "#]],
    );
    check_multi(
        &nested,
        "group",
        expect![[r#"
            error: a subcommand is required
        "#]],
    );
    check_multi(
        &nested,
        "unknown",
        expect![[r#"
            error: unknown command: `unknown`
        "#]],
    );

    let args = ["group"];
    let err = argtree::parse_multicommand(&args, &nested).unwrap_err();
    expect![[r#"
        Commands:
          leaf Touch a single leaf.
    "#]]
    .assert_eq(&err.help().unwrap_or_default());
}

#[test]
fn tree_limits_are_checked_before_descent() {
    let zlib = zlib::zlib();

    let parser = argtree::Parser::new(argtree::Config::default().with_max_tokens(1));
    let err = parser.parse_multicommand(&["compress", "data.bin"], &zlib).unwrap_err();
    assert_eq!(err.kind(), &argtree::ErrorKind::TooManyTokens { count: 2, max: 1 });
    assert!(matches!(err.scope(), Some(argtree::Scope::Node(it)) if std::ptr::eq(it, &zlib)));

    let parser = argtree::Parser::new(argtree::Config::default().with_max_token_len(4));
    let err = parser.parse_multicommand(&["compress", "a"], &zlib).unwrap_err();
    assert_eq!(err.kind(), &argtree::ErrorKind::TokenTooLong { index: 0, len: 8, max: 4 });
    assert!(matches!(err.scope(), Some(argtree::Scope::Node(it)) if std::ptr::eq(it, &zlib)));
    assert_eq!(err.category(), argtree::Category::ResourceLimit);
}
