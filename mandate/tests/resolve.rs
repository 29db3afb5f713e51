use std::ptr;

use mandate::{
    Command, Opt, ParseError, Positional, Strictness, Value, ValueKind, resolve, validate_options,
};

fn push_tree() -> Command {
    Command::new("git", "A terrible content tracker").subcommand(
        Command::new("push", "Update remote refs")
            .option(Opt::new("-m, --message <msg>", "The message to send").unwrap()),
    )
}

#[test]
fn subcommand_with_required_option() {
    let root = push_tree();
    let bundles = resolve(&root, ["push", "-m", "hello"], Strictness::Strict).unwrap();

    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].command().name(), "git");
    assert!(bundles[0].options().is_empty());

    let push = &bundles[1];
    assert_eq!(push.command().name(), "push");
    assert_eq!(push.option("message"), Some(&Value::Str("hello".to_owned())));
}

#[test]
fn omitted_required_option_is_an_error() {
    let root = push_tree();
    let error = resolve(&root, ["push"], Strictness::Strict).unwrap_err();

    assert_eq!(
        error,
        ParseError::MissingRequiredValue {
            flag: "--message".to_owned()
        }
    );
}

#[test]
fn required_option_with_no_value_reports_the_declaration() {
    let root = push_tree();
    let error = resolve(&root, ["push", "-m"], Strictness::Strict).unwrap_err();

    assert_eq!(
        error,
        ParseError::MissingRequiredValue {
            flag: "-m, --message <msg>".to_owned()
        }
    );
}

#[test]
fn option_refuses_an_option_like_value() {
    let root = push_tree();
    let error = resolve(&root, ["push", "-m", "-x"], Strictness::Strict).unwrap_err();

    assert_eq!(
        error,
        ParseError::MissingRequiredValue {
            flag: "-m, --message <msg>".to_owned()
        }
    );
}

#[test]
fn aliases_resolve_to_the_same_command() {
    let root = Command::new("root", "")
        .subcommand(Command::new("list", "List things").alias("ls"));

    let by_name = resolve(&root, ["list"], Strictness::Strict).unwrap();
    let by_alias = resolve(&root, ["ls"], Strictness::Strict).unwrap();

    assert!(ptr::eq(by_name[1].command(), by_alias[1].command()));
}

#[test]
fn unknown_word_is_rejected_when_strict() {
    let root = push_tree();
    let error = resolve(&root, ["frobnicate"], Strictness::Strict).unwrap_err();

    assert_eq!(error, ParseError::UnknownCommand("frobnicate".to_owned()));
}

#[test]
fn unknown_word_is_absorbed_when_lenient() {
    let root = push_tree();
    let bundles = resolve(&root, ["frobnicate"], Strictness::Lenient).unwrap();

    assert_eq!(bundles[0].args(), [Value::Str("frobnicate".to_owned())]);
}

#[test]
fn unknown_option_is_rejected_when_strict_and_skipped_when_lenient() {
    let root = push_tree();

    let error = resolve(&root, ["--wat"], Strictness::Strict).unwrap_err();
    assert_eq!(error, ParseError::UnknownOption("--wat".to_owned()));

    let bundles = resolve(&root, ["--wat"], Strictness::Lenient).unwrap();
    assert!(bundles[0].options().is_empty());
    assert!(bundles[0].args().is_empty());
}

#[test]
fn nested_path_produces_one_bundle_per_level() {
    let root = Command::new("remote", "Manage remotes").subcommand(
        Command::new("add", "Add a remote")
            .option(Opt::new("-f, --force", "Overwrite if present").unwrap()),
    );

    let bundles = resolve(&root, ["add", "-f"], Strictness::Strict).unwrap();

    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].command().name(), "remote");
    assert!(bundles[0].options().is_empty());
    assert_eq!(bundles[1].command().name(), "add");
    assert_eq!(bundles[1].option("force"), Some(&Value::Bool(true)));
}

#[test]
fn options_interleave_across_levels() {
    let root = Command::new("test", "")
        .option(Opt::new("-f, --flag", "").unwrap())
        .subcommand(
            Command::new("subtest", "").option(Opt::new("-s, --subflag", "").unwrap()),
        );

    let bundles = resolve(
        &root,
        ["-f", "subtest", "-s", "hi", "--flag", "hi"],
        Strictness::Lenient,
    )
    .unwrap();

    // --flag matched via the root fallback from inside the subcommand, so
    // its value lives in the root's bundle
    assert_eq!(bundles[0].option("flag"), Some(&Value::Bool(true)));
    assert_eq!(bundles[1].option("subflag"), Some(&Value::Bool(true)));
}

#[test]
fn omitted_option_with_default_round_trips() {
    let root = Command::new("serve", "").option(
        Opt::new("-p, --port [port]", "Port to listen on")
            .unwrap()
            .with_kind(ValueKind::Number)
            .with_default(8080_i64),
    );

    let bundles = resolve(&root, [] as [&str; 0], Strictness::Strict).unwrap();
    assert_eq!(bundles[0].option("port"), Some(&Value::Number(8080.0)));
}

#[test]
fn last_assignment_wins_per_key() {
    let root = Command::new("test", "")
        .option(Opt::new("-f, --file <path>", "").unwrap());

    let bundles = resolve(
        &root,
        ["-f", "first", "--file", "second"],
        Strictness::Strict,
    )
    .unwrap();

    assert_eq!(
        bundles[0].option("file"),
        Some(&Value::Str("second".to_owned()))
    );
}

#[test]
fn positionals_fill_in_declaration_order() {
    let root = Command::new("copy", "")
        .positional(Positional::new("<source>", "").unwrap())
        .positional(Positional::new("[destination]", "").unwrap().with_default("."));

    let bundles = resolve(&root, ["a.txt", "b.txt"], Strictness::Strict).unwrap();
    assert_eq!(
        bundles[0].args(),
        [
            Value::Str("a.txt".to_owned()),
            Value::Str("b.txt".to_owned())
        ]
    );

    let defaulted = resolve(&root, ["a.txt"], Strictness::Strict).unwrap();
    assert_eq!(
        defaulted[0].args(),
        [Value::Str("a.txt".to_owned()), Value::Str(".".to_owned())]
    );
}

#[test]
fn missing_required_positional_names_its_placeholder() {
    let root = Command::new("copy", "")
        .positional(Positional::new("<source>", "").unwrap());

    let error = resolve(&root, [] as [&str; 0], Strictness::Strict).unwrap_err();
    assert_eq!(
        error,
        ParseError::MissingRequiredValue {
            flag: "<source>".to_owned()
        }
    );
}

#[test]
fn numeric_option_values_are_coerced() {
    let root = Command::new("serve", "").option(
        Opt::new("-p, --port <port>", "")
            .unwrap()
            .with_kind(ValueKind::Number)
            .with_default(8080_i64),
    );

    let bundles = resolve(&root, ["-p", "3000"], Strictness::Strict).unwrap();
    assert_eq!(bundles[0].option("port"), Some(&Value::Number(3000.0)));

    // garbage numeric input silently takes the default
    let bundles = resolve(&root, ["-p", "banana"], Strictness::Strict).unwrap();
    assert_eq!(bundles[0].option("port"), Some(&Value::Number(8080.0)));
}

#[test]
fn optional_value_option_degrades_to_presence() {
    let root = Command::new("build", "")
        .option(Opt::new("-j, --jobs [count]", "").unwrap());

    let bundles = resolve(&root, ["--jobs"], Strictness::Strict).unwrap();
    assert_eq!(bundles[0].option("jobs"), Some(&Value::Bool(true)));
}

#[test]
fn resolution_is_idempotent() {
    let root = push_tree();

    let first = resolve(&root, ["push", "-m", "hello"], Strictness::Strict).unwrap();
    let second = resolve(&root, ["push", "-m", "hello"], Strictness::Strict).unwrap();

    assert_eq!(first, second);
}

#[test]
fn validate_options_flags_unknown_and_missing_keys() {
    let root = Command::new("push", "")
        .option(Opt::new("-m, --message <msg>", "").unwrap());

    let bundles = resolve(&root, ["-m", "hi"], Strictness::Strict).unwrap();
    assert_eq!(validate_options(&root, bundles[0].options()), Ok(()));

    let mut options = bundles[0].options().clone();
    options.insert("rogue", Value::Bool(true));
    assert_eq!(
        validate_options(&root, &options),
        Err(ParseError::UnknownOption("rogue".to_owned()))
    );

    options.remove("rogue");
    options.remove("message");
    assert_eq!(
        validate_options(&root, &options),
        Err(ParseError::MissingRequiredValue {
            flag: "--message".to_owned()
        })
    );
}
