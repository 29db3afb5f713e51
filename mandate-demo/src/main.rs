use anyhow::Result;
use mandate::{Cli, Command, Opt, Positional, Value, ValueKind};

/// A little file-operations CLI exercising the whole surface: aliased
/// commands, typed options with defaults, positionals, nested subcommands,
/// and per-level actions. Try `fops --help`, `fops copy -s a.txt -d b.txt`,
/// `fops tag add important notes.txt`, or `fops help -c remove`.
fn main() -> Result<()> {
    let cli = Cli::new("fops", "File operations command line tool")
        .option(Opt::new("-v, --verbose", "Explain what is being done")?)
        .command(
            Command::new("copy", "Copy a file")
                .alias("cp")
                .option(Opt::new("-s, --source <path>", "Source file path")?)
                .option(Opt::new("-d, --destination <path>", "Destination file path")?)
                .action(|invocation| {
                    let source = invocation.option("source").unwrap();
                    let destination = invocation.option("destination").unwrap();
                    println!("copying {source} -> {destination}");
                }),
        )
        .command(
            Command::new("remove", "Remove a file")
                .alias("rm")
                .option(Opt::new("-f, --force", "Ignore nonexistent files")?)
                .positional(Positional::new("<file>", "File path to remove")?)
                .action(|invocation| {
                    let file = invocation.arg(0).unwrap();
                    if invocation.option("force") == Some(&Value::Bool(true)) {
                        println!("removing {file} (forced)");
                    } else {
                        println!("removing {file}");
                    }
                }),
        )
        .command(
            Command::new("list", "List directory contents")
                .alias("ls")
                .option(
                    Opt::new("-d, --depth <levels>", "How deep to recurse")?
                        .with_kind(ValueKind::Number)
                        .with_default(1_i64),
                )
                .positional(Positional::new("[directory]", "Directory to list")?.with_default("."))
                .action(|invocation| {
                    let directory = invocation.arg(0).unwrap();
                    let depth = invocation.option("depth").unwrap();
                    println!("listing {directory} to depth {depth}");
                }),
        )
        .command(
            Command::new("tag", "Manage file tags")
                .action(|_invocation| println!("tagging..."))
                .subcommand(
                    Command::new("add", "Attach a tag to a file")
                        .positional(Positional::new("<tag>", "The tag to attach")?)
                        .positional(Positional::new("<file>", "The file to tag")?)
                        .action(|invocation| {
                            let tag = invocation.arg(0).unwrap();
                            let file = invocation.arg(1).unwrap();
                            println!("tagged {file} with {tag}");
                        }),
                )
                .subcommand(
                    Command::new("clear", "Remove every tag from a file")
                        .positional(Positional::new("<file>", "The file to clear")?)
                        .action(|invocation| {
                            println!("cleared tags from {}", invocation.arg(0).unwrap());
                        }),
                ),
        );

    cli.parse();
    Ok(())
}
