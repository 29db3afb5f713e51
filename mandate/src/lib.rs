/*!
A builder-style command line parsing and dispatch library; mandate is how
your program takes command (of its line).

A host program declares a tree of named commands, each with typed options
and positional arguments, then hands over the raw argument vector. Mandate
resolves the command path, decodes and defaults the values, and invokes the
actions registered on every command along the path. Help text for the whole
tree comes for free.

If you're here, you're probably interested in [`Cli`], the top-level
builder and entry point, and [`Command`], the tree node it assembles.

```no_run
use mandate::{Cli, Command, Opt};

fn main() -> Result<(), mandate::DefinitionError> {
    let cli = Cli::new("fops", "File operations command line tool").command(
        Command::new("copy", "Copy a file")
            .alias("cp")
            .option(Opt::new("-s, --source <path>", "Source file path")?)
            .option(Opt::new("-d, --destination <path>", "Destination file path")?)
            .action(|invocation| {
                let source = invocation.option("source").unwrap();
                let destination = invocation.option("destination").unwrap();
                println!("copying {source} to {destination}");
            }),
    );

    cli.parse();
    Ok(())
}
```
*/

pub mod cli;
pub mod command;
pub mod errors;
pub mod parameter;
pub mod printers;
pub mod resolve;
pub mod value;

pub use cli::{Cli, Outcome};
pub use command::Command;
pub use errors::{DefinitionError, ParseError};
pub use parameter::{Opt, Positional};
pub use resolve::{Invocation, OptionValues, Strictness, resolve, validate_options};
pub use value::{Value, ValueKind, coerce};

pub use mandate_parser::{FlagDecl, Placeholder, Requirement, Tokens};
