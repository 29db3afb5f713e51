/*!
The top-level entry point a host program builds its interface with.

[`Cli`] owns the root command, injects the help surface (a `-h, --help`
option on the root and on every command added through
[`command`][Cli::command], plus a built-in `help` subcommand that accepts
`-c, --command [name]` to target a specific subcommand), and provides the
parse-and-dispatch cycle.

Two boundaries are offered. [`try_parse_from`][Cli::try_parse_from] is the
pure one: it resolves, dispatches, and returns an [`Outcome`] or a
[`ParseError`], printing nothing and never exiting, for hosts that want to
decide those things themselves. [`parse`][Cli::parse] and
[`parse_from`][Cli::parse_from] are the batteries-included convenience:
help goes to stdout and exits 0, user errors go to stderr as a one-line
diagnostic followed by the root help text and exit 1.
*/

use std::env;
use std::process;
use std::ptr;

use crate::command::Command;
use crate::errors::ParseError;
use crate::parameter::Opt;
use crate::printers;
use crate::resolve::{Invocation, Strictness, resolve};
use crate::value::Value;

/// The name the built-in help subcommand is registered under.
const HELP_COMMAND: &str = "help";

/// What a successful parse cycle did.
#[derive(Debug, PartialEq)]
pub enum Outcome<'cli> {
    /**
    The path's actions were invoked, one bundle per traversed level, in
    path order. The bundles are returned for hosts that want to inspect
    the resolution after the fact.
    */
    Dispatched(Vec<Invocation<'cli>>),

    /// A help flag or the help command was used; nothing was dispatched.
    Help(String),
}

pub struct Cli {
    root: Command,
    strictness: Strictness,
}

impl Cli {
    /**
    Create an interface with a root command carrying the given name and
    description. The root recognizes `-h, --help` and a `help` subcommand
    from the start.
    */
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let help = Command::new(
            HELP_COMMAND,
            "Display help for this program or a specific command",
        )
        .option(
            Opt::new("-c, --command [name]", "The command to display help for")
                .expect("the built-in help flag declaration is valid"),
        );

        let root = Command::new(name, description)
            .option(help_option())
            .subcommand(help);

        Self {
            root,
            strictness: Strictness::default(),
        }
    }

    /**
    Attach a command under the root, injecting the `-h, --help` option into
    it first. Injection appends, so an option the command already declared
    always wins lookups against the injected one.
    */
    #[must_use]
    pub fn command(mut self, command: Command) -> Self {
        self.root = self.root.subcommand(command.option(help_option()));
        self
    }

    /// Add a root-level option, also matched as a fallback from subcommands.
    #[must_use]
    pub fn option(mut self, option: Opt) -> Self {
        self.root = self.root.option(option);
        self
    }

    /// Select how unmatched tokens are treated. Strict is the default.
    #[must_use]
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Render the whole interface's help text.
    #[must_use]
    pub fn help(&self) -> String {
        self.root.help()
    }

    /**
    The full parse-and-dispatch cycle, without printing or exiting.

    Help short-circuits dispatch: if any traversed level consumed the help
    flag, the deepest resolved command's help is returned; if the path
    lands on the built-in `help` command, the help of the command named by
    `--command` (or of the root) is returned. Otherwise every level's
    registered actions fire in path order, each with its own bundle, and
    the bundles are handed back.
    */
    pub fn try_parse_from<'cli, 'arg, I>(&'cli self, tokens: I) -> Result<Outcome<'cli>, ParseError>
    where
        I: IntoIterator<Item = &'arg str>,
    {
        let invocations = resolve(&self.root, tokens, self.strictness)?;

        let deepest = &invocations[invocations.len() - 1];

        let help_flagged = invocations
            .iter()
            .any(|invocation| invocation.option("help") == Some(&Value::Bool(true)));
        if help_flagged {
            return Ok(Outcome::Help(deepest.command().help()));
        }

        // the builtin help command is always the first child attached in
        // `new`; a user command registered under the same name takes over
        // the route and dispatches normally instead
        if let Some(builtin) = self.root.subcommands().next()
            && ptr::eq(deepest.command(), builtin)
        {
            let target = match deepest.option("command").and_then(Value::as_str) {
                Some(name) => self
                    .root
                    .find_subcommand(name)
                    .ok_or_else(|| ParseError::UnknownCommand(name.to_owned()))?,
                None => &self.root,
            };
            return Ok(Outcome::Help(target.help()));
        }

        for invocation in &invocations {
            invocation.command().dispatch(invocation);
        }

        Ok(Outcome::Dispatched(invocations))
    }

    /**
    Parse the process's own argument vector (program name stripped) and
    dispatch, printing and exiting at the boundary as described above.
    */
    pub fn parse(&self) {
        let tokens: Vec<String> = env::args().skip(1).collect();
        self.parse_from(tokens.iter().map(String::as_str));
    }

    /// Like [`parse`][Self::parse], over an explicit token list.
    pub fn parse_from<'arg, I>(&self, tokens: I)
    where
        I: IntoIterator<Item = &'arg str>,
    {
        match self.try_parse_from(tokens) {
            Ok(Outcome::Dispatched(_)) => {}
            Ok(Outcome::Help(text)) => {
                print!("{text}");
                process::exit(0);
            }
            Err(error) => {
                let mut rendered = String::new();
                printers::write_diagnostic(&mut rendered, &error, &self.root)
                    .expect("writing a diagnostic to a String can't fail");
                eprint!("{rendered}");
                process::exit(1);
            }
        }
    }
}

fn help_option() -> Opt {
    Opt::new("-h, --help", "Display help information")
        .expect("the built-in help flag declaration is valid")
}
