use std::fmt::{self, Write};

use indent_write::fmt::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::command::Command;
use crate::parameter::Positional;
use crate::value::Value;
use mandate_parser::Requirement;

/*
Overall structure:

Usage: fops [options] [command]

File operations command line tool

Options:
  -h, --help            Display help information
  -d, --depth <levels>  Traversal depth (default: 3)

Commands:
  1. copy: Copy a file
     Aliases: cp
     Options:
       -s, --source <path>  Source file path
  2. remove: Remove a file
     ...
     Commands:
       2.1. ...
*/

/// Render a command's complete help text, subtree included.
#[must_use]
pub fn render_help(command: &Command) -> String {
    let mut out = String::new();
    write_help(&mut out, command).expect("writing help to a String can't fail");
    out
}

pub fn write_help(out: &mut dyn Write, command: &Command) -> fmt::Result {
    write_usage(out, command)?;

    if !command.description().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", textwrap::fill(command.description(), 78))?;
    }

    write_sections(out, command, "")
}

/// `Usage: name [options] <positionals...> [command]`, with only the parts
/// the command actually has.
fn write_usage(out: &mut dyn Write, command: &Command) -> fmt::Result {
    write!(out, "Usage: {}", command.name())?;

    if !command.options().is_empty() {
        write!(out, " [options]")?;
    }

    for positional in command.positionals() {
        write!(out, " {}", positional_label(positional))?;
    }

    if command.subcommands().next().is_some() {
        write!(out, " [command]")?;
    }

    writeln!(out)
}

/**
The body sections for one command node: aliases, arguments, options, and
numbered subcommands. Subcommands recurse with one deeper indent level and
a dotted index path (`1.`, `1.2.`, ...); the prefix is passed down, never
stored in the tree.
*/
fn write_sections(out: &mut dyn Write, command: &Command, index_path: &str) -> fmt::Result {
    if !command.aliases().is_empty() {
        writeln!(out, "Aliases: {}", command.aliases().iter().join_with(", "))?;
    }

    if !command.positionals().is_empty() {
        writeln!(out, "\nArguments:")?;
        let mut body = IndentWriter::new("  ", &mut *out);

        let labels: Vec<String> = command
            .positionals()
            .iter()
            .map(|positional| positional_label(positional).to_string())
            .collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0);

        for (label, positional) in labels.iter().zip(command.positionals()) {
            writeln!(
                body,
                "{label:<width$}  {description}{default}",
                description = positional.description(),
                default = default_note(positional.default_value()),
            )?;
        }
    }

    if !command.options().is_empty() {
        writeln!(out, "\nOptions:")?;
        let mut body = IndentWriter::new("  ", &mut *out);

        let width = command
            .options()
            .iter()
            .map(|option| option.decl().len())
            .max()
            .unwrap_or(0);

        for option in command.options() {
            writeln!(
                body,
                "{decl:<width$}  {description}{default}",
                decl = option.decl(),
                description = option.description(),
                default = default_note(option.default_value()),
            )?;
        }
    }

    if command.subcommands().next().is_some() {
        writeln!(out, "\nCommands:")?;
        let mut body = IndentWriter::new("  ", &mut *out);

        for (index, child) in command.subcommands().enumerate() {
            let label = format!("{index_path}{}", index + 1);

            writeln!(
                body,
                "{label}. {name}: {description}",
                name = child.name(),
                description = child.description(),
            )?;

            let mut nested = IndentWriter::new("   ", &mut body);
            let nested: &mut dyn Write = &mut nested;
            write_sections(nested, child, &format!("{label}."))?;
        }
    }

    Ok(())
}

fn positional_label(positional: &Positional) -> impl fmt::Display + '_ {
    lazy_format!(match (positional.requirement()) {
        Requirement::Mandatory => ("<{key}>", key = positional.key()),
        Requirement::Optional => ("[{key}]", key = positional.key()),
    })
}

fn default_note(default: Option<&Value>) -> impl fmt::Display + '_ {
    lazy_format!(match (default) {
        Some(value) => " (default: {value})",
        None => "",
    })
}

/// One-line diagnostic for the boundary: the error, then the help text of
/// the command the user was talking to.
pub fn write_diagnostic(
    out: &mut dyn Write,
    error: &dyn std::error::Error,
    command: &Command,
) -> fmt::Result {
    writeln!(out, "error: {error}")?;
    writeln!(out)?;
    write_help(out, command)
}
