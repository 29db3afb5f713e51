/*!
The resolution engine: walks a raw token list against a command tree and
produces one [`Invocation`] bundle per command-path level actually
traversed.

The walk is a single left-to-right pass. A bare word descends into a
subcommand when the current command has a matching route, and otherwise
fills the current command's next positional slot. A dash-prefixed token is
looked up on the deepest command first, then on the root (so globally
registered options keep working inside subcommands), and its decoded value
lands in the bundle of whichever command declared it. After the walk,
declared-but-unsupplied options and positionals fall back to their
defaults, and anything mandatory that is still unfilled is reported against
the specific flag or placeholder at fault.

What happens to tokens that match nothing is the [`Strictness`] policy:
strict resolution rejects them, lenient resolution absorbs bare words into
the argument list and skips unknown options entirely.
*/

use std::collections::BTreeMap;
use std::fmt;
use std::ptr;

use mandate_parser::{Tokens, is_option_like};

use crate::command::Command;
use crate::errors::ParseError;
use crate::parameter::Opt;
use crate::value::{self, Value};

/**
What to do with tokens that match nothing in the tree.

Strict resolution treats an unmatched option as [`ParseError::UnknownOption`]
and an unmatched bare word (once positional slots are exhausted) as
[`ParseError::UnknownCommand`]. Lenient resolution absorbs the bare word as
an extra string argument and silently skips the unknown option; hosts that
still want validation afterwards can run [`validate_options`].
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    #[default]
    Strict,
    Lenient,
}

/// Decoded option values for one command, keyed by each option's derived key.
pub type OptionValues<'cmd> = BTreeMap<&'cmd str, Value>;

/**
The resolved bundle for one level of the command path: the command that was
reached, the decoded option values assigned at that level, and the
positional argument values it consumed.
*/
pub struct Invocation<'cmd> {
    command: &'cmd Command,
    options: OptionValues<'cmd>,
    args: Vec<Value>,
}

impl<'cmd> Invocation<'cmd> {
    fn new(command: &'cmd Command) -> Self {
        Self {
            command,
            options: OptionValues::new(),
            args: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn command(&self) -> &'cmd Command {
        self.command
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &OptionValues<'cmd> {
        &self.options
    }

    /// The decoded value stored under an option's derived key.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }
}

/// Equality compares command *identity*, not command contents.
impl PartialEq for Invocation<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.command, other.command)
            && self.options == other.options
            && self.args == other.args
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("command", &self.command.name())
            .field("options", &self.options)
            .field("args", &self.args)
            .finish()
    }
}

/**
Resolve a token list against a command tree.

Returns the ordered bundle list for the traversed path; the root bundle is
always present, so a flat invocation is simply a one-element list.
*/
pub fn resolve<'cmd, 'arg, I>(
    root: &'cmd Command,
    tokens: I,
    strictness: Strictness,
) -> Result<Vec<Invocation<'cmd>>, ParseError>
where
    I: IntoIterator<Item = &'arg str>,
{
    let mut path = vec![Invocation::new(root)];
    let mut tokens = Tokens::new(tokens.into_iter());

    while let Some(token) = tokens.next_token() {
        if is_option_like(token) {
            let Some((depth, option)) = find_option_along_path(&path, token) else {
                match strictness {
                    Strictness::Strict => {
                        return Err(ParseError::UnknownOption(token.to_owned()));
                    }
                    Strictness::Lenient => continue,
                }
            };

            let decoded = if option.takes_value() {
                match tokens.take_value() {
                    Some(raw) => value::coerce(option.kind(), raw, option.default_value()),
                    None if option.requirement().is_mandatory() => {
                        return Err(ParseError::MissingRequiredValue {
                            flag: option.decl().to_owned(),
                        });
                    }
                    // optional value, none supplied: presence alone is truthy
                    None => Value::Bool(true),
                }
            } else {
                Value::Bool(true)
            };

            path[depth].options.insert(option.key(), decoded);
        } else {
            let deepest = path.len() - 1;
            let current: &'cmd Command = path[deepest].command;

            if let Some(child) = current.find_subcommand(token) {
                path.push(Invocation::new(child));
            } else if path[deepest].args.len() < current.positionals().len() {
                let slot = &current.positionals()[path[deepest].args.len()];
                path[deepest].args.push(slot.coerce(token));
            } else {
                match strictness {
                    Strictness::Strict => {
                        return Err(ParseError::UnknownCommand(token.to_owned()));
                    }
                    Strictness::Lenient => {
                        path[deepest].args.push(Value::Str(token.to_owned()));
                    }
                }
            }
        }
    }

    for invocation in &mut path {
        finish(invocation)?;
    }

    Ok(path)
}

/**
Option lookup for a dash token: the deepest command first, then the root as
the fallback for globally registered options. Returns the path depth whose
bundle should receive the value.
*/
fn find_option_along_path<'cmd>(
    path: &[Invocation<'cmd>],
    token: &str,
) -> Option<(usize, &'cmd Opt)> {
    let deepest = path.len() - 1;
    let current: &'cmd Command = path[deepest].command;

    if let Some(option) = current.find_option(token) {
        return Some((deepest, option));
    }

    if deepest > 0 {
        let root: &'cmd Command = path[0].command;
        return root.find_option(token).map(|option| (0, option));
    }

    None
}

/**
Apply defaults to everything left unsupplied in a bundle, then report any
mandatory entry that is still unfilled.

Positional defaults fill the unfilled tail in declaration order; the fill
stops at the first optional slot with no default, since positional values
are matched to slots by index and cannot skip a hole.
*/
fn finish(invocation: &mut Invocation<'_>) -> Result<(), ParseError> {
    let command = invocation.command;

    for option in command.options() {
        if invocation.options.contains_key(option.key()) {
            continue;
        }

        if let Some(default) = option.default_value() {
            invocation.options.insert(option.key(), default.clone());
        } else if option.takes_value() && option.requirement().is_mandatory() {
            return Err(ParseError::MissingRequiredValue {
                flag: option.dashed_name(),
            });
        }
    }

    for positional in command.positionals().iter().skip(invocation.args.len()) {
        if let Some(default) = positional.default_value() {
            invocation.args.push(default.clone());
        } else if positional.requirement().is_mandatory() {
            return Err(ParseError::MissingRequiredValue {
                flag: format!("<{}>", positional.key()),
            });
        } else {
            break;
        }
    }

    Ok(())
}

/**
Check an assembled option map against a command's declarations: every key
must belong to a declared option, and every mandatory-value option must be
present. Useful after lenient resolution, which skips unknown options
instead of rejecting them.
*/
pub fn validate_options(command: &Command, options: &OptionValues<'_>) -> Result<(), ParseError> {
    for key in options.keys() {
        if !command.options().iter().any(|option| option.key() == *key) {
            return Err(ParseError::UnknownOption((*key).to_owned()));
        }
    }

    for option in command.options() {
        if option.takes_value()
            && option.requirement().is_mandatory()
            && !options.contains_key(option.key())
        {
            return Err(ParseError::MissingRequiredValue {
                flag: option.dashed_name(),
            });
        }
    }

    Ok(())
}
