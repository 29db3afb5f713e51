/*!
Error types for the two failure domains of a command-line interface: bugs in
the interface's own definition, and bad input from the user.

The split matters because the two propagate differently. A
[`DefinitionError`] means the host program declared something nonsensical;
it is surfaced immediately while the command tree is being built, and the
right response is to fail loudly during development. A [`ParseError`] means
the *user* typed something the tree doesn't accept; it should be caught at
the boundary, rendered as a short diagnostic plus the relevant help text,
and never escape as a raw panic.
*/

use thiserror::Error;

/// A mistake in the command-line interface's own declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /**
    A flag declaration had neither a usable dash-name token nor a bracketed
    placeholder word, so there is nothing to derive a key from.
    */
    #[error("invalid flag declaration {decl:?}: no option name or placeholder found")]
    InvalidFlag { decl: String },

    /// A value type tag outside of `string`, `number`, and `boolean`.
    #[error("unknown value type {tag:?} (expected \"string\", \"number\", or \"boolean\")")]
    UnknownType { tag: String },
}

/// A problem with the arguments the user actually typed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A bare word matched no subcommand and no positional slot.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A dash-prefixed token matched no option on the command or the root.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A mandatory option or positional argument ended up without a value.
    #[error("the option {flag:?} requires a value, but none was provided")]
    MissingRequiredValue { flag: String },
}
