#![no_std]

/*!
Low-level lexical layer for command-line handling. Takes care of the flag
declaration grammar (`"-f, --file <path>"`) and of walking raw argument
tokens, that sort of thing. No type handling happens here. Usually this is
too low level to use directly; the `mandate` crate builds the typed command
tree on top of it.

Everything operates on borrowed data: flag declarations are written as
string literals in the host program and live at least as long as the command
tree built from them, and raw arguments can be loaded early in `main` and
handled in borrowed form for the rest of the program. The `'decl` and `'arg`
lifetimes throughout refer to those two sources.
*/

mod flag;
mod token;

pub use flag::{FlagDecl, Placeholder, Requirement};
pub use token::{Tokens, is_option_like};
