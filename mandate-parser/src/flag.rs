use memchr::{memchr, memchr2_iter};

/**
Whether a declared value must be supplied when its parameter is used.

The bracket kind in a flag declaration carries this: `<path>` declares a
mandatory value, `[path]` an optional one.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Mandatory,
}

impl Requirement {
    #[inline]
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory)
    }
}

/**
The bracketed value placeholder in a flag declaration: the word between
`<...>` or `[...]`, plus the requirement the bracket kind implies.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'decl> {
    pub word: &'decl str,
    pub requirement: Requirement,
}

impl<'decl> Placeholder<'decl> {
    /**
    Scan a declaration for its first well-formed placeholder: a non-empty
    word of `[A-Za-z0-9_]` enclosed in angle or square brackets. Anything
    else (unbalanced brackets, interior punctuation) is skipped over, so
    `"<a b> [count]"` yields the `count` placeholder.
    */
    pub fn scan(decl: &'decl str) -> Option<Self> {
        let bytes = decl.as_bytes();

        for open in memchr2_iter(b'<', b'[', bytes) {
            let close = match bytes[open] {
                b'<' => b'>',
                _ => b']',
            };

            let Some(length) = memchr(close, &bytes[open + 1..]) else {
                continue;
            };

            let word = &decl[open + 1..open + 1 + length];

            if !word.is_empty() && word.bytes().all(is_word_byte) {
                return Some(Self {
                    word,
                    requirement: match bytes[open] {
                        b'<' => Requirement::Mandatory,
                        _ => Requirement::Optional,
                    },
                });
            }
        }

        None
    }
}

/**
A parsed flag declaration, such as `-f, --file <path>`.

The grammar is `[-<short>][, ]*[--<long-with-dashes>][ ]*[<required>|[optional]]`:
dash-name tokens separated by commas or spaces, followed by an optional
value placeholder. The first single-dash token becomes [`short`][Self::short]
and the first double-dash token becomes [`long`][Self::long]; unmatched or
extra tokens are ignored without error. Names are stored without their
leading dashes.

A declaration with no names and no placeholder parses "successfully" into
an all-`None` value; whether that is an error depends on what the
declaration is for, so the judgement is left to the caller.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDecl<'decl> {
    pub short: Option<&'decl str>,
    pub long: Option<&'decl str>,
    pub placeholder: Option<Placeholder<'decl>>,
}

impl<'decl> FlagDecl<'decl> {
    pub fn parse(decl: &'decl str) -> Self {
        let mut short = None;
        let mut long = None;

        for token in decl.split([',', ' ']) {
            if let Some(name) = token.strip_prefix("--") {
                if long.is_none() && is_long_name(name) {
                    long = Some(name);
                }
            } else if let Some(name) = token.strip_prefix('-') {
                if short.is_none() && is_short_name(name) {
                    short = Some(name);
                }
            }
        }

        Self {
            short,
            long,
            placeholder: Placeholder::scan(decl),
        }
    }

    /// True if the declaration contained no usable name and no placeholder.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none() && self.placeholder.is_none()
    }

    /**
    The name a result-map key should be derived from: the long name if one
    exists, else the short name, else the placeholder word.
    */
    #[must_use]
    pub fn key_source(&self) -> Option<&'decl str> {
        self.long
            .or(self.short)
            .or(self.placeholder.map(|placeholder| placeholder.word))
    }
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_short_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_word_byte)
}

fn is_long_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|byte| is_word_byte(byte) || byte == b'-')
}
