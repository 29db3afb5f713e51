/*!
Typed descriptors for the two kinds of parameter a command can declare:
dash-named options and positional arguments.

Both are immutable value objects, built once while the command tree is
defined and read-only from then on. The flag declaration grammar itself
lives in [`mandate_parser`]; this module adds the things the lexical layer
deliberately doesn't know about: derived result-map keys, value types,
defaults, and descriptions.
*/

use mandate_parser::{FlagDecl, Requirement};

use crate::errors::DefinitionError;
use crate::value::{self, Value, ValueKind};

/**
A dash-named option, declared with a flag string such as `-f, --file <path>`.

The declaration determines everything structural: the short and long names,
whether the option takes a value (any placeholder) and whether that value is
mandatory (`<...>` rather than `[...]`), and the key the decoded value is
stored under in a result bundle. The key comes from the long name with
kebab-case converted to camelCase (`--dry-run` stores under `dryRun`), else
from the short name, else from the placeholder word itself.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Opt {
    decl: String,
    short: Option<String>,
    long: Option<String>,
    key: String,
    placeholder: Option<String>,
    requirement: Requirement,
    kind: ValueKind,
    description: String,
    default: Option<Value>,
}

impl Opt {
    /**
    Parse a flag declaration into an option descriptor.

    Fails with [`DefinitionError::InvalidFlag`] when the declaration
    contains neither a dash-name token nor a placeholder word, because no
    key could ever be derived for it.
    */
    pub fn new(
        decl: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DefinitionError> {
        let decl = decl.into();
        let parsed = FlagDecl::parse(&decl);

        let key = match (parsed.long, parsed.key_source()) {
            (Some(long), _) => camel_case(long),
            (None, Some(source)) => source.to_owned(),
            (None, None) => return Err(DefinitionError::InvalidFlag { decl }),
        };

        Ok(Self {
            short: parsed.short.map(str::to_owned),
            long: parsed.long.map(str::to_owned),
            key,
            placeholder: parsed
                .placeholder
                .map(|placeholder| placeholder.word.to_owned()),
            requirement: parsed
                .placeholder
                .map(|placeholder| placeholder.requirement)
                .unwrap_or(Requirement::Optional),
            kind: ValueKind::default(),
            description: description.into(),
            default: None,
            decl,
        })
    }

    /// Declare the type the option's value should be coerced to.
    #[must_use]
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Declare a default, used when the option is absent or its value is garbage.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The canonical declaration string, as written by the host.
    #[inline]
    #[must_use]
    pub fn decl(&self) -> &str {
        &self.decl
    }

    /// The short name, without its dash.
    #[inline]
    #[must_use]
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long name, without its dashes.
    #[inline]
    #[must_use]
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The camelCase key the decoded value is stored under.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The placeholder word, when the option declares a value.
    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// True when the option consumes a value token (it declared a placeholder).
    #[inline]
    #[must_use]
    pub fn takes_value(&self) -> bool {
        self.placeholder.is_some()
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /**
    The most recognizable dashed spelling of this option, for diagnostics:
    `--long` when a long name exists, else `-short`, else the bare key.
    */
    #[must_use]
    pub fn dashed_name(&self) -> String {
        match (self.long(), self.short()) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => self.key.clone(),
        }
    }

    /**
    Structural lookup match. Deliberately permissive: a lookup token matches
    the short or long name either with or without its leading dashes, so
    `-f`, `--file`, `f`, and `file` are all equivalent lookups against an
    option declared as `-f, --file`.
    */
    pub(crate) fn matches(&self, token: &str) -> bool {
        if let Some(short) = self.short()
            && (token == short || token.strip_prefix('-') == Some(short))
        {
            return true;
        }

        if let Some(long) = self.long()
            && (token == long || token.strip_prefix("--") == Some(long))
        {
            return true;
        }

        false
    }
}

/**
A positional argument, declared with a placeholder-only string: `<key>` for
a mandatory argument, `[key]` for an optional one.

Positionals are consumed in declaration order rather than matched by flag,
so here the placeholder word is not optional: a declaration without one is
a [`DefinitionError::InvalidFlag`] at definition time, not a silent
default.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Positional {
    key: String,
    requirement: Requirement,
    kind: ValueKind,
    description: String,
    default: Option<Value>,
}

impl Positional {
    pub fn new(
        decl: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DefinitionError> {
        let decl = decl.into();

        let Some(placeholder) = FlagDecl::parse(&decl).placeholder else {
            return Err(DefinitionError::InvalidFlag { decl });
        };

        Ok(Self {
            key: placeholder.word.to_owned(),
            requirement: placeholder.requirement,
            kind: ValueKind::default(),
            description: description.into(),
            default: None,
        })
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Decode a raw token against this positional's declared type.
    #[must_use]
    pub fn coerce(&self, raw: &str) -> Value {
        value::coerce(self.kind, raw, self.default.as_ref())
    }
}

/// `dry-run` becomes `dryRun`; the first segment keeps its case.
fn camel_case(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut capitalize = false;

    for ch in name.chars() {
        if ch == '-' {
            capitalize = true;
        } else if capitalize {
            key.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            key.push(ch);
        }
    }

    key
}
