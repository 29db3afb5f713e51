/*!
The command tree. A [`Command`] is a named, described node owning its
options, its positional declarations, its aliases, its child commands, and
the action callbacks registered against it.

The whole tree is built once, top-down, while the interface is being
defined, and is read-only during parsing and dispatch. Children are owned
by value in declaration order; a separate route table maps every canonical
name *and* every alias to the owning slot, so `list` and `ls` resolve to
the identical node. Route entries for a child and its aliases are inserted
together, which is what keeps the table free of dangling aliases.
*/

use std::collections::HashMap;
use std::fmt;

use crate::parameter::{Opt, Positional};
use crate::printers;
use crate::resolve::Invocation;

/// A callback registered with [`Command::action`].
pub type Action = Box<dyn Fn(&Invocation<'_>)>;

pub struct Command {
    name: String,
    description: String,
    aliases: Vec<String>,
    options: Vec<Opt>,
    positionals: Vec<Positional>,
    children: Vec<Command>,
    routes: HashMap<String, usize>,
    actions: Vec<Action>,
}

impl Command {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
            options: Vec::new(),
            positionals: Vec::new(),
            children: Vec::new(),
            routes: HashMap::new(),
            actions: Vec::new(),
        }
    }

    /**
    Add alternate names for this command.

    Aliases take effect when the command is attached to a parent via
    [`subcommand`][Self::subcommand]; adding aliases after attachment does
    not retroactively register them anywhere.
    */
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /**
    Append an option. Options accumulate in declaration order with no
    de-duplication; when declarations collide, lookup by flag text finds
    the first match and value assignment under a shared key keeps the last
    write.
    */
    #[must_use]
    pub fn option(mut self, option: Opt) -> Self {
        self.options.push(option);
        self
    }

    /// Append a positional declaration, consumed in declaration order.
    #[must_use]
    pub fn positional(mut self, positional: Positional) -> Self {
        self.positionals.push(positional);
        self
    }

    /**
    Attach a child command, registering it under its own name and under
    every alias it declared. A later child with a colliding name or alias
    takes over that route, matching map-insertion semantics.
    */
    #[must_use]
    pub fn subcommand(mut self, command: Command) -> Self {
        let slot = self.children.len();

        self.routes.insert(command.name.clone(), slot);
        for alias in &command.aliases {
            self.routes.insert(alias.clone(), slot);
        }

        self.children.push(command);
        self
    }

    /**
    Register an action to run when this command is dispatched. Commands can
    hold any number of actions; they all fire, in registration order.
    */
    #[must_use]
    pub fn action(mut self, action: impl Fn(&Invocation<'_>) + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    #[inline]
    #[must_use]
    pub fn positionals(&self) -> &[Positional] {
        &self.positionals
    }

    /// The owned children, in attachment order (aliases don't repeat).
    #[inline]
    pub fn subcommands(&self) -> impl Iterator<Item = &Command> {
        self.children.iter()
    }

    /**
    Find the first option matching a lookup token. Matching is permissive
    (`-f`, `--file`, `f`, `file` are equivalent); with duplicate
    declarations, declaration order wins.
    */
    #[must_use]
    pub fn find_option(&self, token: &str) -> Option<&Opt> {
        self.options.iter().find(|option| option.matches(token))
    }

    /// Look up a child by canonical name or alias.
    #[must_use]
    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.routes.get(name).map(|&slot| &self.children[slot])
    }

    /// Fire every registered action, in registration order.
    pub fn dispatch(&self, invocation: &Invocation<'_>) {
        for action in &self.actions {
            action(invocation);
        }
    }

    /// Render this command's help text, including its whole subtree.
    #[must_use]
    pub fn help(&self) -> String {
        printers::render_help(self)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("options", &self.options)
            .field("positionals", &self.positionals)
            .field("subcommands", &self.children)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;
    use crate::parameter::Opt;

    #[test]
    fn find_option_accepts_all_lookup_forms() {
        let command = Command::new("test", "")
            .option(Opt::new("-f, --flag", "").unwrap());

        for form in ["-f", "--flag", "f", "flag"] {
            assert!(command.find_option(form).is_some(), "no match for {form:?}");
        }
        assert!(command.find_option("-x").is_none());
    }

    #[test]
    fn duplicate_flags_resolve_to_first_declaration() {
        let command = Command::new("test", "")
            .option(Opt::new("-f, --first", "one").unwrap())
            .option(Opt::new("-f, --second", "two").unwrap());

        let found = command.find_option("-f").unwrap();
        assert_eq!(found.long(), Some("first"));
    }

    #[test]
    fn aliases_route_to_the_same_child() {
        let root = Command::new("root", "").subcommand(
            Command::new("list", "List things").alias("ls"),
        );

        let by_name = root.find_subcommand("list").unwrap();
        let by_alias = root.find_subcommand("ls").unwrap();
        assert!(ptr::eq(by_name, by_alias));
    }

    #[test]
    fn attachment_registers_name_and_aliases_together() {
        let child = Command::new("list", "").alias("ls").alias("dir");
        let root = Command::new("root", "").subcommand(child);

        assert!(root.find_subcommand("list").is_some());
        assert!(root.find_subcommand("ls").is_some());
        assert!(root.find_subcommand("dir").is_some());
        assert!(root.find_subcommand("tree").is_none());
    }

    #[test]
    fn colliding_child_names_keep_the_later_route() {
        let root = Command::new("root", "")
            .subcommand(Command::new("job", "old"))
            .subcommand(Command::new("job", "new"));

        assert_eq!(root.find_subcommand("job").unwrap().description(), "new");
    }
}
