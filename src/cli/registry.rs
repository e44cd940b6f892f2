use std::collections::HashMap;

use strsim::levenshtein;

use super::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command: its canonical name, short aliases and handler.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Command table resolving names and aliases to entries.
///
/// Entries are kept in registration order so `help` lists them the way they
/// were declared. A key already taken by an earlier entry is not overwritten.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    by_key: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let slot = self.entries.len();
        let mut claimed = 0;
        for key in entry.keys() {
            if self.by_key.contains_key(key) {
                tracing::warn!(command = entry.name, key, "command key already taken");
                continue;
            }
            self.by_key.insert(key, slot);
            claimed += 1;
        }
        if claimed > 0 {
            self.entries.push(entry);
        }
    }

    /// Looks up a command by name or alias, ignoring case.
    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        let key = input.trim().to_ascii_lowercase();
        self.by_key
            .get(key.as_str())
            .and_then(|slot| self.entries.get(*slot))
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter()
    }

    /// Every key the shell accepts, aliases included, for completion.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().flat_map(CommandEntry::keys).collect()
    }

    /// Canonical name of the command nearest to `input` within `max_distance` edits.
    pub fn closest(&self, input: &str, max_distance: usize) -> Option<&'static str> {
        let input = input.to_lowercase();
        self.by_key
            .iter()
            .map(|(key, slot)| (levenshtein(key, &input), *key, *slot))
            .filter(|(distance, _, _)| *distance <= max_distance)
            .min_by_key(|(distance, key, _)| (*distance, *key))
            .and_then(|(_, _, slot)| self.entries.get(slot))
            .map(|entry| entry.name)
    }
}
