//! Command palette registry: apps register invokable commands under a stable id.
//!
//! Per `spec.md` §4.8, re-registering the same command id from the same owning app
//! refreshes its title/handler in place rather than appending a duplicate entry, but a
//! different app registering the same id is rejected — command ids are a shared
//! namespace, not per-app. `unregister` clears only the handler, matching "clears the
//! handler but never removes a manifest-declared command record" — the record (and its
//! ownership) stays in the registry so a later re-registration still refreshes in
//! place rather than being treated as a fresh contribution.

use std::collections::BTreeMap;
use std::rc::Rc;

use desktop_contract::manifest::AppId;
use serde_json::Value;

/// A command's invokable action, boxed so `CommandRegistry` doesn't need to know
/// each app's concrete closure type. Not `Send`/`Sync`: every store in this workspace
/// is shared via `Rc<RefCell<_>>` on a single-threaded event loop, matching
/// `desktop_services::settings::SettingsStore`'s subscriber callbacks.
pub type CommandHandler = Rc<dyn Fn(&[Value]) -> Value>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
/// Command registration/execution failure.
pub enum CommandError {
    /// A different app already owns this command id.
    #[error("command `{0}` is already registered by another app")]
    OwnedByAnotherApp(String),
    /// No command is registered under this id.
    #[error("no command registered with id `{0}`")]
    NotFound(String),
    /// A command record exists but currently has no handler attached (e.g. its app
    /// unregistered it without removing the record).
    #[error("command `{0}` has no handler attached")]
    NoHandler(String),
}

#[derive(Clone)]
/// One registered command.
pub struct Command {
    /// Stable command id, e.g. `"notes.new-note"`.
    pub id: String,
    /// App that owns this command.
    pub owner: AppId,
    /// Display title shown in the command palette.
    pub title: String,
    /// Optional keyword list aiding fuzzy search.
    pub keywords: Vec<String>,
    /// Action invoked by `execute`. `None` once `unregister` has cleared it.
    pub handler: Option<CommandHandler>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("title", &self.title)
            .field("keywords", &self.keywords)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl PartialEq for Command {
    /// Handlers are never compared — two registrations with the same metadata are
    /// equal regardless of which closure backs them.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.owner == other.owner && self.title == other.title && self.keywords == other.keywords
    }
}

impl Eq for Command {}

#[derive(Debug, Clone, Default)]
/// Registry of commands contributed by every running app.
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Registers `command`. If a command with this id already exists and is owned by
    /// the same app, its title/keywords/handler are refreshed in place. If it is
    /// owned by a different app, registration is rejected.
    pub fn register(&mut self, command: Command) -> Result<(), CommandError> {
        if let Some(existing) = self.commands.get(&command.id) {
            if existing.owner != command.owner {
                return Err(CommandError::OwnedByAnotherApp(command.id));
            }
        }
        self.commands.insert(command.id.clone(), command);
        Ok(())
    }

    /// Removes every command owned by `app_id` (called on app unmount).
    pub fn unregister_all_for_app(&mut self, app_id: &str) {
        self.commands.retain(|_, command| command.owner != app_id);
    }

    /// Clears the handler of a single command, failing if it does not exist. The
    /// command record itself stays in the registry.
    pub fn unregister(&mut self, id: &str) -> Result<(), CommandError> {
        let command = self.commands.get_mut(id).ok_or_else(|| CommandError::NotFound(id.to_string()))?;
        command.handler = None;
        Ok(())
    }

    /// Looks up a command by id.
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.get(id)
    }

    /// Every registered command, in id order.
    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// Invokes the command's handler with `args`, failing if the id is unknown or its
    /// handler has been cleared.
    pub fn execute(&self, id: &str, args: &[Value]) -> Result<Value, CommandError> {
        let command = self.commands.get(id).ok_or_else(|| CommandError::NotFound(id.to_string()))?;
        let handler = command.handler.as_ref().ok_or_else(|| CommandError::NoHandler(id.to_string()))?;
        Ok(handler(args))
    }

    /// Case-insensitive substring search over title and keywords.
    pub fn search(&self, query: &str) -> Vec<&Command> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return self.commands.values().collect();
        }
        self.commands
            .values()
            .filter(|c| {
                c.title.to_lowercase().contains(&query)
                    || c.keywords.iter().any(|k| k.to_lowercase().contains(&query))
            })
            .collect()
    }
}
