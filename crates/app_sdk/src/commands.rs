//! Per-app commands service: passes through to [`CommandRegistry`] unchanged
//! (`spec.md` §4.8), tagging every registration with the calling app's id.

use desktop_contract::manifest::AppId;
use desktop_services::{Command, CommandError, CommandHandler};
use platform_host::SyncKvProvider;
use serde_json::Value;

use crate::stores::SharedStores;

/// Commands sub-service scoped to one app.
pub struct CommandsService<Storage> {
    app_id: AppId,
    stores: SharedStores<Storage>,
}

impl<Storage: SyncKvProvider + Clone> CommandsService<Storage> {
    pub(crate) fn new(app_id: AppId, stores: SharedStores<Storage>) -> Self {
        Self { app_id, stores }
    }

    /// Registers or refreshes a command owned by this app, attaching `handler` as the
    /// action `execute` invokes.
    ///
    /// Re-registering the same `id` from this same app refreshes its
    /// title/keywords/handler in place; registering an id already owned by a
    /// different app is rejected.
    pub fn register(
        &self,
        id: impl Into<String>,
        title: impl Into<String>,
        keywords: Vec<String>,
        handler: CommandHandler,
    ) -> Result<(), CommandError> {
        self.stores.commands.borrow_mut().register(Command {
            id: id.into(),
            owner: self.app_id.clone(),
            title: title.into(),
            keywords,
            handler: Some(handler),
        })
    }

    /// Clears the handler of a command owned by this app; the command record itself
    /// stays in the registry. A no-op error if no command with this id exists, but
    /// never touches a command owned by a different app (the registry itself is the
    /// sole owner-check authority here).
    pub fn unregister(&self, id: &str) -> Result<(), CommandError> {
        let mut commands = self.stores.commands.borrow_mut();
        let owned_by_another_app = commands.get(id).map(|command| command.owner != self.app_id).unwrap_or(false);
        if owned_by_another_app {
            return Err(CommandError::NotFound(id.to_string()));
        }
        commands.unregister(id)
    }

    /// Dispatches a command by id, regardless of which app owns it — every app's
    /// commands are callable workspace-wide via the command palette.
    pub fn execute(&self, id: &str, args: &[Value]) -> Result<Value, CommandError> {
        self.stores.commands.borrow().execute(id, args)
    }

    /// Case-insensitive command search over the full shared registry.
    pub fn search(&self, query: &str) -> Vec<Command> {
        self.stores.commands.borrow().search(query).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemorySyncKvProvider;

    use super::*;

    fn service(app_id: &str, stores: SharedStores<MemorySyncKvProvider>) -> CommandsService<MemorySyncKvProvider> {
        CommandsService::new(app_id.to_string(), stores)
    }

    fn echo_handler() -> CommandHandler {
        Rc::new(|args: &[Value]| args.first().cloned().unwrap_or(Value::Null))
    }

    #[test]
    fn an_app_cannot_unregister_a_command_owned_by_another_app() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let notes = service("notes", stores.clone());
        let calendar = service("calendar", stores);
        notes.register("shared.id", "Notes command", Vec::new(), echo_handler()).unwrap();
        assert!(calendar.unregister("shared.id").is_err());
        assert!(notes.execute("shared.id", &[]).is_ok());
    }

    #[test]
    fn reregistering_refreshes_title_in_place() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let notes = service("notes", stores);
        notes.register("notes.new", "New note", Vec::new(), echo_handler()).unwrap();
        notes.register("notes.new", "New note (updated)", Vec::new(), echo_handler()).unwrap();
        assert_eq!(
            notes.execute("notes.new", &[Value::String("hi".to_string())]).unwrap(),
            Value::String("hi".to_string())
        );
    }

    #[test]
    fn unregister_clears_handler_without_removing_the_record() {
        let stores = SharedStores::new(MemorySyncKvProvider::default());
        let notes = service("notes", stores);
        notes.register("notes.new", "New note", Vec::new(), echo_handler()).unwrap();
        notes.unregister("notes.new").unwrap();
        assert!(matches!(notes.execute("notes.new", &[]), Err(CommandError::NoHandler(_))));
        assert!(notes.search("New note").iter().any(|c| c.id == "notes.new"));
    }
}
