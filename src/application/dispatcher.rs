//! Command dispatch by name.

use std::collections::HashMap;

/// Error returned when dispatching a command fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No command is registered under the requested name
    UnknownCommand(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnknownCommand(name) => {
                write!(f, "unknown command: {}", name)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Registry of named commands with an execution history.
///
/// Commands are closures registered under a name and executed on demand.
/// The history records only commands that actually ran: the name is
/// appended after the command returns, so a dispatch that fails to resolve
/// leaves no trace.
///
/// # Example
/// ```
/// use layered_calc::{CommandDispatcher, DispatchError};
///
/// let mut dispatcher = CommandDispatcher::new();
/// dispatcher.register("answer", || 42);
///
/// assert_eq!(dispatcher.execute("answer"), Ok(42));
/// assert_eq!(
///     dispatcher.execute("question"),
///     Err(DispatchError::UnknownCommand("question".to_string()))
/// );
/// assert_eq!(dispatcher.history(), ["answer"]);
/// ```
pub struct CommandDispatcher<R> {
    commands: HashMap<String, Box<dyn Fn() -> R + Send + Sync>>,
    history: Vec<String>,
}

impl<R> CommandDispatcher<R> {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Register a command under a name, replacing any previous command with
    /// the same name.
    ///
    /// # Arguments
    /// * `name` - Name to dispatch the command by
    /// * `command` - Closure to run on dispatch
    pub fn register(&mut self, name: &str, command: impl Fn() -> R + Send + Sync + 'static) {
        self.commands.insert(name.to_string(), Box::new(command));
    }

    /// Execute the command registered under a name.
    ///
    /// # Returns
    /// The command's result, or [`DispatchError::UnknownCommand`] if nothing
    /// is registered under the name.
    pub fn execute(&mut self, name: &str) -> Result<R, DispatchError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;
        let result = command();
        self.history.push(name.to_string());
        Ok(result)
    }

    /// Get the names of successfully executed commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<R> Default for CommandDispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for CommandDispatcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.commands.keys().collect();
        names.sort();
        f.debug_struct("CommandDispatcher")
            .field("commands", &names)
            .field("history", &self.history)
            .finish()
    }
}
