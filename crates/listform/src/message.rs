//! Messages, commands and the model trait.
//!
//! Fields never call into their siblings. Anything a field wants the
//! enclosing form to do is returned as a [`Cmd`] which, once executed,
//! produces a [`Message`] the form interprets (for example
//! [`NextFieldMsg`]).

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// # Example
///
/// ```rust
/// use listform::Message;
///
/// struct Ping(u8);
///
/// let msg = Message::new(Ping(7));
/// assert!(msg.is::<Ping>());
/// assert_eq!(msg.downcast_ref::<Ping>().map(|p| p.0), Some(7));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// A lazy command that produces a message when executed.
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// The Elm-architecture model driven by [`Program`](crate::Program) and
/// [`ProgramSimulator`](crate::ProgramSimulator).
pub trait Model {
    /// Called once before the first message.
    fn init(&mut self) -> Option<Cmd>;

    /// Handle one message to completion.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the current state.
    fn view(&self) -> String;
}

/// Message to quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Request that the enclosing form focus the next field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextFieldMsg;

/// Request that the enclosing form focus the previous field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrevFieldMsg;

/// Command that signals the program to quit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command asking the enclosing form to move to the next field.
pub fn next_field() -> Cmd {
    Cmd::new(|| Message::new(NextFieldMsg))
}

/// Command asking the enclosing form to move to the previous field.
pub fn prev_field() -> Cmd {
    Cmd::new(|| Message::new(PrevFieldMsg))
}
