//! Line-oriented user interaction.
//!
//! The session talks to the user only through [`Console`], so the whole
//! interactive loop can be driven from a script in tests.

mod terminal;

pub use terminal::TerminalConsole;

use async_trait::async_trait;

/// How a message should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Banner,
    Heading,
    Success,
    Error,
}

#[async_trait]
pub trait Console: Send {
    /// Show `message` and wait for one line of input, without the trailing
    /// newline. `None` means input ended or the user interrupted.
    async fn prompt(&mut self, message: &str) -> Option<String>;

    fn say(&mut self, tone: Tone, message: &str);
}
