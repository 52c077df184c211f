//! The interactive search → export → detail loop.
//!
//! [`state`] holds the pure transition function; [`SessionController`]
//! owns the current state and batch, prompts the user and carries out the
//! effects each transition asks for.

mod controller;
pub mod state;

pub use controller::SessionController;
pub use state::{transition, Effect, Event, OpenChoice, SessionState, Transition, QUIT};
