//! Application state container
//!
//! Holds the user collection mirrored from the remote store. State only
//! changes by dispatching an [`Action`] through the pure [`reduce`] function,
//! so the container can be driven and inspected without any I/O.

pub mod action;
pub mod reducer;

pub use action::Action;
pub use reducer::{reduce, UsersState};

/// Owns the current [`UsersState`] and applies actions to it
#[derive(Debug, Default)]
pub struct Store {
    state: UsersState,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    /// Run `action` through the reducer and keep the result
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "Dispatching");
        let prev = std::mem::take(&mut self.state);
        self.state = reduce(prev, action);
    }
}
