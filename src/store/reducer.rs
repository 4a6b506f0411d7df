//! Users state and its reducer - pure data, no I/O

use crate::models::User;
use crate::store::Action;

/// Users mirrored from the remote store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    /// Records in server response order
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Apply `action` to `state`, returning the next state
pub fn reduce(mut state: UsersState, action: Action) -> UsersState {
    match action {
        Action::ListPending => {
            state.loading = true;
            state.error = None;
        }
        Action::ListFulfilled(users) => {
            state.loading = false;
            state.users = users;
        }
        Action::ListRejected(message) => {
            state.loading = false;
            state.error = Some(message);
        }

        Action::CreateFulfilled(user) => {
            state.users.push(user);
        }

        Action::UpdateFulfilled(user) => {
            if let Some(slot) = state.users.iter_mut().find(|u| u.id == user.id) {
                *slot = user;
            }
        }

        Action::DeleteFulfilled(id) => {
            state.users.retain(|u| u.id != id);
        }

        Action::CreateRejected(message)
        | Action::UpdateRejected(message)
        | Action::DeleteRejected(message) => {
            state.error = Some(message);
        }
    }
    state
}
