//! Actions accepted by the users reducer
//!
//! Each remote operation resolves into a `*Fulfilled` or `*Rejected` action.
//! Only the list operation has a pending phase; it drives the loading flag.

use crate::models::{User, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ListPending,
    ListFulfilled(Vec<User>),
    ListRejected(String),

    CreateFulfilled(User),
    CreateRejected(String),

    UpdateFulfilled(User),
    UpdateRejected(String),

    DeleteFulfilled(UserId),
    DeleteRejected(String),
}

impl Action {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::ListPending => "list/pending",
            Action::ListFulfilled(_) => "list/fulfilled",
            Action::ListRejected(_) => "list/rejected",
            Action::CreateFulfilled(_) => "create/fulfilled",
            Action::CreateRejected(_) => "create/rejected",
            Action::UpdateFulfilled(_) => "update/fulfilled",
            Action::UpdateRejected(_) => "update/rejected",
            Action::DeleteFulfilled(_) => "delete/fulfilled",
            Action::DeleteRejected(_) => "delete/rejected",
        }
    }
}
