//! Network messages - communication between App and Network layers

use crate::models::{User, UserDraft, UserId};

/// The four remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the whole collection
    ListUsers { id: u64 },
    /// Create a record from a draft
    CreateUser { id: u64, draft: UserDraft },
    /// Replace the record `user_id` with the draft
    UpdateUser {
        id: u64,
        user_id: UserId,
        draft: UserDraft,
    },
    /// Remove the record `user_id`
    DeleteUser { id: u64, user_id: UserId },

    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            NetworkCommand::ListUsers { .. } => Some(Operation::List),
            NetworkCommand::CreateUser { .. } => Some(Operation::Create),
            NetworkCommand::UpdateUser { .. } => Some(Operation::Update),
            NetworkCommand::DeleteUser { .. } => Some(Operation::Delete),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    UsersListed { id: u64, users: Vec<User> },
    UserCreated { id: u64, user: User },
    UserUpdated { id: u64, user: User },
    UserDeleted { id: u64, user_id: UserId },
    /// Any failed operation
    Failed {
        id: u64,
        operation: Operation,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::UsersListed { id, .. } => *id,
            NetworkResponse::UserCreated { id, .. } => *id,
            NetworkResponse::UserUpdated { id, .. } => *id,
            NetworkResponse::UserDeleted { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, NetworkResponse::Failed { .. })
    }
}
