//! Network actor - runs remote store calls in the Tokio async runtime

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::network::client::UserApi;

/// Network actor that executes user store commands
pub struct NetworkActor {
    api: Arc<dyn UserApi>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: Arc<dyn UserApi>, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => break,
                        Some(cmd) => self.spawn(cmd),
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
        // Dropping the JoinSet aborts whatever is still in flight
    }

    fn spawn(&mut self, cmd: NetworkCommand) {
        let api = Arc::clone(&self.api);
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            let response = execute(api.as_ref(), cmd).await;
            if let Some(response) = response {
                let _ = response_tx.send(response);
            }
        });
    }
}

/// Run a single command against `api` and describe the outcome
pub async fn execute(api: &dyn UserApi, cmd: NetworkCommand) -> Option<NetworkResponse> {
    let operation = cmd.operation()?;
    let (id, result) = match cmd {
        NetworkCommand::ListUsers { id } => {
            tracing::info!(id, "Listing users");
            (id, api.list_users().await.map(|users| NetworkResponse::UsersListed { id, users }))
        }
        NetworkCommand::CreateUser { id, draft } => {
            tracing::info!(id, name = %draft.name, "Creating user");
            (id, api.create_user(&draft).await.map(|user| NetworkResponse::UserCreated { id, user }))
        }
        NetworkCommand::UpdateUser { id, user_id, draft } => {
            tracing::info!(id, %user_id, "Updating user");
            (id, api.update_user(&user_id, &draft).await.map(|user| NetworkResponse::UserUpdated { id, user }))
        }
        NetworkCommand::DeleteUser { id, user_id } => {
            tracing::info!(id, %user_id, "Deleting user");
            let result = api.delete_user(&user_id).await;
            (id, result.map(|()| NetworkResponse::UserDeleted { id, user_id }))
        }
        NetworkCommand::Shutdown => return None,
    };

    Some(match result {
        Ok(response) => {
            tracing::info!(id, operation = operation.as_str(), "Request completed");
            response
        }
        Err(e) => failure(id, operation, e),
    })
}

fn failure(id: u64, operation: Operation, e: anyhow::Error) -> NetworkResponse {
    let message = format!("{:#}", e);
    tracing::warn!(id, operation = operation.as_str(), %message, "Request failed");
    NetworkResponse::Failed {
        id,
        operation,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, User, UserDraft, UserId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory user collection
    #[derive(Default)]
    struct MemoryApi {
        users: Mutex<Vec<User>>,
        next_id: Mutex<u64>,
        fail_with: Option<String>,
    }

    impl MemoryApi {
        fn failing(message: &str) -> Self {
            MemoryApi {
                fail_with: Some(message.to_string()),
                ..MemoryApi::default()
            }
        }

        fn check(&self) -> anyhow::Result<()> {
            match &self.fail_with {
                Some(msg) => Err(anyhow::anyhow!(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl UserApi for MemoryApi {
        async fn list_users(&self) -> anyhow::Result<Vec<User>> {
            self.check()?;
            Ok(self.users.lock().unwrap().clone())
        }

        async fn create_user(&self, draft: &UserDraft) -> anyhow::Result<User> {
            self.check()?;
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let user = User::from_draft(UserId::from(*next), draft.clone());
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn update_user(&self, id: &UserId, draft: &UserDraft) -> anyhow::Result<User> {
            self.check()?;
            Ok(User::from_draft(id.clone(), draft.clone()))
        }

        async fn delete_user(&self, id: &UserId) -> anyhow::Result<()> {
            self.check()?;
            self.users.lock().unwrap().retain(|u| &u.id != id);
            Ok(())
        }
    }

    fn draft() -> UserDraft {
        UserDraft {
            name: "Ann".into(),
            surname: "Lee".into(),
            avatar_url: "x.png".into(),
            age: "30".into(),
            gender: Some(Gender::Female),
        }
    }

    #[tokio::test]
    async fn test_create_returns_server_id() {
        let api = MemoryApi::default();
        let resp = execute(&api, NetworkCommand::CreateUser { id: 5, draft: draft() }).await;
        match resp {
            Some(NetworkResponse::UserCreated { id, user }) => {
                assert_eq!(id, 5);
                assert_eq!(user.id, UserId::from(1));
                assert_eq!(user.to_draft(), draft());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_carries_message_and_operation() {
        let api = MemoryApi::failing("network down");
        let resp = execute(&api, NetworkCommand::ListUsers { id: 1 }).await.unwrap();
        match resp {
            NetworkResponse::Failed { operation, message, .. } => {
                assert_eq!(operation, Operation::List);
                assert_eq!(message, "network down");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_echoes_user_id() {
        let api = MemoryApi::default();
        let resp = execute(
            &api,
            NetworkCommand::DeleteUser {
                id: 2,
                user_id: UserId::from(9),
            },
        )
        .await;
        assert!(matches!(
            resp,
            Some(NetworkResponse::UserDeleted { id: 2, ref user_id }) if *user_id == UserId::from(9)
        ));
    }

    #[tokio::test]
    async fn test_actor_round_trip_and_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let actor = NetworkActor::new(Arc::new(MemoryApi::default()), resp_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(NetworkCommand::CreateUser { id: 1, draft: draft() }).unwrap();
        let created = resp_rx.recv().await.unwrap();
        assert!(matches!(created, NetworkResponse::UserCreated { id: 1, .. }));

        cmd_tx.send(NetworkCommand::ListUsers { id: 2 }).unwrap();
        match resp_rx.recv().await.unwrap() {
            NetworkResponse::UsersListed { users, .. } => assert_eq!(users.len(), 1),
            other => panic!("unexpected {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
