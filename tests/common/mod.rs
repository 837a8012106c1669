//! Shared mock API for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use useradmin::api::{ApiError, UserApi};
use useradmin::models::{RemoteCompany, RemoteUser, UserPayload};

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(UserPayload),
    Update(u64, UserPayload),
    Delete(u64),
}

/// How the mock answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    /// Connection-level failure.
    Transport,
    /// Non-success HTTP status.
    Status(u16),
}

/// In-memory stand-in for the remote collection.
pub struct MockApi {
    users: Vec<RemoteUser>,
    next_id: Mutex<u64>,
    /// Hand out the same id for every create, like jsonplaceholder does.
    fixed_id: bool,
    failure: Mutex<Failure>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new(users: Vec<RemoteUser>, next_id: u64) -> Self {
        Self {
            users,
            next_id: Mutex::new(next_id),
            fixed_id: false,
            failure: Mutex::new(Failure::None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The scenario collection: Leanne Graham plus Ervin Howell.
    pub fn placeholder() -> Self {
        Self::new(
            vec![
                remote(1, "Leanne Graham", "Sincere@april.biz", Some("Romaguera-Crona")),
                remote(2, "Ervin Howell", "Shanna@melissa.tv", Some("Deckow-Crist")),
            ],
            11,
        )
    }

    pub fn with_fixed_id(mut self) -> Self {
        self.fixed_id = true;
        self
    }

    pub fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = failure;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match *self.failure.lock().unwrap() {
            Failure::None => Ok(()),
            Failure::Transport => Err(ApiError::Transport("connection refused".into())),
            Failure::Status(status) => Err(ApiError::Status {
                status,
                body: "{}".into(),
            }),
        }
    }
}

pub fn remote(id: u64, name: &str, email: &str, company: Option<&str>) -> RemoteUser {
    RemoteUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        company: company.map(|c| RemoteCompany {
            name: Some(c.to_string()),
        }),
    }
}

#[async_trait]
impl UserApi for MockApi {
    async fn list_users(&self) -> Result<Vec<RemoteUser>, ApiError> {
        self.record(Call::List)?;
        Ok(self.users.clone())
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<u64, ApiError> {
        self.record(Call::Create(payload.clone()))?;
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        if !self.fixed_id {
            *next_id += 1;
        }
        Ok(id)
    }

    async fn update_user(&self, id: u64, payload: &UserPayload) -> Result<(), ApiError> {
        self.record(Call::Update(id, payload.clone()))
    }

    async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        self.record(Call::Delete(id))
    }
}
