//! Shared fixtures for HTTP handler tests.
//!
//! `InMemoryStorage` substitutes for a real backend behind the same
//! `Storage` port, mimicking the document backend's identity rules so the
//! malformed-identity paths are exercised without any I/O.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::Storage;
use crate::domain::{Author, Book, Error, User};
use crate::inbound::http::state::HttpState;

/// Identity plumbing the fake needs from an entity.
pub trait TestRecord: Clone + Send + Sync {
    /// Current identity, empty before creation.
    fn id(&self) -> &str;
    /// Stamp the backend-assigned identity.
    fn set_id(&mut self, id: String);
}

impl TestRecord for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl TestRecord for Author {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl TestRecord for Book {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

fn well_formed(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// In-memory `Storage` fake with document-style 24-hex identities.
#[derive(Default)]
pub struct InMemoryStorage<E> {
    records: Mutex<HashMap<String, E>>,
    next: AtomicU64,
}

impl<E> InMemoryStorage<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl<E: TestRecord + 'static> Storage<E> for InMemoryStorage<E> {
    async fn create(&self, entity: &E) -> Result<String, Error> {
        // Caller-supplied identities are advisory and ignored, as in the
        // document backend.
        let id = format!("{:024x}", self.next.fetch_add(1, Ordering::Relaxed) + 1);
        let mut stored = entity.clone();
        stored.set_id(id.clone());
        self.records.lock().expect("lock").insert(id.clone(), stored);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<E>, Error> {
        Ok(self.records.lock().expect("lock").values().cloned().collect())
    }

    async fn find_one(&self, id: &str) -> Result<E, Error> {
        if !well_formed(id) {
            return Err(Error::invalid_identity(format!(
                "`{id}` is not a valid 24-character hex identity"
            )));
        }
        self.records
            .lock()
            .expect("lock")
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("no record with identity `{id}`")))
    }

    async fn update(&self, entity: &E) -> Result<(), Error> {
        let id = entity.id().to_owned();
        if !well_formed(&id) {
            return Err(Error::invalid_identity(format!(
                "`{id}` is not a valid 24-character hex identity"
            )));
        }
        let mut records = self.records.lock().expect("lock");
        match records.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(Error::not_found(format!("no record with identity `{id}`"))),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        if !well_formed(id) {
            return Err(Error::invalid_identity(format!(
                "`{id}` is not a valid 24-character hex identity"
            )));
        }
        self.records
            .lock()
            .expect("lock")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("no record with identity `{id}`")))
    }
}

/// Storage stub whose every operation fails outside the closed taxonomy.
pub struct FailingStorage;

fn unclassified() -> Error {
    Error::unknown("driver gave up: postgres://user:secret@db/internal")
}

#[async_trait]
impl<E: TestRecord + 'static> Storage<E> for FailingStorage {
    async fn create(&self, _entity: &E) -> Result<String, Error> {
        Err(unclassified())
    }

    async fn find_all(&self) -> Result<Vec<E>, Error> {
        Err(unclassified())
    }

    async fn find_one(&self, _id: &str) -> Result<E, Error> {
        Err(unclassified())
    }

    async fn update(&self, _entity: &E) -> Result<(), Error> {
        Err(unclassified())
    }

    async fn delete(&self, _id: &str) -> Result<(), Error> {
        Err(unclassified())
    }
}

/// State where every resource runs on a fresh in-memory store.
pub fn in_memory_state() -> HttpState {
    HttpState {
        users: Arc::new(InMemoryStorage::new()),
        authors: Arc::new(InMemoryStorage::new()),
        books: Arc::new(InMemoryStorage::new()),
    }
}

/// State where the user store fails with unclassified errors.
pub fn failing_users_state() -> HttpState {
    HttpState {
        users: Arc::new(FailingStorage),
        authors: Arc::new(InMemoryStorage::new()),
        books: Arc::new(InMemoryStorage::new()),
    }
}

mod tests {
    //! Contract coverage for the fake itself, so handler tests can rely on
    //! it behaving like a real backend.

    use super::*;
    use crate::domain::ErrorCode;

    fn sample_user() -> User {
        User {
            id: String::new(),
            email: "a@b.com".into(),
            username: "a".into(),
            password_hash: "x".into(),
        }
    }

    #[tokio::test]
    async fn create_then_find_one_round_trips_all_fields() {
        let store = InMemoryStorage::new();
        let id = store.create(&sample_user()).await.expect("create");
        assert_eq!(id.len(), 24);

        let found: User = store.find_one(&id).await.expect("find");
        assert_eq!(found.email, "a@b.com");
        assert_eq!(found.username, "a");
        assert_eq!(found.password_hash, "x");
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_success() {
        let store = InMemoryStorage::<User>::new();
        assert_eq!(store.find_all().await.expect("list").len(), 0);
    }

    #[tokio::test]
    async fn delete_leaves_no_resurrection() {
        let store = InMemoryStorage::new();
        let id = store.create(&sample_user()).await.expect("create");
        store.delete(&id).await.expect("delete");

        let err = store.find_one(&id).await.expect_err("gone");
        assert_eq!(err.code(), ErrorCode::NotFound);
        let err = store.delete(&id).await.expect_err("already gone");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn malformed_identities_fail_before_lookup() {
        let store = InMemoryStorage::<User>::new();
        let err = store.find_one("not-a-valid-id").await.expect_err("reject");
        assert_eq!(err.code(), ErrorCode::InvalidIdentity);
    }
}
