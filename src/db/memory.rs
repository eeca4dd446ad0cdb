//  src/db/memory.rs

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{db::models::Dataset, db::store::DatasetStore, utils::errors::DbError};

/// In-process stand-in for MongoDB used by the test-suite.
///
/// Mirrors the server's visible behaviour: a database only shows up in the
/// database listing once it holds a collection, and `_id` is a primary key.
pub struct MemoryStore {
    database: String,
    collection: String,
    calls: AtomicUsize,
    state: RwLock<State>,
}

struct State {
    reachable: bool,
    collection_exists: bool,
    datasets: Vec<Dataset>,
}

impl MemoryStore {
    /// Empty database, collection not created yet.
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::build(database.into(), collection.into(), false, Vec::new())
    }

    /// Collection already present and holding `datasets`, in that order.
    pub fn with_datasets(
        database: impl Into<String>,
        collection: impl Into<String>,
        datasets: Vec<Dataset>,
    ) -> Self {
        Self::build(database.into(), collection.into(), true, datasets)
    }

    fn build(
        database: String,
        collection: String,
        collection_exists: bool,
        datasets: Vec<Dataset>,
    ) -> Self {
        Self {
            database,
            collection,
            calls: AtomicUsize::new(0),
            state: RwLock::new(State {
                reachable: true,
                collection_exists,
                datasets,
            }),
        }
    }

    /// Simulates the server going away (or coming back).
    pub async fn set_reachable(&self, reachable: bool) {
        self.state.write().await.reachable = reachable;
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.datasets.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of storage operations served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self, state: &State) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if state.reachable {
            Ok(())
        } else {
            Err(DbError::Backend(format!(
                "failed to connect to MongoDB: database {} unreachable",
                self.database
            )))
        }
    }
}

#[async_trait]
impl DatasetStore for MemoryStore {
    fn collection_name(&self) -> &str {
        &self.collection
    }

    async fn list_all(&self) -> Result<Vec<Dataset>, DbError> {
        let state = self.state.read().await;
        self.touch(&state)?;
        Ok(state.datasets.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Dataset>, DbError> {
        let state = self.state.read().await;
        self.touch(&state)?;
        Ok(state.datasets.iter().find(|d| d.id == id).cloned())
    }

    async fn database_names(&self, name: &str) -> Result<Vec<String>, DbError> {
        let state = self.state.read().await;
        self.touch(&state)?;
        if state.collection_exists && name == self.database {
            Ok(vec![self.database.clone()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn collection_names(&self) -> Result<Vec<String>, DbError> {
        let state = self.state.read().await;
        self.touch(&state)?;
        if state.collection_exists {
            Ok(vec![self.collection.clone()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn create_collection(&self) -> Result<(), DbError> {
        let mut state = self.state.write().await;
        self.touch(&state)?;
        if state.collection_exists {
            return Err(DbError::Backend(format!(
                "collection already exists: {}.{}",
                self.database, self.collection
            )));
        }
        state.collection_exists = true;
        Ok(())
    }

    async fn insert(&self, dataset: &Dataset) -> Result<(), DbError> {
        let mut state = self.state.write().await;
        self.touch(&state)?;
        if state.datasets.iter().any(|d| d.id == dataset.id) {
            return Err(DbError::Backend(format!(
                "E11000 duplicate key error collection: {}.{} dup key: {{ _id: {} }}",
                self.database, self.collection, dataset.id
            )));
        }
        state.collection_exists = true;
        state.datasets.push(dataset.clone());
        Ok(())
    }
}
