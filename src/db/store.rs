//  src/db/store.rs

use std::future::Future;

use async_trait::async_trait;
use mongodb::{Client, Collection, Database};
use tokio::time::timeout;

use crate::{
    config::settings::Settings,
    db::{connector, models::Dataset, queries},
    utils::errors::DbError,
};

/// Everything the HTTP surface and the start-up initializer need from storage.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Name of the collection holding the datasets.
    fn collection_name(&self) -> &str;

    async fn list_all(&self) -> Result<Vec<Dataset>, DbError>;

    /// `Ok(None)` means no document carries that id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Dataset>, DbError>;

    /// Database names visible to the current credentials, filtered to `name`.
    async fn database_names(&self, name: &str) -> Result<Vec<String>, DbError>;

    /// Collections in the target database whose name equals `collection_name()`.
    async fn collection_names(&self) -> Result<Vec<String>, DbError>;

    async fn create_collection(&self) -> Result<(), DbError>;

    async fn insert(&self, dataset: &Dataset) -> Result<(), DbError>;
}

/// MongoDB-backed store. Every call dials, runs one operation, then shuts
/// the client down; nothing is pooled between calls.
#[derive(Debug, Clone)]
pub struct MongoStore {
    settings: Settings,
}

impl MongoStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn database(&self, client: &Client) -> Database {
        client.database(&self.settings.database)
    }

    fn datasets(&self, client: &Client) -> Collection<Dataset> {
        self.database(client).collection(&self.settings.collection)
    }

    async fn with_client<T, F, Fut>(&self, op: &'static str, f: F) -> Result<T, DbError>
    where
        F: FnOnce(Client) -> Fut,
        Fut: Future<Output = Result<T, DbError>>,
    {
        let client = connector::connect(&self.settings).await?;

        let result = match timeout(self.settings.db_timeout, f(client.clone())).await {
            Ok(r) => r,
            Err(_) => Err(DbError::Timeout { op }),
        };

        // released on every path, error or not
        client.shutdown().await;
        result
    }
}

#[async_trait]
impl DatasetStore for MongoStore {
    fn collection_name(&self) -> &str {
        &self.settings.collection
    }

    async fn list_all(&self) -> Result<Vec<Dataset>, DbError> {
        self.with_client("list datasets", |client| async move {
            queries::find_all(&self.datasets(&client)).await
        })
        .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Dataset>, DbError> {
        self.with_client("get dataset", |client| async move {
            queries::find_by_id(&self.datasets(&client), id).await
        })
        .await
    }

    async fn database_names(&self, name: &str) -> Result<Vec<String>, DbError> {
        self.with_client("list databases", |client| async move {
            queries::database_names(&client, name).await
        })
        .await
    }

    async fn collection_names(&self) -> Result<Vec<String>, DbError> {
        self.with_client("list collections", |client| async move {
            queries::collection_names(&self.database(&client), &self.settings.collection).await
        })
        .await
    }

    async fn create_collection(&self) -> Result<(), DbError> {
        self.with_client("create collection", |client| async move {
            queries::create_collection(&self.database(&client), &self.settings.collection).await
        })
        .await
    }

    async fn insert(&self, dataset: &Dataset) -> Result<(), DbError> {
        self.with_client("insert dataset", |client| async move {
            queries::insert_dataset(&self.datasets(&client), dataset).await
        })
        .await
    }
}
