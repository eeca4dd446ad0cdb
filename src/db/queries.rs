use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection, Database};

use crate::{db::models::Dataset, utils::errors::DbError};

// DATASETS
pub async fn find_all(collection: &Collection<Dataset>) -> Result<Vec<Dataset>, DbError> {
    let cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| DbError::query("query datasets from the database", e))?;

    cursor
        .try_collect()
        .await
        .map_err(|e| DbError::query("iterate dataset cursor", e))
}

pub async fn find_by_id(
    collection: &Collection<Dataset>,
    id: i64,
) -> Result<Option<Dataset>, DbError> {
    collection
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| DbError::query("query dataset from the database", e))
}

pub async fn insert_dataset(
    collection: &Collection<Dataset>,
    dataset: &Dataset,
) -> Result<(), DbError> {
    collection
        .insert_one(dataset)
        .await
        .map(|_| ())
        .map_err(|e| DbError::query("insert dataset", e))
}

// COLLECTIONS
pub async fn collection_names(db: &Database, name: &str) -> Result<Vec<String>, DbError> {
    db.list_collection_names()
        .filter(doc! { "name": name })
        .await
        .map_err(|e| DbError::query("list collections", e))
}

pub async fn create_collection(db: &Database, name: &str) -> Result<(), DbError> {
    db.create_collection(name)
        .capped(false)
        .await
        .map_err(|e| DbError::query("create collection", e))
}

// DATABASES
pub async fn database_names(client: &Client, name: &str) -> Result<Vec<String>, DbError> {
    client
        .list_database_names()
        .filter(doc! { "name": name })
        .await
        .map_err(|e| DbError::query("list databases", e))
}
