use crate::{
    db::{models::Dataset, store::DatasetStore},
    utils::errors::DbError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    AlreadyExists,
    /// Collection created and the seed record written.
    Created,
}

/// Makes sure the dataset collection exists, creating and seeding it on first
/// run. Safe to call on every start: an existing collection is left untouched.
pub async fn ensure_collection(store: &dyn DatasetStore) -> Result<InitOutcome, DbError> {
    let name = store.collection_name().to_string();

    let existing = store.collection_names().await?;
    if existing.len() == 1 {
        log::info!("Collection {name} already exists.");
        return Ok(InitOutcome::AlreadyExists);
    }

    log::info!("Creating Collection {name}");
    store.create_collection().await?;
    log::info!("Collection {name} created successfully");

    store.insert(&Dataset::seed()).await?;
    log::info!("Sample data added successfully");

    Ok(InitOutcome::Created)
}
