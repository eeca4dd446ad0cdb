// tests/connector.rs
//
// Failure paths of the real driver wiring. Nothing listens on 127.0.0.1:1,
// so these run without a MongoDB server.
use std::time::{Duration, Instant};

use ml_dataset_service::{
    config::settings::Settings,
    db::{
        connector,
        store::{DatasetStore, MongoStore},
    },
    services::health::{report_health, HealthStatus},
    utils::errors::DbError,
};

const UNREACHABLE: &str = "mongodb://127.0.0.1:1";

fn settings_for(endpoint: &str) -> Settings {
    let endpoint = endpoint.to_string();
    Settings::from_lookup(move |key| match key {
        "MONGODB_ENDPOINT" => Some(endpoint.clone()),
        "MONGODB_TIMEOUT_SECS" => Some("1".to_string()),
        _ => None,
    })
    .expect("test settings")
}

#[actix_rt::test]
async fn malformed_endpoint_is_a_connect_error() {
    let err = connector::connect(&settings_for("not-a-uri"))
        .await
        .expect_err("bad uri must not connect");
    assert!(matches!(err, DbError::Connect(_)), "got {err:?}");
    assert!(err.to_string().starts_with("failed to connect to MongoDB"));
}

#[actix_rt::test]
async fn unreachable_server_is_a_ping_error_within_the_timeout() {
    let started = Instant::now();
    let err = connector::connect(&settings_for(UNREACHABLE))
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, DbError::Ping(_)), "got {err:?}");
    assert!(err.to_string().starts_with("failed to ping MongoDB server"));
    assert!(
        started.elapsed() < Duration::from_secs(4),
        "took {:?}",
        started.elapsed()
    );
}

#[actix_rt::test]
async fn mongo_store_surfaces_connection_failures() {
    let store = MongoStore::new(settings_for(UNREACHABLE));
    let err = store.list_all().await.expect_err("store is unreachable");
    assert!(matches!(err, DbError::Ping(_)), "got {err:?}");
}

#[actix_rt::test]
async fn health_is_unhealthy_when_server_is_unreachable() {
    let settings = settings_for(UNREACHABLE);
    let store = MongoStore::new(settings.clone());

    match report_health(&store, &settings.database).await {
        HealthStatus::Unhealthy { error } => {
            assert!(error.starts_with("failed to ping MongoDB server"), "{error}");
        }
        HealthStatus::Healthy => panic!("unreachable server reported healthy"),
    }
}
