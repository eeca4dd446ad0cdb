use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use metrics_exporter_prometheus::PrometheusBuilder;

use ml_dataset_service::{
    config::settings::Settings,
    db::store::{DatasetStore, MongoStore},
    middleware::{cors::cors, metrics::Metrics},
    routes::{datasets::dataset_scope, health::health_scope},
    services::initializer,
};

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let settings = Settings::new().unwrap_or_else(|e| {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    });

    if let Some(addr) = settings.metrics_addr {
        if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
            log::error!("Fatal: failed to start metrics exporter on {addr}: {e}");
            std::process::exit(1);
        }
        log::info!("Prometheus exporter listening on {addr}");
    }

    let store: Arc<dyn DatasetStore> = Arc::new(MongoStore::new(settings.clone()));

    // --- collection bootstrap: nothing is served until this succeeds -------
    if let Err(e) = initializer::ensure_collection(store.as_ref()).await {
        log::error!(
            "Fatal: Not able to initialize the MongoDB collection {}: {e}",
            settings.collection
        );
        std::process::exit(1);
    }

    let listen_addr = settings.listen_addr.clone();
    log::info!("Starting server at {listen_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Metrics)
            .wrap(Logger::default())
            .app_data(web::Data::new(settings.clone()))
            .app_data(web::Data::from(store.clone()))

            .service(dataset_scope())
            .service(health_scope())
    })
        .bind(listen_addr.as_str())?
        .run()
        .await
}
