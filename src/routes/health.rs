use actix_web::{get, web, HttpResponse, Scope};

use crate::{
    config::settings::Settings, db::store::DatasetStore, services::health::report_health,
};

#[get("")]
async fn health_check(
    store: web::Data<dyn DatasetStore>,
    settings: web::Data<Settings>,
) -> HttpResponse {
    let status = report_health(store.get_ref(), &settings.database).await;
    HttpResponse::build(status.status_code()).json(status)
}

pub fn health_scope() -> Scope {
    web::scope("/api/healthz")
        .service(health_check)
}
