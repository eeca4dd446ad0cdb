// src/routes/datasets.rs
use actix_web::{
    get,
    http::header::{self, ContentType},
    options, web, HttpResponse, Scope,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    db::store::DatasetStore,
    middleware::cors::{ALLOWED_HEADERS, ALLOWED_METHODS},
};

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("dataset id pattern"));

/// Path ids must be plain non-negative integers that fit an `i64`.
pub fn parse_id(raw: &str) -> Option<i64> {
    if !ID_PATTERN.is_match(raw) {
        return None;
    }
    raw.parse::<i64>().ok()
}

fn text(mut builder: actix_web::HttpResponseBuilder, msg: &'static str) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(msg)
}

/// OPTIONS /api/mlDataset
///
/// Always 200. The CORS layer swaps `*` for the caller's origin when one is sent.
#[options("")]
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS.join(", ")))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS.join(", ")))
        .content_type("text/html; charset=utf-8")
        .finish()
}

/// GET /api/mlDataset
#[get("")]
pub async fn list_datasets(store: web::Data<dyn DatasetStore>) -> HttpResponse {
    match store.list_all().await {
        Ok(datasets) => HttpResponse::Ok().json(datasets),
        Err(e) => {
            log::error!("Failed to retrieve datasets: {e}");
            text(HttpResponse::InternalServerError(), "Internal Server Error")
        }
    }
}

/// GET /api/mlDataset/{id}
#[get("/{id}")]
pub async fn get_dataset(
    path: web::Path<String>,
    store: web::Data<dyn DatasetStore>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return text(HttpResponse::BadRequest(), "Invalid ID");
    };

    match store.get_by_id(id).await {
        Ok(Some(dataset)) => HttpResponse::Ok().json(dataset),
        Ok(None) => text(HttpResponse::NotFound(), "Not found"),
        Err(e) => {
            log::error!("Failed to retrieve dataset {id}: {e}");
            text(HttpResponse::InternalServerError(), "Internal Server Error")
        }
    }
}

pub fn dataset_scope() -> Scope {
    web::scope("/api/mlDataset")
        .service(preflight)
        .service(list_datasets)
        .service(get_dataset)
}
