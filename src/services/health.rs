use actix_web::http::StatusCode;
use serde::Serialize;

use crate::db::store::DatasetStore;

pub const DATABASE_MISSING: &str = "MongoDB database check failed: Can not find Database";

/// Body of `/api/healthz`: `{"status":"healthy"}` or
/// `{"status":"unhealthy","error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy { error: String },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Re-checks connectivity on every call: healthy only if a fresh connection
/// succeeds and `database` is among the databases it can see.
pub async fn report_health(store: &dyn DatasetStore, database: &str) -> HealthStatus {
    match store.database_names(database).await {
        Err(e) => {
            log::error!("MongoDB database check failed: {e}");
            HealthStatus::Unhealthy {
                error: e.to_string(),
            }
        }
        Ok(names) if names.is_empty() => {
            log::error!("MongoDB database check failed: Can not find Database {database}");
            HealthStatus::Unhealthy {
                error: DATABASE_MISSING.to_string(),
            }
        }
        Ok(names) => {
            log::info!("Health check passed. MongoDB database {names:?} reporting as healthy.");
            HealthStatus::Healthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_body() {
        let body = serde_json::to_value(HealthStatus::Healthy).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
        assert_eq!(HealthStatus::Healthy.status_code(), StatusCode::OK);
    }

    #[test]
    fn unhealthy_body() {
        let status = HealthStatus::Unhealthy {
            error: "boom".into(),
        };
        let body = serde_json::to_value(&status).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "unhealthy", "error": "boom" })
        );
        assert_eq!(status.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!status.is_healthy());
    }
}
