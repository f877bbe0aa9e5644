//! Health and service information endpoints

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::Config;

const SERVICE_NAME: &str = "nlp-api";

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Effective cross-origin allow list; `["*"]` means any origin
    pub allowed_origins: Vec<String>,
}

fn health_status() -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Health check endpoint
///
/// Always returns 200 OK if the service is running; the computation is
/// stateless with no dependencies to probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(health_status())
}

/// Service information endpoint
///
/// Returns the health payload plus the effective CORS configuration.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "health"
)]
#[get("/")]
pub async fn index(config: web::Data<Config>) -> impl Responder {
    let status = health_status();
    HttpResponse::Ok().json(ServiceInfo {
        status: status.status,
        service: status.service,
        version: status.version,
        allowed_origins: config.allowed_origins.clone(),
    })
}

/// Configure health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(index);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_health_payload() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "nlp-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_index_reports_allowed_origins() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["allowed_origins"], serde_json::json!(["*"]));
    }
}
