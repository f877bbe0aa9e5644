//! REST API endpoint for text analysis

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::{Analysis, Conclusion, Premise};
use crate::service::AnalysisService;

/// Request body for text analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Text to decompose into premises and a conclusion
    pub text: String,
}

/// Decompose a text into labeled premises and a conclusion
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Text analyzed successfully", body = Analysis),
        (status = 400, description = "Text is empty after trimming", body = ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze(
    service: web::Data<AnalysisService>,
    payload: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let text = payload.text.trim();

    if text.is_empty() {
        return Err(ApiError::EmptyText);
    }

    let analysis = service.analyze(text);

    tracing::info!(
        premise_count = analysis.premises.len(),
        text_chars = text.chars().count(),
        "Text analyzed"
    );

    Ok(HttpResponse::Ok().json(analysis))
}

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    paths(
        analyze,
        crate::api::health::health,
        crate::api::health::index
    ),
    components(schemas(
        AnalyzeRequest,
        Analysis,
        Premise,
        Conclusion,
        ErrorResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ServiceInfo
    )),
    tags(
        (name = "analysis", description = "Premise/conclusion extraction"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;

    async fn send(body: Value) -> (actix_web::http::StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AnalysisService::new()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_analyze_three_sentences() {
        let (status, body) =
            send(json!({"text": "A cat sat. A dog ran. Cats and dogs are pets."})).await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(
            body["premises"],
            json!([
                {"label": "P", "text": "A cat sat"},
                {"label": "Q", "text": "A dog ran"}
            ])
        );
        assert_eq!(
            body["conclusion"],
            json!({"label": "C", "text": "Cats and dogs are pets."})
        );
        assert_eq!(body["propositions"]["C"], "Cats and dogs are pets.");
        assert_eq!(
            body["logical_structure"],
            "2 premissas (P, Q, R...) → 1 conclusão (C)"
        );
        assert_eq!(body["factual"], "inconclusivo");
    }

    #[actix_web::test]
    async fn test_analyze_empty_text_is_rejected() {
        let (status, body) = send(json!({"text": ""})).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "O campo 'text' não pode estar vazio.");
    }

    #[actix_web::test]
    async fn test_analyze_whitespace_only_text_is_rejected() {
        let (status, body) = send(json!({"text": "   \n\t "})).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "O campo 'text' não pode estar vazio.");
    }

    #[actix_web::test]
    async fn test_analyze_short_text() {
        let (status, body) = send(json!({"text": "Oi."})).await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(body["premises"], json!([{"label": "P", "text": "Oi."}]));
        assert_eq!(
            body["conclusion"]["text"],
            "Texto muito curto para análise robusta."
        );
    }
}
