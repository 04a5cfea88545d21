use crate::core::catalog::{
    farms_map_view, fixture_farms, merge_sheet_reports, policy_locations, policy_map_view,
    GENERAL_POLICY_DOCUMENT_URL,
};
use crate::core::extractor::SheetReportSource;
use crate::core::service::ReportService;
use crate::core::ConfigProvider;
use crate::domain::model::{FarmsResponse, PolicyResponse};
use crate::utils::error::Result;
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

pub const SERVICE_NAME: &str = "farm-monitor";

pub struct AppState {
    pub reports: ReportService,
    pub map_style_url: String,
}

impl AppState {
    pub fn new(reports: ReportService, map_style_url: impl Into<String>) -> Self {
        Self {
            reports,
            map_style_url: map_style_url.into(),
        }
    }
}

#[get("/api/reports")]
async fn list_reports(data: web::Data<AppState>) -> impl Responder {
    let response = data.reports.serve_reports().await;

    let mut builder = if response.is_error() {
        HttpResponse::InternalServerError()
    } else {
        HttpResponse::Ok()
    };
    builder
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(response)
}

#[get("/api/farms")]
async fn list_farms(data: web::Data<AppState>) -> impl Responder {
    // 試算表失敗時視同沒有動態資料，只回傳固定的農場
    let records = match data.reports.source().fetch_reports().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("⚠️ Sheet reports unavailable, serving fixture farms only: {}", e);
            Vec::new()
        }
    };

    HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(FarmsResponse {
            farms: merge_sheet_reports(fixture_farms(), &records),
            map: farms_map_view(&data.map_style_url),
        })
}

#[get("/api/politica")]
async fn list_policy_documents(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PolicyResponse {
        general_document_url: GENERAL_POLICY_DOCUMENT_URL.to_string(),
        locations: policy_locations(),
        map: policy_map_view(&data.map_style_url),
    })
}

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_reports)
        .service(list_farms)
        .service(list_policy_documents)
        .service(health_check);
}

/// Runs the HTTP server until it is shut down.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let source = SheetReportSource::from_config(config)?;
    tracing::info!("📡 Report source: {}", source.url());

    let state = web::Data::new(AppState::new(
        ReportService::from_source(source),
        config.map_style_url(),
    ));

    let host = config.host().to_string();
    let port = config.port();
    tracing::info!("🚀 Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
