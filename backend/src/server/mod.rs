//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use hospital_backend::Trace;
#[cfg(debug_assertions)]
use hospital_backend::doc::ApiDoc;
use hospital_backend::domain::DischargeTypeService;
use hospital_backend::domain::ports::DischargeTypeManager;
use hospital_backend::inbound::http::configure_api;
use hospital_backend::inbound::http::discharge_types_dto::DischargeTypeMapper;
use hospital_backend::inbound::http::health::{HealthState, live, ready};
use hospital_backend::inbound::http::state::HttpState;
use hospital_backend::outbound::memory::InMemoryDischargeTypeRepository;
use hospital_backend::outbound::persistence::{DbPool, DieselDischargeTypeRepository};

/// Pick the repository: PostgreSQL when a pool is configured, memory otherwise.
fn build_manager(db_pool: Option<DbPool>) -> Arc<dyn DischargeTypeManager> {
    match db_pool {
        Some(pool) => {
            info!("discharge types stored in PostgreSQL");
            Arc::new(DischargeTypeService::new(Arc::new(
                DieselDischargeTypeRepository::new(pool),
            )))
        }
        None => {
            info!("no database configured; discharge types stored in memory");
            Arc::new(DischargeTypeService::new(Arc::new(
                InMemoryDischargeTypeRepository::default(),
            )))
        }
    }
}

#[cfg(feature = "metrics")]
fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("hospital")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}")))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = web::Data::new(HttpState::new(
        build_manager(db_pool),
        DischargeTypeMapper::new(),
    ));
    #[cfg(feature = "metrics")]
    let metrics = build_metrics()?;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}
