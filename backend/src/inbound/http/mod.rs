//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod discharge_types;
pub mod discharge_types_dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// Register the discharge type handlers at `/dischargetypes`.
///
/// Callers provide [`state::HttpState`] as `web::Data`; the JSON extractor
/// configuration is installed here so body errors share the error schema.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hospital_backend::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .service(discharge_types::create_discharge_type)
        .service(discharge_types::update_discharge_type)
        .service(discharge_types::list_discharge_types)
        .service(discharge_types::delete_discharge_type);
}
