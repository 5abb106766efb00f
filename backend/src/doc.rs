//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the discharge type endpoints, the health probes and
//! the error schema wrappers from [`crate::inbound::http::schemas`]. Swagger
//! UI serves it in debug builds and `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::discharge_types_dto::DischargeTypeDto;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital backend API",
        description = "CRUD access to discharge type reference data plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::discharge_types::create_discharge_type,
        crate::inbound::http::discharge_types::update_discharge_type,
        crate::inbound::http::discharge_types::list_discharge_types,
        crate::inbound::http::discharge_types::delete_discharge_type,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(DischargeTypeDto, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "discharge-types", description = "Discharge type reference data"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
