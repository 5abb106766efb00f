//! Discharge type HTTP handlers.
//!
//! ```text
//! POST   /dischargetypes
//! PUT    /dischargetypes
//! GET    /dischargetypes
//! DELETE /dischargetypes/{code}
//! ```
//!
//! Handlers translate DTOs through [`DischargeTypeMapper`] and delegate every
//! decision to the [`DischargeTypeManager`] held in [`HttpState`].
//!
//! [`DischargeTypeMapper`]: crate::inbound::http::discharge_types_dto::DischargeTypeMapper
//! [`DischargeTypeManager`]: crate::domain::ports::DischargeTypeManager

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;
use tracing::warn;

use crate::domain::{DischargeTypeCode, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::discharge_types_dto::DischargeTypeDto;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::discharge_type_validation_error;

fn not_found(code: &DischargeTypeCode) -> Error {
    Error::not_found("discharge type not found").with_details(json!({
        "field": "code",
        "value": code.as_ref(),
        "code": "unknown_code",
    }))
}

fn parse_path_code(raw: String) -> Result<DischargeTypeCode, Error> {
    DischargeTypeCode::new(raw).map_err(|err| discharge_type_validation_error(&err))
}

/// Create a discharge type.
#[utoipa::path(
    post,
    path = "/dischargetypes",
    request_body = DischargeTypeDto,
    responses(
        (status = 201, description = "Discharge type created", body = DischargeTypeDto),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Code already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["discharge-types"],
    operation_id = "newDischargeType"
)]
#[post("/dischargetypes")]
pub async fn create_discharge_type(
    state: web::Data<HttpState>,
    payload: web::Json<DischargeTypeDto>,
) -> ApiResult<HttpResponse> {
    let model = state.mapper.map_to_model(payload.into_inner())?;
    let created = state.discharge_types.create(model).await?;

    if !state.discharge_types.is_code_present(created.code()).await? {
        warn!(code = %created.code(), "discharge type missing after create");
        return Err(Error::internal("discharge type not created"));
    }

    Ok(HttpResponse::Created().json(state.mapper.map_to_dto(created)))
}

/// Update the description of an existing discharge type.
#[utoipa::path(
    put,
    path = "/dischargetypes",
    request_body = DischargeTypeDto,
    responses(
        (status = 200, description = "Discharge type updated", body = DischargeTypeDto),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown code", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["discharge-types"],
    operation_id = "updateDischargeType"
)]
#[put("/dischargetypes")]
pub async fn update_discharge_type(
    state: web::Data<HttpState>,
    payload: web::Json<DischargeTypeDto>,
) -> ApiResult<web::Json<DischargeTypeDto>> {
    let model = state.mapper.map_to_model(payload.into_inner())?;

    if !state.discharge_types.is_code_present(model.code()).await? {
        return Err(not_found(model.code()));
    }

    let updated = state.discharge_types.update(model).await?;
    Ok(web::Json(state.mapper.map_to_dto(updated)))
}

/// List every discharge type.
#[utoipa::path(
    get,
    path = "/dischargetypes",
    responses(
        (status = 200, description = "All discharge types", body = [DischargeTypeDto]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["discharge-types"],
    operation_id = "getDischargeTypes"
)]
#[get("/dischargetypes")]
pub async fn list_discharge_types(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<DischargeTypeDto>>> {
    let discharge_types = state.discharge_types.list().await?;
    Ok(web::Json(state.mapper.map_to_dto_list(discharge_types)))
}

/// Delete the discharge type keyed by `code`.
#[utoipa::path(
    delete,
    path = "/dischargetypes/{code}",
    params(("code" = String, Path, description = "Discharge type code")),
    responses(
        (status = 200, description = "Discharge type deleted", body = bool),
        (status = 400, description = "Invalid code", body = ErrorSchema),
        (status = 404, description = "Unknown code", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["discharge-types"],
    operation_id = "deleteDischargeType"
)]
#[delete("/dischargetypes/{code}")]
pub async fn delete_discharge_type(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<bool>> {
    let code = parse_path_code(path.into_inner())?;

    if !state.discharge_types.is_code_present(&code).await? {
        return Err(not_found(&code));
    }

    if !state.discharge_types.delete(&code).await? {
        warn!(code = %code, "discharge type delete removed nothing");
        return Err(Error::internal("discharge type not deleted"));
    }

    Ok(web::Json(true))
}

#[cfg(test)]
#[path = "discharge_types_tests.rs"]
mod tests;
