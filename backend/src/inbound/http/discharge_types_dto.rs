//! Discharge type DTO and the mapper between it and the domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DischargeType, Error};
use crate::inbound::http::validation::{
    discharge_type_validation_error, discharge_type_validation_index_error,
};

/// Wire representation of a discharge type.
///
/// Missing fields deserialise as empty strings so the mapper reports them as
/// field-level validation failures rather than a generic JSON error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct DischargeTypeDto {
    /// Unique key, at most 10 characters.
    #[schema(example = "ZZ", max_length = 10)]
    pub code: String,
    /// Human-readable label, at most 100 characters.
    #[schema(example = "aDescription", max_length = 100)]
    pub description: String,
}

/// Explicit conversion between [`DischargeTypeDto`] and [`DischargeType`].
///
/// # Examples
/// ```
/// use hospital_backend::domain::DischargeType;
/// use hospital_backend::inbound::http::discharge_types_dto::DischargeTypeMapper;
///
/// let mapper = DischargeTypeMapper::new();
/// let model = DischargeType::try_from_strings("ZZ", "aDescription").expect("valid");
/// let dto = mapper.map_to_dto(model.clone());
/// assert_eq!(dto.code, "ZZ");
/// assert_eq!(mapper.map_to_model(dto).expect("valid dto"), model);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DischargeTypeMapper;

impl DischargeTypeMapper {
    /// Construct a mapper.
    pub const fn new() -> Self {
        Self
    }

    /// Render an entity as its wire DTO.
    pub fn map_to_dto(&self, model: DischargeType) -> DischargeTypeDto {
        let (code, description) = model.into_parts();
        DischargeTypeDto {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Validate a DTO into a domain entity; failures are `invalid_request`.
    pub fn map_to_model(&self, dto: DischargeTypeDto) -> Result<DischargeType, Error> {
        DischargeType::try_from_strings(dto.code, dto.description)
            .map_err(|err| discharge_type_validation_error(&err))
    }

    /// Render entities as DTOs, keeping their order.
    pub fn map_to_dto_list(&self, models: Vec<DischargeType>) -> Vec<DischargeTypeDto> {
        models
            .into_iter()
            .map(|model| self.map_to_dto(model))
            .collect()
    }

    /// Validate every DTO, reporting the index of the first invalid one.
    pub fn map_to_model_list(
        &self,
        dtos: Vec<DischargeTypeDto>,
    ) -> Result<Vec<DischargeType>, Error> {
        dtos.into_iter()
            .enumerate()
            .map(|(index, dto)| {
                DischargeType::try_from_strings(dto.code, dto.description)
                    .map_err(|err| discharge_type_validation_index_error(&err, index))
            })
            .collect()
    }
}
