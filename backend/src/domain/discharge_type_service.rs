//! Discharge type domain service.
//!
//! Implements [`DischargeTypeManager`] over a [`DischargeTypeRepository`],
//! enforcing code uniqueness on create and existence on update, and mapping
//! storage failures onto domain error categories.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    DischargeTypeManager, DischargeTypeRepository, DischargeTypeRepositoryError,
};
use crate::domain::{DischargeType, DischargeTypeCode, Error};

/// Persistence manager for discharge types.
#[derive(Clone)]
pub struct DischargeTypeService<R> {
    repository: Arc<R>,
}

impl<R> DischargeTypeService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> DischargeTypeService<R>
where
    R: DischargeTypeRepository,
{
    fn map_repository_error(error: DischargeTypeRepositoryError) -> Error {
        match error {
            DischargeTypeRepositoryError::Connection { message } => Error::service_unavailable(
                format!("discharge type repository unavailable: {message}"),
            ),
            DischargeTypeRepositoryError::Query { message } => {
                Error::internal(format!("discharge type repository error: {message}"))
            }
            DischargeTypeRepositoryError::DuplicateCode { code } => Self::duplicate_code(&code),
        }
    }

    fn duplicate_code(code: &str) -> Error {
        Error::conflict("discharge type code already in use").with_details(json!({
            "field": "code",
            "value": code,
            "code": "duplicate_code",
        }))
    }

    fn unknown_code(code: &DischargeTypeCode) -> Error {
        Error::not_found("discharge type not found").with_details(json!({
            "field": "code",
            "value": code.as_ref(),
            "code": "unknown_code",
        }))
    }

    async fn exists(&self, code: &DischargeTypeCode) -> Result<bool, Error> {
        self.repository
            .exists(code)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[async_trait]
impl<R> DischargeTypeManager for DischargeTypeService<R>
where
    R: DischargeTypeRepository,
{
    async fn list(&self) -> Result<Vec<DischargeType>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn is_code_present(&self, code: &DischargeTypeCode) -> Result<bool, Error> {
        self.exists(code).await
    }

    async fn create(&self, discharge_type: DischargeType) -> Result<DischargeType, Error> {
        let code = discharge_type.code();
        if self.exists(code).await? {
            return Err(Self::duplicate_code(code.as_ref()));
        }
        self.repository
            .insert(&discharge_type)
            .await
            .map_err(Self::map_repository_error)?;
        info!(code = %code, "discharge type created");
        Ok(discharge_type)
    }

    async fn update(&self, discharge_type: DischargeType) -> Result<DischargeType, Error> {
        let code = discharge_type.code();
        if !self.exists(code).await? {
            return Err(Self::unknown_code(code));
        }
        let updated = self
            .repository
            .update(&discharge_type)
            .await
            .map_err(Self::map_repository_error)?;
        if !updated {
            // Deleted between the existence check and the write.
            warn!(code = %code, "discharge type vanished before update");
            return Err(Self::unknown_code(code));
        }
        info!(code = %code, "discharge type updated");
        Ok(discharge_type)
    }

    async fn delete(&self, code: &DischargeTypeCode) -> Result<bool, Error> {
        let deleted = self
            .repository
            .delete(code)
            .await
            .map_err(Self::map_repository_error)?;
        if deleted {
            info!(code = %code, "discharge type deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "discharge_type_service_tests.rs"]
mod tests;
