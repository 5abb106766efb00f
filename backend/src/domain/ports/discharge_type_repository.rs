//! Port for discharge type persistence.
//!
//! Adapters store the canonical collection of discharge types. They enforce
//! code uniqueness at the storage level and report a collision as
//! [`DischargeTypeRepositoryError::DuplicateCode`]; every other business rule
//! lives in the domain service.

use async_trait::async_trait;

use crate::domain::{DischargeType, DischargeTypeCode};

use super::define_port_error;

define_port_error! {
    /// Errors raised by discharge type repository adapters.
    pub enum DischargeTypeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "discharge type repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "discharge type repository query failed: {message}",
        /// A row with the same code already exists.
        DuplicateCode { code: String } =>
            "discharge type code already exists: {code}",
    }
}

/// Storage contract for discharge types.
///
/// `list_all` returns rows ordered by code so callers see a stable order
/// regardless of the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DischargeTypeRepository: Send + Sync {
    /// Fetch every discharge type, ordered by code.
    async fn list_all(&self) -> Result<Vec<DischargeType>, DischargeTypeRepositoryError>;

    /// Return whether a discharge type with `code` is stored.
    async fn exists(&self, code: &DischargeTypeCode)
    -> Result<bool, DischargeTypeRepositoryError>;

    /// Insert a new discharge type.
    ///
    /// Fails with [`DischargeTypeRepositoryError::DuplicateCode`] when the code
    /// is already taken.
    async fn insert(&self, discharge_type: &DischargeType)
    -> Result<(), DischargeTypeRepositoryError>;

    /// Overwrite the description of an existing discharge type.
    ///
    /// Returns `false` when no row matched the code.
    async fn update(
        &self,
        discharge_type: &DischargeType,
    ) -> Result<bool, DischargeTypeRepositoryError>;

    /// Remove the discharge type keyed by `code`.
    ///
    /// Returns `false` when no row matched the code.
    async fn delete(&self, code: &DischargeTypeCode)
    -> Result<bool, DischargeTypeRepositoryError>;
}
