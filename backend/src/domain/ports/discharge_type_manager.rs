//! Driving port for discharge type use-cases.
//!
//! HTTP handlers depend on this trait only; they never see repositories or
//! storage errors. Every failure is already a domain [`Error`] carrying the
//! category the HTTP adapter turns into a status code.

use async_trait::async_trait;

use crate::domain::{DischargeType, DischargeTypeCode, Error};

/// Use-case port owning the discharge type collection and its rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DischargeTypeManager: Send + Sync {
    /// List every discharge type in storage order.
    async fn list(&self) -> Result<Vec<DischargeType>, Error>;

    /// Return whether `code` names an existing discharge type.
    async fn is_code_present(&self, code: &DischargeTypeCode) -> Result<bool, Error>;

    /// Create a discharge type; an existing code is a conflict.
    async fn create(&self, discharge_type: DischargeType) -> Result<DischargeType, Error>;

    /// Replace the description of an existing discharge type.
    async fn update(&self, discharge_type: DischargeType) -> Result<DischargeType, Error>;

    /// Delete the discharge type keyed by `code`, reporting whether a row went.
    async fn delete(&self, code: &DischargeTypeCode) -> Result<bool, Error>;
}
