//! Domain ports for the hexagonal boundary.
//!
//! - [`DischargeTypeManager`] is the driving port inbound adapters call.
//! - [`DischargeTypeRepository`] is the driven port persistence adapters
//!   implement.

mod macros;
pub(crate) use macros::define_port_error;

mod discharge_type_manager;
mod discharge_type_repository;

pub use discharge_type_manager::DischargeTypeManager;
#[cfg(test)]
pub use discharge_type_manager::MockDischargeTypeManager;
#[cfg(test)]
pub use discharge_type_repository::MockDischargeTypeRepository;
pub use discharge_type_repository::{DischargeTypeRepository, DischargeTypeRepositoryError};
