//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models.rs`) and the table definitions (`schema.rs`) stay private
//! to this module, and every database failure is mapped to the port's error
//! enum before it leaves the adapter.
//!
//! # Example
//!
//! ```no_run
//! use hospital_backend::outbound::persistence::{
//!     DbPool, DieselDischargeTypeRepository, PoolConfig,
//! };
//!
//! # async fn wire() -> Result<(), hospital_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hospital")).await?;
//! let _repository = DieselDischargeTypeRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_discharge_type_repository;
mod diesel_error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_discharge_type_repository::DieselDischargeTypeRepository;
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
