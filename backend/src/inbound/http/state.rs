//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::DischargeTypeManager;
use crate::inbound::http::discharge_types_dto::DischargeTypeMapper;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence manager for discharge types.
    pub discharge_types: Arc<dyn DischargeTypeManager>,
    /// DTO and entity conversions.
    pub mapper: DischargeTypeMapper,
}

impl HttpState {
    /// Construct state from the discharge type manager and mapper.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hospital_backend::domain::DischargeTypeService;
    /// use hospital_backend::inbound::http::discharge_types_dto::DischargeTypeMapper;
    /// use hospital_backend::inbound::http::state::HttpState;
    /// use hospital_backend::outbound::memory::InMemoryDischargeTypeRepository;
    ///
    /// let repository = Arc::new(InMemoryDischargeTypeRepository::default());
    /// let state = HttpState::new(
    ///     Arc::new(DischargeTypeService::new(repository)),
    ///     DischargeTypeMapper::new(),
    /// );
    /// let _manager = state.discharge_types.clone();
    /// ```
    pub fn new(
        discharge_types: Arc<dyn DischargeTypeManager>,
        mapper: DischargeTypeMapper,
    ) -> Self {
        Self {
            discharge_types,
            mapper,
        }
    }
}
