//! Domain primitives, services, and ports.
//!
//! Purpose: define the discharge type entity and the rules around it without
//! depending on HTTP or database frameworks. Adapters in `inbound` and
//! `outbound` translate to and from these types.
//!
//! Public surface:
//! - [`DischargeType`] with its validated [`DischargeTypeCode`] and
//!   [`DischargeTypeDescription`].
//! - [`DischargeTypeService`], the persistence manager behind
//!   [`ports::DischargeTypeManager`].
//! - [`Error`] / [`ErrorCode`], the transport-agnostic error payload.
//! - [`TraceId`], the request correlation identifier.

pub mod discharge_type;
pub mod discharge_type_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::discharge_type::{
    DISCHARGE_TYPE_CODE_MAX, DISCHARGE_TYPE_DESCRIPTION_MAX, DischargeType, DischargeTypeCode,
    DischargeTypeDescription, DischargeTypeValidationError,
};
pub use self::discharge_type_service::DischargeTypeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;

/// HTTP header used to echo the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
