//! Diesel and pool error mapping for the discharge type repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::DischargeTypeRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> DischargeTypeRepositoryError {
    DischargeTypeRepositoryError::connection(error.into_message())
}

/// Map a Diesel failure, naming `code` when a unique constraint fired.
pub(super) fn map_diesel_error(error: DieselError, code: &str) -> DischargeTypeRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DischargeTypeRepositoryError::duplicate_code(code)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DischargeTypeRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => DischargeTypeRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            DischargeTypeRepositoryError::query("database query error")
        }
        _ => DischargeTypeRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(String::from("boom")))
    }

    #[rstest]
    fn unique_violation_names_the_code() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::UniqueViolation), "ZZ");
        assert_eq!(mapped, DischargeTypeRepositoryError::duplicate_code("ZZ"));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection), "ZZ");
        assert!(matches!(
            mapped,
            DischargeTypeRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    #[case(DieselError::NotFound)]
    #[case(database_error(DatabaseErrorKind::ForeignKeyViolation))]
    #[case(DieselError::RollbackTransaction)]
    fn other_failures_are_query_errors(#[case] error: DieselError) {
        let mapped = map_diesel_error(error, "ZZ");
        assert!(matches!(mapped, DischargeTypeRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, DischargeTypeRepositoryError::connection("timed out"));
    }
}
