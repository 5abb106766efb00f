//! PostgreSQL-backed `DischargeTypeRepository` implementation using Diesel ORM.
//!
//! Code uniqueness is enforced by the primary key; a collision on insert
//! surfaces as [`DischargeTypeRepositoryError::DuplicateCode`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{DischargeTypeRepository, DischargeTypeRepositoryError};
use crate::domain::{DischargeType, DischargeTypeCode};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DischargeTypeRow, DischargeTypeUpdate, NewDischargeTypeRow};
use super::pool::DbPool;
use super::schema::discharge_types;

/// Diesel-backed implementation of the `DischargeTypeRepository` port.
#[derive(Clone)]
pub struct DieselDischargeTypeRepository {
    pool: DbPool,
}

impl DieselDischargeTypeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into the domain entity.
///
/// Rows written outside this service may break the domain limits; those are
/// reported as query errors rather than silently truncated.
fn row_to_discharge_type(
    row: DischargeTypeRow,
) -> Result<DischargeType, DischargeTypeRepositoryError> {
    let DischargeTypeRow { code, description } = row;
    DischargeType::try_from_strings(code.as_str(), description).map_err(|err| {
        warn!(code = %code, error = %err, "stored discharge type violates domain rules");
        DischargeTypeRepositoryError::query(format!("invalid stored discharge type {code}: {err}"))
    })
}

#[async_trait]
impl DischargeTypeRepository for DieselDischargeTypeRepository {
    async fn list_all(&self) -> Result<Vec<DischargeType>, DischargeTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DischargeTypeRow> = discharge_types::table
            .order(discharge_types::code.asc())
            .select(DischargeTypeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, ""))?;

        rows.into_iter().map(row_to_discharge_type).collect()
    }

    async fn exists(
        &self,
        code: &DischargeTypeCode,
    ) -> Result<bool, DischargeTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            discharge_types::table.filter(discharge_types::code.eq(code.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, code.as_ref()))
    }

    async fn insert(
        &self,
        discharge_type: &DischargeType,
    ) -> Result<(), DischargeTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let code = discharge_type.code().as_ref();

        let new_row = NewDischargeTypeRow {
            code,
            description: discharge_type.description().as_ref(),
        };

        diesel::insert_into(discharge_types::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, code))
    }

    async fn update(
        &self,
        discharge_type: &DischargeType,
    ) -> Result<bool, DischargeTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let code = discharge_type.code().as_ref();

        let changes = DischargeTypeUpdate {
            description: discharge_type.description().as_ref(),
        };

        let updated = diesel::update(discharge_types::table.find(code))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, code))?;

        Ok(updated > 0)
    }

    async fn delete(
        &self,
        code: &DischargeTypeCode,
    ) -> Result<bool, DischargeTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(discharge_types::table.find(code.as_ref()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, code.as_ref()))?;

        Ok(deleted > 0)
    }
}
