//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::discharge_types;

/// Row struct for reading from the discharge_types table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = discharge_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DischargeTypeRow {
    pub code: String,
    pub description: String,
}

/// Insertable struct for creating new discharge type records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = discharge_types)]
pub(crate) struct NewDischargeTypeRow<'a> {
    pub code: &'a str,
    pub description: &'a str,
}

/// Changeset struct for updating an existing discharge type.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = discharge_types)]
pub(crate) struct DischargeTypeUpdate<'a> {
    pub description: &'a str,
}
