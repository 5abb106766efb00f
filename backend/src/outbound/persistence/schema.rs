//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. The
//! `diesel print-schema` command regenerates them from a live database.

diesel::table! {
    /// Discharge type reference data keyed by its short code.
    discharge_types (code) {
        /// Primary key: unique code (max 10 characters).
        #[max_length = 10]
        code -> Varchar,
        /// Human-readable label (max 100 characters).
        #[max_length = 100]
        description -> Varchar,
    }
}
