//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the database migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Authors table.
    ///
    /// The `id` column is a serial primary key assigned by the database.
    authors (id) {
        /// Serial primary key.
        id -> Int4,
        /// Author display name.
        name -> Varchar,
    }
}
