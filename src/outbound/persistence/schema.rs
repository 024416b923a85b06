//! Diesel table definition for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly; regenerate with `diesel
//! print-schema` after schema changes.

diesel::table! {
    /// User records.
    ///
    /// `id` is the auto-assigned primary key; the store owns the schema.
    users (id) {
        /// Primary key, assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Display name.
        name -> Text,
        /// Contact email. No uniqueness constraint.
        email -> Text,
        /// Stored password, returned to clients by no read operation.
        password -> Text,
    }
}
