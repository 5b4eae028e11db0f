//! Diesel table definitions for the PostgreSQL schema.
//!
//! The service does not own migrations; these definitions must match the
//! externally managed `users` table. `diesel print-schema` against a live
//! database regenerates them.

diesel::table! {
    /// Registered users.
    ///
    /// `id` defaults to `gen_random_uuid()`; `username` and `email` each carry
    /// a unique constraint (`users_username_key`, `users_email_key`).
    users (id) {
        /// Primary key assigned by the database.
        id -> Uuid,
        /// Unique username, stored as submitted.
        username -> Varchar,
        /// Unique email address, stored as submitted.
        email -> Varchar,
    }
}
