//! End-to-end tests for the record endpoints.
//!
//! Each test gets its own in-memory SQLite database migrated with the same
//! migrations the server runs against PostgreSQL.
//!
//! Run with: cargo test --test records_e2e


mod test_health;
mod test_list;
mod test_nested_writes;
