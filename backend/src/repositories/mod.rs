//! Database repositories
//!
//! Provides the data access layer. Uniqueness of username/email is
//! enforced by the store's unique indexes, not here; a violated index
//! surfaces as a database error carrying the constraint name.

pub mod manager;
pub mod unit;

pub use manager::{ManagerRecord, ManagerRepository, NewManager, MANAGER_ROLE};
pub use unit::{UnitRecord, UnitRepository};
