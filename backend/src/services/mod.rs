//! Business logic services
//!
//! Services own the account flow; routes stay thin and repositories stay
//! dumb.

pub mod manager;

pub use manager::ManagerService;
