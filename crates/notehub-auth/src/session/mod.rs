//! Session lifecycle management.

pub mod manager;
pub mod token;

pub use manager::SessionManager;
