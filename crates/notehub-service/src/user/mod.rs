//! User registration, authentication, and profile use cases.

pub mod service;

pub use service::UserService;
