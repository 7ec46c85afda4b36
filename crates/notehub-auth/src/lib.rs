//! # notehub-auth
//!
//! Authentication building blocks for NoteHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `session` — Opaque-token session lifecycle with sliding expiration

pub mod password;
pub mod session;

pub use password::PasswordHasher;
pub use session::SessionManager;
