//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod dashboard;
pub mod folder;
pub mod health;
pub mod note;
pub mod public;
pub mod user;
