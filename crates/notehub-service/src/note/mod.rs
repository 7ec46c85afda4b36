//! Note CRUD and publish/unpublish transitions.

pub mod service;

pub use service::NoteService;
