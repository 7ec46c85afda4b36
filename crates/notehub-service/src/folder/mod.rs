//! Folder CRUD and hierarchy maintenance.

pub mod service;

pub use service::FolderService;
