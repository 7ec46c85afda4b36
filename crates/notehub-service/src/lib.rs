//! # notehub-service
//!
//! Business logic service layer for NoteHub. Each service orchestrates
//! repositories and authentication helpers to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. The acting user is never
//! ambient state: every operation receives an explicit [`RequestContext`].

pub mod context;
pub mod folder;
pub mod note;
pub mod ownership;
pub mod slug;
pub mod user;

pub use context::RequestContext;
pub use folder::FolderService;
pub use note::NoteService;
pub use slug::SlugGenerator;
pub use user::UserService;
