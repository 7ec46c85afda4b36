//! Concrete repository implementations, one per entity.

pub mod folder;
pub mod note;
pub mod session;
pub mod user;

pub use folder::FolderRepository;
pub use note::NoteRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
