//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. All reads and writes
//! are scoped to an owner id; one user's rows are unreachable from
//! another's requests.

pub mod highlight_repo;
pub mod note_repo;
pub mod plan_repo;
pub mod user_repo;

pub use highlight_repo::HighlightRepo;
pub use note_repo::NoteRepo;
pub use plan_repo::PlanRepo;
pub use user_repo::UserRepo;
