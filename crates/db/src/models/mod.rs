//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the
//! database row, plus a `Deserialize` create DTO where the insert
//! payload is structured (`UserRepo::create` takes scalar fields
//! instead).

pub mod highlight;
pub mod note;
pub mod plan;
pub mod user;
