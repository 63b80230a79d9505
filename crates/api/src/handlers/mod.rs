//! Request handlers, one module per resource.

pub mod auth;
pub mod highlights;
pub mod notes;
pub mod plans;
pub mod references;
