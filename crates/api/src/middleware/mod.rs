//! Request middleware (authentication extractor).

pub mod auth;
