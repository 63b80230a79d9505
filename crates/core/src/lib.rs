//! Pure domain logic for the Selah reading backend.
//!
//! No I/O lives here: this crate defines the passage-addressing model,
//! the named-scope plan generator, and the plan progress aggregation
//! rules. The `selah-db` crate persists the results; the `selah-api`
//! crate exposes them over HTTP.

pub mod annotation;
pub mod error;
pub mod progress;
pub mod reference;
pub mod scope;
pub mod types;
