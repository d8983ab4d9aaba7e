//! Shared domain crate for the school records client.
//!
//! Everything here is browser-independent: the wire models exchanged with the
//! REST backend, envelope decoding, the grade aggregation and search filters
//! used by the pages, and the small state machines the forms and list pages
//! drive. The `frontend` crate renders these, the tests exercise them natively.

pub mod aggregate;
pub mod deletion;
pub mod envelope;
pub mod error;
pub mod form;
pub mod format;
pub mod grading;
pub mod model;
pub mod search;
