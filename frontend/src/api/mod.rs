//! Data-access layer for the REST backend.
//!
//! Every entity module goes through [`client`], so all endpoints share one
//! transport, one error mapping and one logging policy. Decoding is explicit
//! per endpoint: list calls unwrap a page, single-record calls unwrap `data`.

pub mod client;
pub mod grades;
pub mod students;
pub mod subjects;
