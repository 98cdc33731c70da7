//! # REST API Interface Layer
//!
//! Form-based endpoints of the bill splitter.
//!
//! ## Error Handling
//!
//! - Unreadable amounts never fail a request; they count as zero and a notice is shown
//! - Export without a PDF tool answers `503 Service Unavailable`
//! - A PDF tool failure answers `500 Internal Server Error` with a generic message

pub mod export_apis;
pub mod split_apis;

pub use export_apis::*;
pub use split_apis::*;
