//! # IO Module
//!
//! The HTTP side of the bill splitter.
//!
//! Handlers translate form posts into domain calls and domain results into
//! HTML pages or PDF downloads. No business rule lives here.
//!
//! ## Supported Operations
//!
//! - **GET /**: Empty form
//! - **POST /**: Split the bills typed into the form
//! - **POST /download_pdf**: Export the displayed shares as a PDF attachment

pub mod rest;
pub mod templates;

pub use rest::*;
