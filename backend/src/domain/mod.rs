//! # Domain Module
//!
//! Contains all business logic for the bill splitter.
//!
//! Nothing in here knows about HTTP, HTML or the PDF tool. Every function is
//! deterministic and request-scoped: no state survives a request.
//!
//! ## Module Organization
//!
//! - **currency**: Parsing and formatting of `R$` amounts
//! - **bill_splitter**: The fixed light/water split rule and the form-level service
//! - **report**: The model behind the PDF export
//!
//! ## Business Rules
//!
//! - Iara pays 1/3 of the light bill and 1/2 of the water bill
//! - Rodrigo pays 2/3 of the light bill and 1/2 of the water bill
//! - Amounts that cannot be read count as zero and never block the page
//! - The export echoes the displayed values without recomputing them

pub mod bill_splitter;
pub mod currency;
pub mod report;

pub use bill_splitter::*;
pub use currency::*;
pub use report::*;
