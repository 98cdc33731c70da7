//! # Rendering Module
//!
//! HTML to PDF conversion. The domain and REST layers only see the
//! [`PdfRenderer`] trait, so the external tool can be swapped or faked in tests.
//!
//! The renderer is resolved once at startup. When no working tool is found the
//! application state simply carries no renderer and the export endpoint answers
//! `503 Service Unavailable` for the rest of the process lifetime.

pub mod wkhtmltopdf;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use wkhtmltopdf::WkhtmltopdfRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF tool not available at {binary:?}: {reason}")]
    Unavailable { binary: PathBuf, reason: String },

    #[error("Failed to start PDF tool {binary:?}: {source}")]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF tool exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },

    #[error("I/O error while talking to the PDF tool: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts a complete HTML document into PDF bytes
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Vec<u8>, RenderError>;
}

/// Page layout passed to the PDF tool
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub page_size: String,
    pub margin_top: String,
    pub margin_right: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub encoding: String,
    pub quiet: bool,
    pub enable_local_file_access: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            margin_top: "15mm".to_string(),
            margin_right: "15mm".to_string(),
            margin_bottom: "15mm".to_string(),
            margin_left: "15mm".to_string(),
            encoding: "UTF-8".to_string(),
            quiet: true,
            enable_local_file_access: true,
        }
    }
}
