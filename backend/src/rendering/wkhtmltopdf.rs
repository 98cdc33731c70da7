//! [`PdfRenderer`] backed by the `wkhtmltopdf` command line tool.
//!
//! The document is piped through stdin and the PDF read back from stdout
//! (`wkhtmltopdf [options] - -`), so no temporary files are involved.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use super::{PdfOptions, PdfRenderer, RenderError};

#[derive(Debug, Clone)]
pub struct WkhtmltopdfRenderer {
    binary: PathBuf,
    options: PdfOptions,
}

impl WkhtmltopdfRenderer {
    pub fn new(binary: impl Into<PathBuf>, options: PdfOptions) -> Self {
        Self {
            binary: binary.into(),
            options,
        }
    }

    /// Check that the tool runs (`wkhtmltopdf --version`) before handing out a renderer
    pub async fn probe(binary: impl Into<PathBuf>, options: PdfOptions) -> Result<Self, RenderError> {
        let binary = binary.into();
        let output = Command::new(&binary)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| RenderError::Unavailable {
                binary: binary.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RenderError::Unavailable {
                binary,
                reason: format!("--version exited with {}", output.status),
            });
        }

        info!(
            "Found PDF tool {:?}: {}",
            binary,
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(Self::new(binary, options))
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Command line options, without the input and output arguments
    pub fn option_args(&self) -> Vec<String> {
        let o = &self.options;
        let mut args = vec![
            "--page-size".to_string(),
            o.page_size.clone(),
            "--margin-top".to_string(),
            o.margin_top.clone(),
            "--margin-right".to_string(),
            o.margin_right.clone(),
            "--margin-bottom".to_string(),
            o.margin_bottom.clone(),
            "--margin-left".to_string(),
            o.margin_left.clone(),
            "--encoding".to_string(),
            o.encoding.clone(),
        ];
        if o.quiet {
            args.push("--quiet".to_string());
        }
        if o.enable_local_file_access {
            args.push("--enable-local-file-access".to_string());
        }
        args
    }
}

#[async_trait]
impl PdfRenderer for WkhtmltopdfRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        debug!("Rendering {} bytes of HTML with {:?}", html.len(), self.binary);

        let mut child = Command::new(&self.binary)
            .args(self.option_args())
            .arg("-")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RenderError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            RenderError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdin of the PDF tool is not piped",
            ))
        })?;

        // Feed stdin concurrently so a large PDF on stdout cannot stall the tool.
        let input = html.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        });

        let output = child.wait_with_output().await?;
        let written = writer.await;

        // A failing tool closes stdin early; report its stderr rather than the broken pipe.
        if !output.status.success() {
            return Err(RenderError::ToolFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|e| RenderError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))??;
        if output.stdout.is_empty() {
            return Err(RenderError::ToolFailed {
                status: output.status.to_string(),
                stderr: "no PDF data on stdout".to_string(),
            });
        }

        debug!("PDF tool produced {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}
