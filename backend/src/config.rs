//! Server configuration.
//!
//! Every setting can come from a command line flag or from the environment
//! variable of the same name. Values are resolved once in `main` and passed
//! into [`crate::initialize_backend`].

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Local install location used when no override is given and we are not on Render
#[cfg(windows)]
pub const LOCAL_WKHTMLTOPDF_PATH: &str = r"C:\Program Files\wkhtmltopdf\bin\wkhtmltopdf.exe";
#[cfg(not(windows))]
pub const LOCAL_WKHTMLTOPDF_PATH: &str = "/usr/local/bin/wkhtmltopdf";

/// Name looked up on `PATH` when deployed on Render
pub const SYSTEM_WKHTMLTOPDF: &str = "wkhtmltopdf";

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "bill-splitter",
    version,
    about = "Splits the light and water bills between Iara and Rodrigo"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Set to "true" when running on Render, where wkhtmltopdf is on PATH
    #[arg(
        long,
        env = "RENDER",
        action = ArgAction::Set,
        default_value = "false",
        value_parser = parse_render_flag
    )]
    pub render: bool,

    /// Explicit path to the wkhtmltopdf binary
    #[arg(long, env = "WKHTMLTOPDF_PATH")]
    pub wkhtmltopdf_path: Option<PathBuf>,
}

/// Anything other than a case-insensitive "true" is false
fn parse_render_flag(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

impl ServerConfig {
    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Which wkhtmltopdf binary to probe at startup
    pub fn wkhtmltopdf_binary(&self) -> PathBuf {
        if let Some(path) = &self.wkhtmltopdf_path {
            return path.clone();
        }
        if self.render {
            PathBuf::from(SYSTEM_WKHTMLTOPDF)
        } else {
            PathBuf::from(LOCAL_WKHTMLTOPDF_PATH)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            render: false,
            wkhtmltopdf_path: None,
        }
    }
}
