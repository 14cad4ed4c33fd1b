use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser, Serialize)]
#[command(about = "Combined women's and men's table of The Hundred")]
pub struct Cli {
    /// Port to listen on, overrides the PORT environment variable
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Render the live table once to stdout instead of serving it
    #[arg(long)]
    #[serde(skip)]
    pub stdout: bool,
}
