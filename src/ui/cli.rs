// src/ui/cli.rs

use std::path::PathBuf;

use clap::Parser;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Launch this app directly, skipping the menu
    pub name: Option<String>,

    /// Path to the apps.json store (default: next to the executable)
    #[clap(short = 's', long = "store")]
    pub store: Option<PathBuf>,

    /// Print the configured apps and exit
    #[clap(long)]
    pub list: bool,

    /// Do not clear the screen before showing the menu
    #[clap(long)]
    pub no_clear: bool,
}
