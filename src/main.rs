use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();
    let args = appdock::ui::cli::Cli::parse();
    let code = appdock::app_controller::run(args)?;
    std::process::exit(code);
}
