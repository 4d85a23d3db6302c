use clap::Parser;
use repo_status::commands::{execute_status, StatusArgs};
use repo_status::core::print_error;
use std::env;

#[derive(Parser)]
#[command(name = "repo-status")]
#[command(about = "Git and GitHub status for every repository in a workspace, in one table")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    status: StatusArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag, unless RUST_LOG is already set
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    if let Err(e) = execute_status(cli.status).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
