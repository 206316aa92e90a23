use clap::{Parser, Subcommand};
use outlink_core::conf::GatewayConfig;
use outlink_core::logging::init_logging;
use outlink_core::server;

#[derive(Parser, Debug)]
#[command(
    name = "outlink",
    version,
    about = "Outlink: Pingora-based HTTP redirect gateway"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the redirect gateway (default)
    Run,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run) | None => {
            init_logging();

            let cfg = GatewayConfig::from_env().expect("Failed to load gateway configuration");

            server::run(cfg).expect("Failed to start redirect gateway");
        }
    }
}
