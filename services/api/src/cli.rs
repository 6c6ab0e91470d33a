use crate::inspect::{run_breakdown, run_classify, InspectArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Scoring Tools",
    about = "Serve or run the credit scoring tools from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the classify_customer response for one input mapping
    Classify(InspectArgs),
    /// Print the score_breakdown response for one input mapping
    Breakdown(InspectArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Breakdown(args) => run_breakdown(args),
    }
}
