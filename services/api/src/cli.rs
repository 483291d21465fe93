use crate::demo::{
    run_demo, run_letter_draft, run_rights_evaluate, DemoArgs, LetterDraftArgs, RightsEvaluateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use redress::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Redress",
    about = "Run the consumer-rights calculators and complaint-letter service from the command line",
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
    /// Evaluate a claim against the standard rule book
    Rights {
        #[command(subcommand)]
        command: RightsCommand,
    },
    /// Draft complaint letters
    Letter {
        #[command(subcommand)]
        command: LetterCommand,
    },
    /// Walk through sample assessments and a template letter
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RightsCommand {
    /// Print the rights, remedies and next steps for one claim
    Evaluate(RightsEvaluateArgs),
}

#[derive(Subcommand, Debug)]
enum LetterCommand {
    /// Draft a letter, falling back to the template when no API key is configured
    Draft(LetterDraftArgs),
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
        Command::Rights {
            command: RightsCommand::Evaluate(args),
        } => run_rights_evaluate(args),
        Command::Letter {
            command: LetterCommand::Draft(args),
        } => run_letter_draft(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
