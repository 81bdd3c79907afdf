use crate::demo::{run_demo, run_evaluate, run_stats, DemoArgs, EvaluateArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scholarship_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Scholarship Eligibility Service",
    about = "Serve and explore scholarship eligibility predictions from the command line",
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
    /// Evaluate a single student profile against every provider rule
    Evaluate(EvaluateArgs),
    /// Walk through a set of sample applicants
    Demo(DemoArgs),
    /// Summarize the training dataset and stored model metrics
    Stats(StatsArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
        Command::Stats(args) => run_stats(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serving() {
        let cli = Cli::try_parse_from(["scholarship-ai-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_evaluate_arguments() {
        let cli = Cli::try_parse_from([
            "scholarship-ai-api",
            "evaluate",
            "--year",
            "3",
            "--cgpa",
            "3.6",
            "--income",
            "45000",
            "--cocurricular",
            "72",
            "--leadership",
            "2",
            "--service",
            "55",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.year, 3);
                assert_eq!(args.cgpa, 3.6);
                assert!(args.json);
                assert!(args.model_dir.is_none());
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_requires_every_profile_field() {
        let result = Cli::try_parse_from(["scholarship-ai-api", "evaluate", "--year", "2"]);
        assert!(result.is_err());
    }
}
