use crate::demo::{run_demo, run_guidance, run_screen, DemoArgs, GuidanceArgs, ScreenArgs};
use crate::server;
use carewatch::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "CareWatch",
    about = "Screen wearable vitals for cognitive risk and relay warehouse alerts",
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
    /// Screen one reading or replay a vitals history export
    Screen(ScreenArgs),
    /// Print the care guidance published for a risk tier
    Guidance(GuidanceArgs),
    /// Walk through reference screenings and a warehouse alert sequence
    Demo(DemoArgs),
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
        Command::Screen(args) => run_screen(args),
        Command::Guidance(args) => run_guidance(args),
        Command::Demo(args) => run_demo(args),
    }
}
