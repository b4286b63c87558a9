//! Lavadocs CLI - Push Markdown notes to Lavadocs

use std::process::ExitCode;

use clap::Parser;

use lavadocs_cli::cli::Cli;
use lavadocs_cli::logging;
use lavadocs_cli::output::json::format_error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            match format_error(&format!("{e:#}"), "COMMAND_FAILED") {
                Ok(obj) if json => println!("{obj}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
