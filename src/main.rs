use anyhow::Result;
use clap::Parser;

use interview_records::cli::{handle_command, InterviewRecordsCli};
use interview_records::config::AppConfig;
use interview_records::telemetry::init_tracing;

fn main() -> Result<()> {
    let cli = InterviewRecordsCli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    match handle_command(cli, &config) {
        Ok(output) => {
            println!("{}", output.trim_end());
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
