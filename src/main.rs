//! radiotray-ng-mpris: run Radiotray-NG behind an MPRIS2 interface.

use std::process::ExitCode;

use clap::Parser;
use radiotray_mpris::{BridgeError, bridge, cli::Cli, config::Config, tracing_config};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_config_schema {
        return match Config::json_schema() {
            Ok(schema) => {
                println!("{schema}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("radiotray-ng-mpris: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report_early(&e),
    };

    let level = cli.verbosity().map_or_else(
        || config.general.log_level.to_string(),
        |verbosity| verbosity.directive().to_string(),
    );
    if let Err(e) = tracing_config::init(&level) {
        return report_early(&e);
    }

    match bridge::run(&config, cli.play).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, BridgeError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(poll_interval) = cli.poll_interval {
        config.bridge.poll_interval_ms = poll_interval;
    }
    Ok(config)
}

/// Errors raised before logging is up go straight to stderr.
fn report_early(error: &BridgeError) -> ExitCode {
    eprintln!("radiotray-ng-mpris: {error}");
    ExitCode::from(error.exit_code())
}
