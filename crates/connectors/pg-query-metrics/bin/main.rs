use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use pg_query_metrics::cli::{usage, Cli, CliError, Command};
use pg_query_metrics::output::{self, OutputMode};
use pg_query_metrics::{telemetry, QueryMetricsPlugin};
use pg_query_metrics_configuration::QueryFile;
use query_engine_execution::postgres::PgConnector;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    let cli = Cli::parse();
    let dispatch = telemetry::stderr_dispatch();
    let _default = tracing::dispatcher::set_default(&dispatch);

    let subcommand = cli.command.name();
    let configuration = match cli.command {
        Command::Schema => return report(print_schema()),
        Command::Multi(args) => args.into_configuration().map_err(CliError::from),
        Command::Single(args) => args.into_configuration().map_err(CliError::from),
    };
    let configuration = match configuration {
        Ok(configuration) => configuration,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("{}", usage(subcommand));
            return ExitCode::FAILURE;
        }
    };

    let connector = PgConnector::new(&configuration.connection);
    let plugin = QueryMetricsPlugin::from_configuration(configuration, connector, dispatch);
    let mut stdout = std::io::stdout().lock();
    report(output::emit(&plugin, OutputMode::from_environment(), &mut stdout).await)
}

fn print_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(QueryFile);
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &schema)?;
    writeln!(stdout)?;
    Ok(())
}

fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
