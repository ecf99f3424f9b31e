//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the catalog service.
//! Handlers return their rendered output; errors are reported here so the
//! format and exit code are uniform.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use moviweb_cli::presentation::{render_suggestions, to_json};
use moviweb_cli::{
    Cli, CliConfig, CliError, Commands, MovieCommand, OutputFormat, UserCommand, bootstrap,
    handlers,
};

/// Initialize logging on stderr.
///
/// `RUST_LOG` controls the filter (default `warn`); `--verbose` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error in the requested format.
fn report(err: &CliError, format: OutputFormat) {
    if format == OutputFormat::Json {
        if let Ok(json) = to_json(&err.to_outcome()) {
            println!("{json}");
            return;
        }
    }

    eprintln!("Error: {err}");
    if !err.suggestions().is_empty() {
        eprintln!("{}", render_suggestions("", err.suggestions()));
    }
}

async fn run(cli: Cli, format: OutputFormat) -> Result<Option<String>, CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command()
            .print_help()
            .map_err(|e| CliError::Output(e.to_string()))?;
        return Ok(None);
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_env(cli.database)?;
    let ctx = bootstrap(config).await?;

    let output = match command {
        Commands::Users { command } => match command {
            UserCommand::Add { name } => handlers::users::add(&ctx, format, &name).await?,
            UserCommand::List => handlers::users::list(&ctx, format).await?,
        },
        Commands::Movies { command } => match command {
            MovieCommand::All => handlers::movies::list_all(&ctx, format).await?,
            MovieCommand::List { user_id } => {
                handlers::movies::list(&ctx, format, user_id).await?
            }
            MovieCommand::Add { user_id, title } => {
                handlers::movies::add(&ctx, format, user_id, &title).await?
            }
            MovieCommand::Rename { movie_id, title } => {
                handlers::movies::rename(&ctx, format, movie_id, &title).await?
            }
            MovieCommand::Delete { movie_id } => {
                handlers::movies::delete(&ctx, format, movie_id).await?
            }
        },
        Commands::Suggest { title } => handlers::suggest::execute(&ctx, format, &title).await?,
    };

    Ok(Some(output))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so MOVIWEB_DATABASE can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = OutputFormat::from_flag(cli.json);

    match run(cli, format).await {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            report(&err, format);
            ExitCode::from(err.exit_code())
        }
    }
}
