use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use roadwatch::config::Config;
use roadwatch::error::RwResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Visual Condition Index toolkit for road surveys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the distress catalogs and their weight factors.
    Catalog(cmd::catalog::CatalogArgs),
    /// Compute the VCI for one set of observed distress values.
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Evaluate every survey in a CSV file.
    Batch(cmd::batch::BatchArgs),
    /// Map VCI values or category names onto condition bands.
    Classify(cmd::classify::ClassifyArgs),
    /// List roads from a JSON export with their condition bands.
    Roads(cmd::roads::RoadsArgs),
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> RwResult<Config> {
    let config = match path {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            if let Some(m) = sub_matches {
                file_config.merge_from_cli(cli_config, m);
            }
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let sub_matches = matches.subcommand().map(|(_, m)| m);
    let config_path = cli.config.as_deref();

    let outcome = match cli.command {
        Commands::Catalog(args) => cmd::catalog::run(args),
        Commands::Classify(args) => cmd::classify::run(args),
        Commands::Evaluate(args) => resolve_config(config_path, &args.config, sub_matches)
            .and_then(|config| cmd::evaluate::run(args, config)),
        Commands::Batch(args) => resolve_config(config_path, &args.config, sub_matches)
            .and_then(|config| cmd::batch::run(args, config)),
        Commands::Roads(args) => resolve_config(config_path, &args.config, sub_matches)
            .and_then(|config| cmd::roads::run(args, config)),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
