use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod context;
mod format;
mod logging;

/// regpath - Registry Path Resolver
///
/// Splits container registry paths into project and repository names.
#[derive(Parser, Debug)]
#[command(name = "regpath")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto", env = "REGPATH_COLOR")]
    color: String,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "REGPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Override the maximum nesting depth
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Check whether a registry path is valid
    Check {
        /// Registry path, e.g. group/proj/image
        path: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// List the candidate project paths of a registry path
    Components {
        /// Registry path, e.g. group/proj/image
        path: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Resolve a registry path to its project and repository
    Resolve {
        /// Registry path, e.g. group/proj/image
        path: String,
        /// Catalog file (.toml or .json); defaults to catalog.path from config
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Display the effective configuration
    Show {
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    logging::init(verbosity);

    let config_required = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(config::get_config_path);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = match context::AppContext::build(
        &config_path,
        config_required,
        format::ColorChoice::from(cli.color.as_str()),
        verbosity,
        cli.max_depth,
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(
        config = %config_path.display(),
        verbosity = ?ctx.verbosity,
        max_nesting_depth = ctx.config.validation.max_nesting_depth,
        "Context built"
    );

    match cli.command {
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Check { path, format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::path::handlers::handle_check(&ctx, &path, fmt);
        }
        Commands::Components { path, format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::path::handlers::handle_components(&ctx, &path, fmt);
        }
        Commands::Resolve {
            path,
            catalog,
            format,
        } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::path::handlers::handle_resolve(&ctx, &path, catalog.as_deref(), fmt);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx, &config_path),
            ConfigCommands::Show { format } => {
                let fmt = format::OutputFormat::from(format.as_str());
                commands::config::handle_show(&ctx, fmt);
            }
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
