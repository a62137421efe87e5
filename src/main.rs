use std::path::PathBuf;

use chaincfg::{
    AppError, CheckOptions, ConfigFormat, DEFAULT_COMPILER, DEFAULT_NETWORK, InitOptions,
    LogLevel,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chaincfg")]
#[command(version)]
#[command(about = "Inspect and validate development network and compiler configuration", long_about = None)]
struct Cli {
    /// Configuration file (default: nearest chaincfg.{toml,json,yaml,yml})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log verbosity (overrides RUST_LOG for chaincfg)
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter configuration in the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Print the loaded configuration
    Show {
        /// Output format (default: source format)
        #[arg(short, long, value_enum)]
        format: Option<ConfigFormat>,
    },
    /// Validate the configuration as the toolchain would
    Check {
        /// Network profile that must be defined
        #[arg(short, long)]
        network: Option<String>,
    },
    /// Print the RPC endpoint URL of a network
    Endpoint {
        /// Network profile name
        #[arg(default_value = DEFAULT_NETWORK)]
        network: String,
        /// Fail unless the profile accepts this chain id
        #[arg(long)]
        chain_id: Option<u64>,
    },
    /// Evaluate a compiler version range, optionally choosing among candidate builds
    Resolve {
        /// Compiler name
        #[arg(default_value = DEFAULT_COMPILER)]
        compiler: String,
        /// Candidate versions to choose from
        versions: Vec<String>,
    },
}

fn run(cli: Cli) -> Result<i32, AppError> {
    let cwd = std::env::current_dir()?;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init { format, force } => {
            if config.is_some() {
                log::warn!("--config is ignored by init");
            }
            let path = chaincfg::init_at(cwd, InitOptions { format, force })?;
            println!("✅ Created {}", path.display());
        }
        Commands::Show { format } => {
            print!("{}", chaincfg::show_at(cwd, config, format)?);
        }
        Commands::Check { network } => {
            let outcome = chaincfg::check_at(cwd, config, CheckOptions { network })?;
            if outcome.is_ok() {
                println!("✅ {} is valid", outcome.path.display());
            } else {
                eprintln!("❌ {} has {} issue(s):", outcome.path.display(), outcome.issues.len());
                for issue in &outcome.issues {
                    eprintln!("  - {}", issue);
                }
            }
            return Ok(outcome.exit_code);
        }
        Commands::Endpoint { network, chain_id } => {
            let report = chaincfg::endpoint_at(cwd, config, &network, chain_id)?;
            println!("{}", report.url);
        }
        Commands::Resolve { compiler, versions } => {
            let outcome = chaincfg::resolve_at(cwd, config, &compiler, &versions)?;
            match outcome.selected {
                Some(version) => println!("{}", version),
                None => println!("{}", outcome.normalized),
            }
        }
    }

    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    chaincfg::init_logger(cli.log_level);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
