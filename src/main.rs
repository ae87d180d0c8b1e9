use clap::{Parser, Subcommand};
use std::path::PathBuf;

use grader::cli::{self, RankOptions, EXIT_CONFIG, EXIT_SUCCESS};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "grader")]
#[command(about = "Rank score records by descending score", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/grader/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write ranked records here instead of the derived <input>-graded.txt
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not echo ranked records to the console
    #[arg(long)]
    no_echo: bool,

    /// Input file of comma separated records ending in a score
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Init { force }) = cli.command {
        let config_path = match cli.config.map(Ok).unwrap_or_else(grader::config::get_config_path) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = grader::config::write_default_config(&config_path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Wrote default config to {}", config_path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let options = RankOptions {
        input: cli.input,
        output: cli.output,
        config: cli.config,
        no_echo: cli.no_echo,
        verbose: cli.verbose,
        use_colors: cli::should_use_colors(),
    };

    let outcome = {
        let mut stdout = std::io::stdout().lock();
        cli::run(&options, &mut stdout)
    };

    std::process::exit(outcome.exit_code());
}
