use std::error::Error;

use clap::{CommandFactory, Parser, Subcommand};

use crate::handlers::{InitOptions, handle_check, handle_init, handle_inspect};

#[derive(Parser)]
#[command(name = "esm2llama_cli")]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a summary of a config of any registered model type
    Inspect {
        /// config.json or a folder containing it
        config_path: String,
    },
    /// Check that the components of an esm2llama_instruct config fit together
    Check {
        /// config.json or a folder containing it
        config_path: String,
    },
    /// Write an esm2llama_instruct config with ESM-2 and Llama 3.1 defaults
    Init {
        /// Folder to write config.json into
        output_path: String,
        #[arg(long)]
        placeholder_id: Option<i64>,
        #[arg(long, default_value_t = 1280)]
        input_dim: usize,
        #[arg(long, default_value_t = 2048)]
        intermediate_dim: usize,
        #[arg(long, default_value_t = 4096)]
        output_dim: usize,
    },
}

/// Runs the parsed command. `Ok(false)` means the command completed but its
/// verdict was negative, as when `check` finds issues.
pub fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
    match cli.command {
        Some(Commands::Inspect {
            config_path,
        }) => handle_inspect(config_path).map(|_| true),
        Some(Commands::Check {
            config_path,
        }) => handle_check(config_path),
        Some(Commands::Init {
            output_path,
            placeholder_id,
            input_dim,
            intermediate_dim,
            output_dim,
        }) => handle_init(
            output_path,
            InitOptions {
                placeholder_id,
                input_dim,
                intermediate_dim,
                output_dim,
            },
        )
        .map(|_| true),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(true)
        },
    }
}
