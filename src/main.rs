//! modpack CLI - mod packaging build pipeline
//!
//! Usage: modpack <COMMAND>
//!
//! Commands:
//!   build      Build the mod into the export directory
//!   init       Create a modpack.toml for a new mod
//!   reference  Write a reference file for an enumeration

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logger;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Build {
            config,
            export,
            flat,
            linux,
            no_cache,
            force_reimport,
        } => commands::build::cmd_build(&commands::build::BuildArgs {
            config,
            export,
            flat,
            linux,
            no_cache,
            force_reimport,
        }),
        Commands::Init { dir, name, force } => commands::init::cmd_init(&dir, name, force),
        Commands::Reference {
            input,
            output,
            title,
        } => commands::reference::cmd_reference(&input, &output, title.as_deref()),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
