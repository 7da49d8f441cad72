use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// modpack - package a mod source tree into an installable directory
#[derive(Parser, Debug)]
#[command(name = "modpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the mod into the export directory
    Build {
        /// Path to modpack.toml (default: searched upward from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Export directory
        #[arg(short, long, default_value = "Build")]
        export: PathBuf,

        /// Install straight into the export directory instead of <export>/<mod name>
        #[arg(long)]
        flat: bool,

        /// Also build Linux bundles
        #[arg(long)]
        linux: bool,

        /// Rebuild bundles even if nothing changed
        #[arg(long)]
        no_cache: bool,

        /// Ask upstream tooling to reprocess scripts before copying
        #[arg(long)]
        force_reimport: bool,
    },

    /// Create a modpack.toml for a new mod
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Mod name (default: directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing modpack.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Write a reference file listing an enumeration's identifiers
    Reference {
        /// JSON object {"Name": value} or array ["Name", ..]
        #[arg(short, long)]
        input: PathBuf,

        /// Output text file
        #[arg(short, long)]
        output: PathBuf,

        /// Title for the header (default: input file stem)
        #[arg(short, long)]
        title: Option<String>,
    },
}
