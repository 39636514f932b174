//! Command-line interface implementation for stamp.
//! Provides argument parsing using clap; any field left unset here is
//! collected by the interactive prompt layer instead.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for stamp.
#[derive(Parser, Debug)]
#[command(version, about = "stamp: project generator that stamps out a new app from a local template", long_about = None)]
pub struct Args {
    /// Folder the project directory is created under (default: current directory)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output_folder: Option<String>,

    /// Name of the generated project (letters, digits and hyphens)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Display name of the domain/business area the app belongs to
    #[arg(short = 'd', long, value_name = "NAME")]
    pub domain_name: Option<String>,

    /// Development port for the app (1024-65535)
    #[arg(short = 'p', long, value_name = "PORT")]
    pub domain_port: Option<String>,

    /// Skip git init and the initial commit
    #[arg(long)]
    pub skip_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Template directory (default: the `template` directory next to the executable)
    #[arg(short = 't', long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Skip the final confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
