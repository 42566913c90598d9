use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckview")]
#[command(author, version, about)]
#[command(long_about = "A slide deck presentation viewer.\n\n\
    Decks are YAML files: an ordered list of typed slides.\n\n\
    Examples:\n  \
    deckview deck.yaml               Present a deck\n  \
    deckview deck.yaml --fullscreen  Present starting in fullscreen\n  \
    deckview deck.yaml --slide 3     Start on slide 3\n  \
    deckview check deck.yaml         Validate a deck file")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Deck file to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch directly into fullscreen
    #[arg(long, global = false)]
    pub fullscreen: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a deck file and print a summary
    Check {
        /// Deck file to validate
        file: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Export slides as PNG images
    Export {
        /// Deck file to export
        file: PathBuf,

        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.start_mode)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Check { file }) => crate::commands::check::run(&file),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Export {
                file,
                output_dir,
                width,
                height,
            }) => crate::commands::export::run(file, output_dir, width, height),
            Some(Commands::Version) => {
                println!(
                    "{} {}",
                    "deckview".blue().bold(),
                    env!("CARGO_PKG_VERSION")
                );
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    crate::app::run(file, self.fullscreen, self.slide)
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}
