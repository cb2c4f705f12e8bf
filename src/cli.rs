use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fundbuero")]
#[command(about = "Digitales Fundbüro: Fundstücke erfassen und suchen", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Detailed log output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.config/fundbuero/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a found item
    Capture {
        /// Image file to upload (jpg/jpeg/png)
        #[arg(required_unless_present = "camera", conflicts_with = "camera")]
        image: Option<PathBuf>,

        /// Take the photo with the configured camera command
        #[arg(long)]
        camera: bool,

        /// Short description (prompted when missing)
        #[arg(short, long)]
        description: Option<String>,

        /// Where the item was found (prompted when missing)
        #[arg(short, long)]
        location: Option<String>,

        /// Date found, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Search found items by label
    Search {
        /// Label to look for
        #[arg(required = true)]
        label: String,
    },

    /// Classify an image without saving it
    Classify {
        /// Image file
        #[arg(required = true)]
        image: PathBuf,
    },

    /// List the labels the model knows
    Labels,

    /// Show or initialise the configuration
    Config {
        /// Show the effective configuration
        #[arg(long)]
        show: bool,

        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}
