pub mod catalog;
pub mod report;
pub mod star;

use clap::{ArgAction, Parser, Subcommand};
use granulation_common::catalog::Selection;

#[derive(Parser)]
#[command(name = "granulation")]
#[command(about = "Convective blueshift and granulation RV jitter of stars, relative to the Sun.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print values with a fixed number of decimals
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Show a coloured tree per star instead of plain lines
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report blueshift and RV dispersion for catalogue stars
    ///
    /// SELECTION is `default`, `all` or a comma separated list of star names.
    #[command(alias = "r")]
    Report {
        #[arg(default_value = "default")]
        selection: Selection,
    },
    /// Evaluate a star given on the command line
    #[command(alias = "s")]
    Star {
        #[arg(long, default_value = "Custom star")]
        name: String,
        /// Mass in solar masses
        #[arg(long)]
        mass: f64,
        /// Radius in solar radii
        #[arg(long)]
        radius: f64,
        /// Effective temperature in Kelvin
        #[arg(long)]
        teff: f64,
        /// log10 of the surface gravity in cm/s²
        #[arg(long = "logg")]
        log_g: f64,
    },
    /// List the stars with known parameters
    #[command(alias = "c")]
    Catalog,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Report {
            selection: Selection::Default,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
