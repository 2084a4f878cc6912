mod commands;
mod terminal;

use commands::{CommandLine, Commands, catalog, report, star};
use granulation_common::config::{Config, Uncertainties};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet);

    let cfg = Config {
        precision: commands.precision,
        pretty: commands.pretty,
        uncertainties: Uncertainties::default(),
    };

    match commands.command.unwrap_or_default() {
        Commands::Report { selection } => {
            print::header("granulation report", &cfg);
            report::report(&selection, &cfg)
        }
        Commands::Star {
            name,
            mass,
            radius,
            teff,
            log_g,
        } => {
            print::header("custom star", &cfg);
            star::star(name, mass, radius, teff, log_g, &cfg)
        }
        Commands::Catalog => {
            catalog::catalog();
            Ok(())
        }
    }
}
