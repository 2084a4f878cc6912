use granulation_common::catalog::Selection;
use granulation_common::config::Config;
use granulation_common::Star;
use granulation_core::report::{self, StarOutcome};
use tracing::{info, warn};

use crate::terminal::print;

pub fn report(selection: &Selection, cfg: &Config) -> anyhow::Result<()> {
    let stars: Vec<Star> = selection.resolve()?;
    let outcomes: Vec<StarOutcome> = report::evaluate_all(&stars, &cfg.uncertainties);

    print_outcomes(&outcomes, cfg)
}

/// Prints every successful report and skips failed stars with a warning.
///
/// Fails only when no star could be reported.
pub fn print_outcomes(outcomes: &[StarOutcome], cfg: &Config) -> anyhow::Result<()> {
    let mut reported: usize = 0;

    for (idx, outcome) in outcomes.iter().enumerate() {
        match &outcome.result {
            Ok(star_report) => {
                print::star_report(idx, star_report, cfg);
                reported += 1;
            }
            Err(err) => warn!("skipping {}: {}", outcome.star, err),
        }
    }

    if reported == 0 {
        anyhow::bail!("none of the {} selected stars could be evaluated", outcomes.len());
    }

    info!("reported {reported} of {} stars", outcomes.len());
    print::summary(reported, outcomes.len(), cfg);
    Ok(())
}
