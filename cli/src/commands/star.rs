use anyhow::Context;
use granulation_common::config::Config;
use granulation_common::Star;
use granulation_core::report;

use crate::terminal::print;

pub fn star(name: String, mass: f64, radius: f64, teff: f64, log_g: f64, cfg: &Config) -> anyhow::Result<()> {
    let star = Star::new(name, mass, radius, teff, log_g);

    let star_report = report::evaluate(&star, &cfg.uncertainties)
        .with_context(|| format!("cannot evaluate {star}"))?;

    print::star_report(0, &star_report, cfg);
    Ok(())
}
