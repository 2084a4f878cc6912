//! # Star Catalogue
//!
//! The static star table that drives the report, and the selection syntax
//! used to pick entries from it.
//!
//! A selection can be:
//! * `default`: the reporting table ([`STAR_DATA`]).
//! * `all` / `extended`: every known star ([`EXTENDED_STAR_DATA`]).
//! * A comma separated list of star names (e.g., `alpha cen a,tau ceti`).

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::star::Star;

pub const ALPHA_CEN_B: Star = Star::new_static("Alpha Cen B", 0.91, 0.859, 5248.0, 4.55);
pub const HD_166620: Star = Star::new_static("HD 166620", 0.76, 0.77, 4989.0, 4.65);
pub const ALPHA_CEN_A: Star = Star::new_static("Alpha Cen A", 1.11, 1.22, 5790.0, 4.34);
pub const TAU_CETI: Star = Star::new_static("Tau Ceti", 1.2, 1.22, 6220.0, 4.496);

/// Stars reported when no selection is given.
pub const STAR_DATA: &[Star] = &[ALPHA_CEN_B];

/// Every star with known parameters, in report order.
pub const EXTENDED_STAR_DATA: &[Star] = &[ALPHA_CEN_B, HD_166620, ALPHA_CEN_A, TAU_CETI];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown star: {0}")]
    UnknownStar(String),
    #[error("no stars selected")]
    EmptySelection,
}

/// Case-insensitive lookup by name, ignoring surrounding whitespace.
pub fn find(name: &str) -> Option<&'static Star> {
    let name = name.trim();
    EXTENDED_STAR_DATA
        .iter()
        .find(|star| star.name.eq_ignore_ascii_case(name))
}

/// Which catalogue entries to report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Default,
    All,
    Named { names: Vec<String> },
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if let Some(selection) = parse_keyword(&lower) {
            return Ok(selection);
        }

        parse_names(s)
    }
}

fn parse_keyword(s: &str) -> Option<Selection> {
    match s {
        "default" => Some(Selection::Default),
        "all" | "extended" => Some(Selection::All),
        _ => None,
    }
}

fn parse_names(s: &str) -> Result<Selection, String> {
    let names: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    if names.is_empty() {
        return Err(format!("invalid selection: {s:?}"));
    }

    Ok(Selection::Named { names })
}

impl Selection {
    /// Resolves the selection against the catalogue, keeping the requested order.
    pub fn resolve(&self) -> Result<Vec<Star>, CatalogError> {
        let stars: Vec<Star> = match self {
            Selection::Default => STAR_DATA.to_vec(),
            Selection::All => EXTENDED_STAR_DATA.to_vec(),
            Selection::Named { names } => names
                .iter()
                .map(|name| {
                    find(name)
                        .cloned()
                        .ok_or_else(|| CatalogError::UnknownStar(name.clone()))
                })
                .collect::<Result<_, _>>()?,
        };

        if stars.is_empty() {
            return Err(CatalogError::EmptySelection);
        }

        debug!("selection resolved to {} stars", stars.len());
        Ok(stars)
    }
}
