/// Options for a reporting run, collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Fixed number of decimals for reported values.
    ///
    /// `None` prints the shortest representation that round-trips.
    pub precision: Option<usize>,
    /// Render a coloured tree per star instead of the plain report lines.
    pub pretty: bool,
    /// Uncertainties assumed for every star.
    pub uncertainties: Uncertainties,
}

/// Absolute input uncertainties used when propagating errors.
///
/// These are fixed assumptions of the report, not properties of a star.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uncertainties {
    pub blueshift: BlueshiftUncertainty,
    pub dispersion: DispersionUncertainty,
}

/// Uncertainties fed to the convective blueshift error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlueshiftUncertainty {
    /// Kelvin.
    pub teff: f64,
    pub gravity: f64,
}

impl Default for BlueshiftUncertainty {
    fn default() -> Self {
        Self {
            teff: 48.0,
            gravity: 0.001,
        }
    }
}

/// Uncertainties fed to the RV dispersion error, besides the blueshift error itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionUncertainty {
    /// Kelvin.
    pub teff: f64,
    /// Solar masses.
    pub mass: f64,
    /// Solar radii.
    pub radius: f64,
}

impl Default for DispersionUncertainty {
    fn default() -> Self {
        Self {
            teff: 64.0,
            mass: 0.02,
            radius: 0.04,
        }
    }
}
