#![cfg(test)]
use approx::assert_relative_eq;
use granulation_common::catalog::{CatalogError, EXTENDED_STAR_DATA, Selection};
use granulation_common::config::Uncertainties;
use granulation_common::Star;
use granulation_core::report::{self, StarReport};

/// Scaled reference values in m/s: blueshift, its error, sigma RV, its error.
const REFERENCE: [(&str, [f64; 4]); 4] = [
    ("Alpha Cen B", [187.93442666460456, 7.055510434954672, 0.18433914372653576, 0.01196012760909499]),
    ("HD 166620", [128.30623640814017, 5.168733113735919, 0.12841153203928812, 0.00924073588542545]),
    ("Alpha Cen A", [388.46276782595515, 12.823323737446355, 0.48947491584884234, 0.025013548415053793]),
    ("Tau Ceti", [496.7141875553598, 15.15693699657426, 0.6219295021689425, 0.030403117395479875]),
];

fn reported_values(report: &StarReport) -> [f64; 4] {
    let scaled = report.scaled();
    [scaled.blueshift, scaled.blueshift_error, scaled.dispersion, scaled.dispersion_error]
}

/// Parses the value out of "... is: <value> m/s".
fn value_of(line: &str) -> f64 {
    let value = line
        .rsplit_once("is: ")
        .and_then(|(_, rest)| rest.strip_suffix(" m/s"))
        .unwrap_or_else(|| panic!("malformed line: {line}"));
    value.parse().unwrap()
}

#[test]
fn alpha_cen_b_end_to_end() {
    let stars = Selection::Default.resolve().unwrap();
    assert_eq!(stars.len(), 1);

    let report = report::evaluate(&stars[0], &Uncertainties::default()).unwrap();
    let expected = REFERENCE[0].1;
    for (actual, expected) in reported_values(&report).iter().zip(expected) {
        assert_relative_eq!(*actual, expected, max_relative = 1e-9);
    }
}

#[test]
fn surface_gravity_from_log_g() {
    let stars = Selection::Default.resolve().unwrap();
    assert_relative_eq!(stars[0].surface_gravity(), 354.81338923357526, max_relative = 1e-12);
}

#[test]
fn extended_catalogue_matches_reference() {
    let outcomes = report::evaluate_all(EXTENDED_STAR_DATA, &Uncertainties::default());

    for (outcome, (name, expected)) in outcomes.iter().zip(REFERENCE) {
        assert_eq!(outcome.star.name, name);
        let report = outcome.result.as_ref().unwrap();
        for (actual, expected) in reported_values(report).iter().zip(expected) {
            assert_relative_eq!(*actual, expected, max_relative = 1e-9);
        }
    }
}

#[test]
fn rendered_block_has_original_layout() {
    let stars = Selection::Default.resolve().unwrap();
    let report = report::evaluate(&stars[0], &Uncertainties::default()).unwrap();
    let block = report.render(None);

    let lines: Vec<&str> = block.split('\n').collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("The value of the convective blueshift for Alpha Cen B is: "));
    assert!(lines[1].starts_with("The error on the convective blueshift for Alpha Cen B is: "));
    assert!(lines[2].starts_with("The value of the sigma RV for Alpha Cen B is: "));
    assert!(lines[3].starts_with("The error on the sigma RV for Alpha Cen B is: "));
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "");

    let expected = REFERENCE[0].1;
    for (line, expected) in lines[..4].iter().zip(expected) {
        assert_relative_eq!(value_of(line), expected, max_relative = 1e-9);
    }
}

/// Plain output for the default table, character for character.
#[test]
fn default_report_text_is_exact() {
    let stars = Selection::Default.resolve().unwrap();
    let report = report::evaluate(&stars[0], &Uncertainties::default()).unwrap();

    assert_eq!(
        report.render(None),
        "The value of the convective blueshift for Alpha Cen B is: 187.93442666460456 m/s\n\
         The error on the convective blueshift for Alpha Cen B is: 7.055510434954672 m/s\n\
         The value of the sigma RV for Alpha Cen B is: 0.18433914372653576 m/s\n\
         The error on the sigma RV for Alpha Cen B is: 0.01196012760909499 m/s\n\n"
    );
}

#[test]
fn unknown_star_in_selection() {
    let selection: Selection = "alpha cen b, Proxima".parse().unwrap();
    assert_eq!(
        selection.resolve(),
        Err(CatalogError::UnknownStar("Proxima".to_string()))
    );
}

#[test]
fn invalid_star_is_skipped_not_fatal() {
    let stars = vec![
        Star::new("Cold", 1.0, 1.0, -10.0, 4.44),
        EXTENDED_STAR_DATA[1].clone(),
    ];

    let outcomes = report::evaluate_all(&stars, &Uncertainties::default());
    assert!(outcomes[0].result.is_err());
    let report = outcomes[1].result.as_ref().unwrap();
    assert_relative_eq!(report.scaled().blueshift, REFERENCE[1].1[0], max_relative = 1e-9);
}
