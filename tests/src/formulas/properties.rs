#![cfg(test)]
use approx::assert_relative_eq;
use granulation_common::catalog::EXTENDED_STAR_DATA;
use granulation_common::Star;
use granulation_core::{
    DispersionSeries, convective_blueshift, convective_blueshift_error, convective_blueshift_error_many,
    convective_blueshift_many, radial_velocity_dispersion, radial_velocity_dispersion_error,
    radial_velocity_dispersion_error_many, radial_velocity_dispersion_many,
};

/// Solar parameters normalise the blueshift to exactly one.
#[test]
fn solar_blueshift_identity() {
    assert_eq!(convective_blueshift(5772.0, 275.4).unwrap(), 1.0);
}

#[test]
fn zero_input_uncertainty_gives_zero_output_uncertainty() {
    for star in EXTENDED_STAR_DATA {
        let g = star.surface_gravity();
        assert_eq!(convective_blueshift_error(star.teff, g, 0.0, 0.0).unwrap(), 0.0);

        let cb = convective_blueshift(star.teff, g).unwrap();
        let err = radial_velocity_dispersion_error(cb, star.teff, star.mass, star.radius, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(err, 0.0);
    }
}

#[test]
fn blueshift_error_is_non_decreasing_in_each_uncertainty() {
    let (t, g) = (5248.0, 354.81338923357526);
    let steps = [0.0, 1.0, 10.0, 48.0, 100.0, 500.0];

    let mut previous = 0.0;
    for err_t in steps {
        let value = convective_blueshift_error(t, g, err_t, 0.001).unwrap();
        assert!(value >= previous, "err_t = {err_t}");
        previous = value;
    }

    let mut previous = 0.0;
    for err_g in steps {
        let value = convective_blueshift_error(t, g, 48.0, err_g).unwrap();
        assert!(value >= previous, "err_g = {err_g}");
        previous = value;
    }
}

#[test]
fn dispersion_matches_literal_substitution() {
    let cb = convective_blueshift(5772.0, 275.4).unwrap();
    let rv = radial_velocity_dispersion(cb, 5772.0, 1.0, 1.0).unwrap();

    let ngsun = 1.0 / (5772.0_f64 * 1.0).powi(2);
    let sigmasun = 1.0 / ngsun.sqrt();
    let ng = (1.0_f64 / (5772.0 * 1.0)).powi(2);
    let sigmarv = cb / ng.sqrt();
    assert_relative_eq!(rv, sigmarv / sigmasun, max_relative = 1e-15);
    assert_relative_eq!(rv, 1.0, max_relative = 1e-12);
}

#[test]
fn sequence_forms_preserve_shape_and_values() {
    let stars: Vec<Star> = EXTENDED_STAR_DATA.to_vec();
    let teff: Vec<f64> = stars.iter().map(|s| s.teff).collect();
    let gravity: Vec<f64> = stars.iter().map(|s| s.surface_gravity()).collect();
    let mass: Vec<f64> = stars.iter().map(|s| s.mass).collect();
    let radius: Vec<f64> = stars.iter().map(|s| s.radius).collect();
    let n = stars.len();

    let cb = convective_blueshift_many(&teff, &gravity).unwrap();
    let cb_err = convective_blueshift_error_many(&teff, &gravity, &vec![48.0; n], &vec![0.001; n]).unwrap();

    let values = DispersionSeries {
        blueshift: &cb,
        teff: &teff,
        mass: &mass,
        radius: &radius,
    };
    let errors = DispersionSeries {
        blueshift: &cb_err,
        teff: &vec![64.0; n],
        mass: &vec![0.02; n],
        radius: &vec![0.04; n],
    };
    let rv = radial_velocity_dispersion_many(&values).unwrap();
    let rv_err = radial_velocity_dispersion_error_many(&values, &errors).unwrap();

    for output in [&cb, &cb_err, &rv, &rv_err] {
        assert_eq!(output.len(), n);
    }

    for i in 0..n {
        assert_eq!(cb[i], convective_blueshift(teff[i], gravity[i]).unwrap());
        assert_eq!(cb_err[i], convective_blueshift_error(teff[i], gravity[i], 48.0, 0.001).unwrap());
        assert_eq!(rv[i], radial_velocity_dispersion(cb[i], teff[i], mass[i], radius[i]).unwrap());
        assert_eq!(
            rv_err[i],
            radial_velocity_dispersion_error(cb[i], teff[i], mass[i], radius[i], cb_err[i], 64.0, 0.02, 0.04).unwrap()
        );
    }
}
