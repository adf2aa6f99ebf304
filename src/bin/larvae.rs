//! Extrapolates larva weights to day 43 with Newton interpolation.

use numkit::interpolation::errors::InterpolationError;
use numkit::interpolation::newton::{interpolate, NewtonCfg};
use numkit::logging;
use tracing::info;

const DAYS: [f64; 7]       = [0.0, 6.0, 10.0, 13.0, 17.0, 20.0, 28.0];
const SPECIES_1: [f64; 7]  = [6.67, 17.3, 42.7, 37.3, 30.1, 29.3, 28.7];
const SPECIES_2: [f64; 7]  = [6.67, 16.1, 18.9, 15.0, 10.6, 9.44, 8.89];
const TARGET_DAY: [f64; 1] = [43.0];

fn main() -> Result<(), InterpolationError> {
    logging::init();

    for (species, weights) in [("Sp1", &SPECIES_1), ("Sp2", &SPECIES_2)] {
        let cfg = NewtonCfg::new()
            .set_x(&DAYS)?
            .set_y(weights)?
            .set_x_eval(&TARGET_DAY)?
            .allow_extrapolation(true);

        let weight = interpolate(cfg)?.evaluated[0];
        let outlook = if weight <= 0.0 { "might die" } else { "might survive" };
        info!(species, day = TARGET_DAY[0], weight_g = weight, outlook, "prediction");
    }
    Ok(())
}
