//! Hermite interpolation of a car's position from timed position/speed samples.
//!
//! Predicts position and speed at t = 10 s and scans [0, 13] in 0.1 s steps
//! for speeds above 81 ft/s.

use numkit::interpolation::hermite::HermiteTable;
use numkit::interpolation::errors::InterpolationError;
use numkit::logging;
use tracing::info;

const TIMES: [f64; 5]         = [0.0, 3.0, 5.0, 8.0, 13.0];
const DISPLACEMENTS: [f64; 5] = [0.0, 225.0, 383.0, 623.0, 993.0];
const VELOCITIES: [f64; 5]    = [75.0, 77.0, 80.0, 74.0, 72.0];
const SPEED_LIMIT: f64 = 81.0;

fn main() -> Result<(), InterpolationError> {
    logging::init();

    let table = HermiteTable::new(&TIMES, &DISPLACEMENTS, &VELOCITIES)?;

    let t = 10.0;
    info!(t, position_ft = table.value_at(t), speed_ft_s = table.derivative_at(t), "prediction");

    match table.first_derivative_above(SPEED_LIMIT, TIMES[0], TIMES[4], 0.1) {
        Some(t) => info!(t, limit = SPEED_LIMIT, "speed limit exceeded: yes"),
        None    => info!(limit = SPEED_LIMIT, "speed limit exceeded: no"),
    }
    Ok(())
}
