//! Ideal-gas cell states.
//!
//! Primitive quantities (pressure, density, velocity, gamma) are stored; the
//! conservative and energy quantities are derived from them on every call.
pub mod state1d;
pub mod state2d;

use crate::error::InvalidStateError;

pub use state1d::ThermodynamicState1D;
pub use state2d::ThermodynamicState2D;

fn check_finite(quantity: &'static str, value: f64) -> Result<f64, InvalidStateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidStateError::NonFinite { quantity, value })
    }
}

/// Rejects anything outside `p > 0`, `rho > 0`, `gamma > 1`.
pub(crate) fn validate_primitives(
    pressure: f64,
    density: f64,
    gamma: f64,
) -> Result<(), InvalidStateError> {
    check_finite("pressure", pressure)?;
    check_finite("density", density)?;
    check_finite("gamma", gamma)?;
    if density <= 0.0 {
        return Err(InvalidStateError::NonPositiveDensity(density));
    }
    if pressure <= 0.0 {
        return Err(InvalidStateError::NonPositivePressure(pressure));
    }
    if gamma <= 1.0 {
        return Err(InvalidStateError::InvalidGamma(gamma));
    }
    Ok(())
}

pub(crate) fn sound_speed(
    gamma: f64,
    pressure: f64,
    density: f64,
) -> Result<f64, InvalidStateError> {
    let radicand = gamma * pressure / density;
    if radicand.is_nan() || radicand < 0.0 {
        return Err(InvalidStateError::NegativeSoundSpeedRadicand(radicand));
    }
    check_finite("sound speed", radicand.sqrt())
}
