use super::{check_finite, sound_speed, validate_primitives};
use crate::error::InvalidStateError;

/// Ideal-gas state of a single 2D finite-volume cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermodynamicState2D {
    gamma: f64,
    p: f64,
    rho: f64,
    u: f64,
    v: f64,
}
impl ThermodynamicState2D {
    pub fn new(
        pressure: f64,
        density: f64,
        u: f64,
        v: f64,
        gamma: f64,
    ) -> Result<Self, InvalidStateError> {
        validate_primitives(pressure, density, gamma)?;
        check_finite("u", u)?;
        check_finite("v", v)?;
        Ok(Self {
            gamma,
            p: pressure,
            rho: density,
            u,
            v,
        })
    }
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
    pub fn pressure(&self) -> f64 {
        self.p
    }
    pub fn density(&self) -> f64 {
        self.rho
    }
    pub fn u(&self) -> f64 {
        self.u
    }
    pub fn v(&self) -> f64 {
        self.v
    }
    pub fn mom_x(&self) -> f64 {
        self.rho * self.u
    }
    pub fn mom_y(&self) -> f64 {
        self.rho * self.v
    }
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.rho * self.u * self.u + 0.5 * self.rho * self.v * self.v
    }
    pub fn internal_energy(&self) -> f64 {
        self.p / (self.rho * (self.gamma - 1.0))
    }
    pub fn total_energy(&self) -> f64 {
        self.rho * self.internal_energy() + self.kinetic_energy()
    }
    pub fn sound_speed(&self) -> Result<f64, InvalidStateError> {
        sound_speed(self.gamma, self.p, self.rho)
    }
    /// max(|u|, |v|) + a
    pub fn max_wave_speed(&self) -> Result<f64, InvalidStateError> {
        Ok(self.u.abs().max(self.v.abs()) + self.sound_speed()?)
    }
    pub fn mirrored_x(&self) -> Self {
        Self {
            u: -self.u,
            ..self.clone()
        }
    }
    pub fn mirrored_y(&self) -> Self {
        Self {
            v: -self.v,
            ..self.clone()
        }
    }
    /// Two-component counterpart of
    /// [`ThermodynamicState1D::update_states`](super::ThermodynamicState1D::update_states).
    pub fn update_states(
        &mut self,
        density_flux: f64,
        momentum_flux_x: f64,
        momentum_flux_y: f64,
        e_flux: f64,
    ) -> Result<(), InvalidStateError> {
        let e_tot_initial = self.rho * self.internal_energy() + self.kinetic_energy() + e_flux;

        let rho = self.rho + density_flux;
        let mom_x = self.mom_x() + momentum_flux_x;
        let mom_y = self.mom_y() + momentum_flux_y;
        check_finite("density", rho)?;
        if rho <= 0.0 {
            return Err(InvalidStateError::NonPositiveDensity(rho));
        }

        let u = mom_x / rho;
        let v = mom_y / rho;
        let e_kin = 0.5 * rho * u * u + 0.5 * rho * v * v;
        let e_int = (e_tot_initial - e_kin) / rho;
        let p = rho * e_int * (self.gamma - 1.0);

        validate_primitives(p, rho, self.gamma)?;
        check_finite("u", u)?;
        check_finite("v", v)?;
        self.rho = rho;
        self.u = u;
        self.v = v;
        self.p = p;
        Ok(())
    }
}
