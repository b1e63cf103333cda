use super::{check_finite, sound_speed, validate_primitives};
use crate::error::InvalidStateError;

/// Ideal-gas state of a single 1D finite-volume cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermodynamicState1D {
    gamma: f64,
    p: f64,
    rho: f64,
    u: f64,
}
impl ThermodynamicState1D {
    pub fn new(
        pressure: f64,
        density: f64,
        velocity: f64,
        gamma: f64,
    ) -> Result<Self, InvalidStateError> {
        validate_primitives(pressure, density, gamma)?;
        check_finite("velocity", velocity)?;
        Ok(Self {
            gamma,
            p: pressure,
            rho: density,
            u: velocity,
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
    pub fn velocity(&self) -> f64 {
        self.u
    }
    pub fn momentum(&self) -> f64 {
        self.rho * self.u
    }
    /// Kinetic energy per unit volume.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.rho * self.u * self.u
    }
    /// Specific internal energy, p / (rho * (gamma - 1)).
    pub fn internal_energy(&self) -> f64 {
        self.p / (self.rho * (self.gamma - 1.0))
    }
    /// Total energy per unit volume.
    pub fn total_energy(&self) -> f64 {
        self.rho * self.internal_energy() + self.kinetic_energy()
    }
    pub fn sound_speed(&self) -> Result<f64, InvalidStateError> {
        sound_speed(self.gamma, self.p, self.rho)
    }
    /// Fastest characteristic speed, |u| + a.
    pub fn max_wave_speed(&self) -> Result<f64, InvalidStateError> {
        Ok(self.u.abs() + self.sound_speed()?)
    }
    /// Same thermodynamic state moving in the opposite direction.
    pub fn mirrored(&self) -> Self {
        Self {
            u: -self.u,
            ..self.clone()
        }
    }
    /// Applies the conservative fluxes accumulated into the cell over one
    /// time step.
    ///
    /// The energy flux is added to the total energy computed from the
    /// pre-update state; internal energy is then whatever remains after the
    /// new kinetic energy is taken out. Nothing is written back unless the
    /// resulting state is valid.
    pub fn update_states(
        &mut self,
        density_flux: f64,
        momentum_flux: f64,
        e_flux: f64,
    ) -> Result<(), InvalidStateError> {
        let e_tot_initial = self.rho * self.internal_energy() + self.kinetic_energy() + e_flux;

        let rho = self.rho + density_flux;
        let mom = self.momentum() + momentum_flux;
        check_finite("density", rho)?;
        if rho <= 0.0 {
            return Err(InvalidStateError::NonPositiveDensity(rho));
        }

        let u = mom / rho;
        let e_kin = 0.5 * rho * u * u;
        let e_int = (e_tot_initial - e_kin) / rho;
        let p = rho * e_int * (self.gamma - 1.0);

        validate_primitives(p, rho, self.gamma)?;
        check_finite("velocity", u)?;
        self.rho = rho;
        self.u = u;
        self.p = p;
        Ok(())
    }
}
