use serde::Deserialize;

use crate::{eos::ThermodynamicState1D, error::SimulationError};

/// Riemann-problem flux strategies a simulation can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluxScheme {
    Godunov,
    Hllc,
    Muscl,
    RandomChoice,
}

/// Flux rates of the conserved quantities through one cell interface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterfaceFlux1d {
    pub density: f64,
    pub momentum: f64,
    pub energy: f64,
}
impl InterfaceFlux1d {
    pub fn new(density: f64, momentum: f64, energy: f64) -> Self {
        Self {
            density,
            momentum,
            energy,
        }
    }
    /// Net flux accumulated into the cell lying between `self` (its low-x
    /// interface) and `high` (its high-x interface) over `dt`.
    pub fn net_into_cell(&self, high: &InterfaceFlux1d, dt_over_dx: f64) -> InterfaceFlux1d {
        InterfaceFlux1d {
            density: dt_over_dx * (self.density - high.density),
            momentum: dt_over_dx * (self.momentum - high.momentum),
            energy: dt_over_dx * (self.energy - high.energy),
        }
    }
}

/// Interface flux provider driven by the controller once per time step.
pub trait FluxCalculator1d {
    fn scheme(&self) -> FluxScheme;
    /// Returns `states.len() + 1` interface fluxes, ordered from the low-x
    /// boundary interface (between `ghost_low` and `states[0]`) to the high-x
    /// one (between the last state and `ghost_high`).
    fn interface_fluxes(
        &mut self,
        states: &[ThermodynamicState1D],
        ghost_low: &ThermodynamicState1D,
        ghost_high: &ThermodynamicState1D,
        dx: f64,
        dt: f64,
    ) -> Result<Vec<InterfaceFlux1d>, SimulationError>;
}

/// Euler flux F(U) = (rho u, rho u^2 + p, u (E + p)) of a single state.
pub fn flux1d(state: &ThermodynamicState1D) -> InterfaceFlux1d {
    let u = state.velocity();
    let p = state.pressure();
    InterfaceFlux1d {
        density: state.momentum(),
        momentum: state.momentum() * u + p,
        energy: u * (state.total_energy() + p),
    }
}
