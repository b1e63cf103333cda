use log::{debug, error, info};
use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::{
    disc::{
        boundary::BoundaryEdge,
        flux::{FluxCalculator1d, InterfaceFlux1d},
    },
    error::{InvalidConfigurationError, SimulationError},
    simulation::{FlowFields1d, Simulation1d},
};

pub const DEFAULT_MAX_STEPS: usize = 100_000;

#[derive(Clone, Copy, Debug)]
pub struct SolverParameters {
    pub max_steps: usize,
}
impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimulationResult1d {
    /// Simulated time reached after each step.
    pub times: Vec<f64>,
    pub fields: FlowFields1d,
}

/// Marches a 1D simulation to its final time with explicit finite-volume
/// updates.
pub struct Controller1d<'a, S: Simulation1d, F: FluxCalculator1d> {
    pub current_time: f64,
    pub current_step: usize,
    simulation: &'a mut S,
    flux_calculator: F,
    solver_param: SolverParameters,
}
impl<'a, S: Simulation1d, F: FluxCalculator1d> Controller1d<'a, S, F> {
    pub fn new(
        simulation: &'a mut S,
        flux_calculator: F,
        solver_param: SolverParameters,
    ) -> Result<Self, SimulationError> {
        if !simulation.is_initialised() {
            return Err(SimulationError::NotInitialised);
        }
        if simulation.flux_scheme() != flux_calculator.scheme() {
            return Err(InvalidConfigurationError::SchemeMismatch {
                simulation: simulation.flux_scheme(),
                calculator: flux_calculator.scheme(),
            }
            .into());
        }
        Ok(Self {
            current_time: 0.0,
            current_step: 0,
            simulation,
            flux_calculator,
            solver_param,
        })
    }
    /// CFL-limited step: cfl * dx / max(|u| + a) over all cells.
    pub fn compute_time_step(&self) -> Result<f64, SimulationError> {
        let wave_speeds = self
            .simulation
            .states()
            .iter()
            .map(|state| state.max_wave_speed())
            .collect::<Result<Array1<f64>, _>>()?;
        let max_wave_speed = *wave_speeds
            .max()
            .map_err(|_| SimulationError::InvalidTimeStep {
                step: self.current_step,
                dt: f64::NAN,
                max_wave_speed: f64::NAN,
            })?;
        let dt = self.simulation.cfl() * self.simulation.mesh().dx / max_wave_speed;
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(SimulationError::InvalidTimeStep {
                step: self.current_step,
                dt,
                max_wave_speed,
            });
        }
        Ok(dt)
    }
    /// Advances the simulation by one step of length `dt`.
    pub fn step(&mut self, dt: f64) -> Result<(), SimulationError> {
        let dx = self.simulation.mesh().dx;
        let (ghost_low, ghost_high) = {
            let states = self.simulation.states();
            let bindings = self.simulation.boundary_bindings();
            let (Some(first), Some(last)) = (states.first(), states.last()) else {
                return Err(InvalidConfigurationError::EmptyGrid.into());
            };
            (
                bindings.ghost_state(BoundaryEdge::XLow, first)?,
                bindings.ghost_state(BoundaryEdge::XHigh, last)?,
            )
        };
        let fluxes: Vec<InterfaceFlux1d> = self.flux_calculator.interface_fluxes(
            self.simulation.states(),
            &ghost_low,
            &ghost_high,
            dx,
            dt,
        )?;
        let cell_num = self.simulation.states().len();
        if fluxes.len() != cell_num + 1 {
            return Err(SimulationError::FluxCountMismatch {
                required: cell_num + 1,
                provided: fluxes.len(),
            });
        }

        let dt_over_dx = dt / dx;
        let (step, time) = (self.current_step, self.current_time);
        for (icell, state) in self.simulation.states_mut().iter_mut().enumerate() {
            let net = fluxes[icell].net_into_cell(&fluxes[icell + 1], dt_over_dx);
            state
                .update_states(net.density, net.momentum, net.energy)
                .map_err(|source| SimulationError::CellUpdate {
                    cell: icell,
                    step,
                    time,
                    source,
                })?;
        }
        self.current_time += dt;
        self.current_step += 1;
        Ok(())
    }
    pub fn run_sim(&mut self) -> Result<SimulationResult1d, SimulationError> {
        let final_time = self.simulation.final_time();
        info!(
            "running {:?} simulation on {} cells to t = {}",
            self.flux_calculator.scheme(),
            self.simulation.states().len(),
            final_time
        );
        let mut times = Vec::new();
        while self.current_time < final_time {
            if self.current_step >= self.solver_param.max_steps {
                error!(
                    "step limit {} reached at t = {}",
                    self.solver_param.max_steps, self.current_time
                );
                return Err(SimulationError::StepLimitReached {
                    max_steps: self.solver_param.max_steps,
                    time: self.current_time,
                    final_time,
                });
            }
            let mut dt = self.compute_time_step()?;
            let clipped = self.current_time + dt >= final_time;
            if clipped {
                dt = final_time - self.current_time;
            }
            if let Err(e) = self.step(dt) {
                error!("simulation aborted: {}", e);
                return Err(e);
            }
            if clipped {
                self.current_time = final_time;
            }
            debug!("step: {}, time: {}, dt: {}", self.current_step, self.current_time, dt);
            times.push(self.current_time);
        }
        info!(
            "reached t = {} after {} steps",
            self.current_time, self.current_step
        );
        Ok(SimulationResult1d {
            times,
            fields: self.simulation.fields(),
        })
    }
}
