use std::path::PathBuf;

use thiserror::Error;

use crate::disc::{boundary::BoundaryEdge, flux::FluxScheme};

/// Violation of the ideal-gas state invariants, either at construction or
/// immediately after a flux update.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidStateError {
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),
    #[error("pressure must be positive, got {0}")]
    NonPositivePressure(f64),
    #[error("adiabatic index must be greater than 1, got {0}")]
    InvalidGamma(f64),
    #[error("sound speed radicand gamma * p / rho is {0}")]
    NegativeSoundSpeedRadicand(f64),
    #[error("{quantity} is not finite: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidConfigurationError {
    #[error("membrane location must lie in (0, 1), got {0}")]
    MembraneLocation(f64),
    #[error("CFL number must lie in (0, 1), got {0}")]
    Cfl(f64),
    #[error("final time must be positive, got {0}")]
    FinalTime(f64),
    #[error("left and right states disagree on gamma: {left} vs {right}")]
    GammaMismatch { left: f64, right: f64 },
    #[error("a grid needs at least one cell")]
    EmptyGrid,
    #[error("boundary edge {0:?} does not exist on this grid")]
    EdgeNotOnGrid(BoundaryEdge),
    #[error("no ghost state provider bound to {0:?}")]
    UnboundEdge(BoundaryEdge),
    #[error("flux calculator implements {calculator:?} but the simulation was set up for {simulation:?}")]
    SchemeMismatch {
        simulation: FluxScheme,
        calculator: FluxScheme,
    },
}

/// Fatal failures of a time-marching run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("simulation has not been initialised")]
    NotInitialised,
    #[error("cell {cell} failed its update at step {step} (t = {time}): {source}")]
    CellUpdate {
        cell: usize,
        step: usize,
        time: f64,
        #[source]
        source: InvalidStateError,
    },
    #[error("flux calculator returned {provided} interface fluxes, expected {required}")]
    FluxCountMismatch { required: usize, provided: usize },
    #[error("flux calculation failed at step {step}: {message}")]
    FluxCalculation { step: usize, message: String },
    #[error("time step {dt} at step {step} is not usable (max wave speed {max_wave_speed})")]
    InvalidTimeStep {
        step: usize,
        dt: f64,
        max_wave_speed: f64,
    },
    #[error("step limit {max_steps} reached at t = {time} before final time {final_time}")]
    StepLimitReached {
        max_steps: usize,
        time: f64,
        final_time: f64,
    },
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfigurationError),
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}
