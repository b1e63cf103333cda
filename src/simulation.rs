pub mod shock_tube1d;

use ndarray::Array1;

use crate::{
    disc::{boundary::BoundaryBindings, flux::FluxScheme, mesh::mesh1d::Mesh1d},
    eos::ThermodynamicState1D,
};

pub use shock_tube1d::ShockTube1d;

/// Per-cell field arrays, index-aligned with the mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowFields1d {
    pub x: Array1<f64>,
    pub densities: Array1<f64>,
    pub pressures: Array1<f64>,
    pub velocities: Array1<f64>,
    pub internal_energies: Array1<f64>,
}
impl FlowFields1d {
    pub fn from_states(x: &Array1<f64>, states: &[ThermodynamicState1D]) -> Self {
        let collect = |f: fn(&ThermodynamicState1D) -> f64| -> Array1<f64> {
            states.iter().map(f).collect()
        };
        Self {
            x: x.clone(),
            densities: collect(ThermodynamicState1D::density),
            pressures: collect(ThermodynamicState1D::pressure),
            velocities: collect(ThermodynamicState1D::velocity),
            internal_energies: collect(ThermodynamicState1D::internal_energy),
        }
    }
    pub fn len(&self) -> usize {
        self.x.len()
    }
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// What the controller and the flux calculator need from a 1D run.
pub trait Simulation1d {
    fn mesh(&self) -> &Mesh1d;
    fn states(&self) -> &[ThermodynamicState1D];
    fn states_mut(&mut self) -> &mut [ThermodynamicState1D];
    fn boundary_bindings(&self) -> &BoundaryBindings<ThermodynamicState1D>;
    fn gamma(&self) -> f64;
    fn flux_scheme(&self) -> FluxScheme;
    fn cfl(&self) -> f64;
    fn final_time(&self) -> f64;
    fn is_initialised(&self) -> bool;
    fn fields(&self) -> FlowFields1d {
        FlowFields1d::from_states(&self.mesh().x, self.states())
    }
}
