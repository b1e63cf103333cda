use log::debug;

use super::Simulation1d;
use crate::{
    disc::{
        boundary::{BoundaryBindings, BoundaryEdge, GhostStateProvider, Transmissive},
        flux::FluxScheme,
        mesh::mesh1d::Mesh1d,
    },
    eos::ThermodynamicState1D,
    error::InvalidConfigurationError,
};

pub const DEFAULT_CELL_NUM: usize = 100;

/// Riemann problem on the unit interval: a left and a right state separated
/// by a membrane.
#[derive(Debug)]
pub struct ShockTube1d {
    mesh: Mesh1d,
    states: Vec<ThermodynamicState1D>,
    gamma: f64,
    membrane_location: f64,
    final_time: f64,
    cfl: f64,
    flux_scheme: FluxScheme,
    boundary_bindings: BoundaryBindings<ThermodynamicState1D>,
    is_initialised: bool,
}
impl ShockTube1d {
    pub fn new(
        left_state: &ThermodynamicState1D,
        right_state: &ThermodynamicState1D,
        membrane_location: f64,
        final_time: f64,
        cfl: f64,
        flux_scheme: FluxScheme,
    ) -> Result<Self, InvalidConfigurationError> {
        Self::with_cell_num(
            left_state,
            right_state,
            membrane_location,
            final_time,
            cfl,
            flux_scheme,
            DEFAULT_CELL_NUM,
        )
    }
    pub fn with_cell_num(
        left_state: &ThermodynamicState1D,
        right_state: &ThermodynamicState1D,
        membrane_location: f64,
        final_time: f64,
        cfl: f64,
        flux_scheme: FluxScheme,
        cell_num: usize,
    ) -> Result<Self, InvalidConfigurationError> {
        if !(membrane_location > 0.0 && membrane_location < 1.0) {
            return Err(InvalidConfigurationError::MembraneLocation(membrane_location));
        }
        if !(cfl > 0.0 && cfl < 1.0) {
            return Err(InvalidConfigurationError::Cfl(cfl));
        }
        if !(final_time > 0.0 && final_time.is_finite()) {
            return Err(InvalidConfigurationError::FinalTime(final_time));
        }
        if left_state.gamma() != right_state.gamma() {
            return Err(InvalidConfigurationError::GammaMismatch {
                left: left_state.gamma(),
                right: right_state.gamma(),
            });
        }
        let mesh = Mesh1d::new(cell_num)?;

        // compared against cell centres, so the jump always falls on a face
        let states: Vec<ThermodynamicState1D> = mesh
            .x
            .iter()
            .map(|&x_loc| {
                if x_loc < membrane_location {
                    left_state.clone()
                } else {
                    right_state.clone()
                }
            })
            .collect();
        let left_cell_num = mesh.x.iter().filter(|&&x| x < membrane_location).count();
        debug!(
            "shock tube: {} cells, dx = {}, {} left / {} right of membrane at {}",
            cell_num,
            mesh.dx,
            left_cell_num,
            cell_num - left_cell_num,
            membrane_location
        );

        let mut boundary_bindings = BoundaryBindings::new();
        boundary_bindings.bind(BoundaryEdge::XLow, Transmissive);
        boundary_bindings.bind(BoundaryEdge::XHigh, Transmissive);

        Ok(Self {
            mesh,
            states,
            gamma: left_state.gamma(),
            membrane_location,
            final_time,
            cfl,
            flux_scheme,
            boundary_bindings,
            is_initialised: true,
        })
    }
    /// Replaces the provider bound to one of the two x-edges.
    pub fn with_boundary<P>(
        mut self,
        edge: BoundaryEdge,
        provider: P,
    ) -> Result<Self, InvalidConfigurationError>
    where
        P: GhostStateProvider<ThermodynamicState1D> + 'static,
    {
        match edge {
            BoundaryEdge::XLow | BoundaryEdge::XHigh => {
                self.boundary_bindings.bind(edge, provider);
                Ok(self)
            }
            BoundaryEdge::YLow | BoundaryEdge::YHigh => {
                Err(InvalidConfigurationError::EdgeNotOnGrid(edge))
            }
        }
    }
    pub fn membrane_location(&self) -> f64 {
        self.membrane_location
    }
}
impl Simulation1d for ShockTube1d {
    fn mesh(&self) -> &Mesh1d {
        &self.mesh
    }
    fn states(&self) -> &[ThermodynamicState1D] {
        &self.states
    }
    fn states_mut(&mut self) -> &mut [ThermodynamicState1D] {
        &mut self.states
    }
    fn boundary_bindings(&self) -> &BoundaryBindings<ThermodynamicState1D> {
        &self.boundary_bindings
    }
    fn gamma(&self) -> f64 {
        self.gamma
    }
    fn flux_scheme(&self) -> FluxScheme {
        self.flux_scheme
    }
    fn cfl(&self) -> f64 {
        self.cfl
    }
    fn final_time(&self) -> f64 {
        self.final_time
    }
    fn is_initialised(&self) -> bool {
        self.is_initialised
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::boundary::Reflective;
    use approx::assert_relative_eq;

    fn sod_states() -> (ThermodynamicState1D, ThermodynamicState1D) {
        (
            ThermodynamicState1D::new(1.0, 1.0, 0.75, 1.4).unwrap(),
            ThermodynamicState1D::new(0.1, 0.125, 0.0, 1.4).unwrap(),
        )
    }

    #[test]
    fn test_sod_initial_condition() {
        let (left, right) = sod_states();
        let tube = ShockTube1d::new(&left, &right, 0.3, 0.25, 0.9, FluxScheme::Godunov).unwrap();
        assert!(tube.is_initialised());
        assert_eq!(tube.states().len(), 100);
        assert_relative_eq!(tube.mesh().dx, 0.01, epsilon = 1e-15);
        assert_eq!(tube.gamma(), 1.4);

        let fields = tube.fields();
        assert_relative_eq!(fields.x[0], 0.005, epsilon = 1e-15);
        assert_eq!(fields.densities[0], 1.0);
        assert_eq!(fields.pressures[0], 1.0);
        assert_eq!(fields.velocities[0], 0.75);
        assert_relative_eq!(fields.x[99], 0.995, epsilon = 1e-15);
        assert_eq!(fields.densities[99], 0.125);
        assert_eq!(fields.pressures[99], 0.1);
        assert_eq!(fields.velocities[99], 0.0);
        assert_eq!(fields.internal_energies[99], right.internal_energy());
    }

    #[test]
    fn test_cells_split_on_centres() {
        let (left, right) = sod_states();
        for membrane_location in [0.3, 0.5, 0.4, 0.8, 0.123, 0.999] {
            let tube =
                ShockTube1d::new(&left, &right, membrane_location, 0.2, 0.9, FluxScheme::Hllc)
                    .unwrap();
            let mut left_cells = 0;
            for (x, state) in tube.mesh().x.iter().zip(tube.states()) {
                if *x < membrane_location {
                    assert_eq!(state, &left);
                    left_cells += 1;
                } else {
                    assert_eq!(state, &right);
                }
            }
            let expected = (membrane_location * 100.0).floor() as i64;
            assert!((left_cells - expected).abs() <= 1);
        }
    }

    #[test]
    fn test_configurable_cell_num() {
        let (left, right) = sod_states();
        let tube =
            ShockTube1d::with_cell_num(&left, &right, 0.5, 0.2, 0.5, FluxScheme::Muscl, 10)
                .unwrap();
        assert_eq!(tube.states().len(), 10);
        assert_relative_eq!(tube.mesh().dx, 0.1, epsilon = 1e-15);
        assert_eq!(tube.states()[4], left);
        assert_eq!(tube.states()[5], right);
        assert!(matches!(
            ShockTube1d::with_cell_num(&left, &right, 0.5, 0.2, 0.5, FluxScheme::Muscl, 0),
            Err(InvalidConfigurationError::EmptyGrid)
        ));
    }

    #[test]
    fn test_invalid_configuration() {
        let (left, right) = sod_states();
        let scheme = FluxScheme::Godunov;
        assert_eq!(
            ShockTube1d::new(&left, &right, 1.0, 0.25, 0.9, scheme).unwrap_err(),
            InvalidConfigurationError::MembraneLocation(1.0)
        );
        assert_eq!(
            ShockTube1d::new(&left, &right, 0.0, 0.25, 0.9, scheme).unwrap_err(),
            InvalidConfigurationError::MembraneLocation(0.0)
        );
        assert_eq!(
            ShockTube1d::new(&left, &right, 0.3, 0.25, 1.0, scheme).unwrap_err(),
            InvalidConfigurationError::Cfl(1.0)
        );
        assert!(matches!(
            ShockTube1d::new(&left, &right, 0.3, 0.25, f64::NAN, scheme),
            Err(InvalidConfigurationError::Cfl(_))
        ));
        assert_eq!(
            ShockTube1d::new(&left, &right, 0.3, 0.0, 0.9, scheme).unwrap_err(),
            InvalidConfigurationError::FinalTime(0.0)
        );

        let other_gas = ThermodynamicState1D::new(0.1, 0.125, 0.0, 1.67).unwrap();
        assert_eq!(
            ShockTube1d::new(&left, &other_gas, 0.3, 0.25, 0.9, scheme).unwrap_err(),
            InvalidConfigurationError::GammaMismatch {
                left: 1.4,
                right: 1.67
            }
        );
    }

    #[test]
    fn test_boundary_bindings() {
        let (left, right) = sod_states();
        let tube = ShockTube1d::new(&left, &right, 0.3, 0.25, 0.9, FluxScheme::Godunov).unwrap();
        let bindings = tube.boundary_bindings();
        assert!(bindings.is_bound(BoundaryEdge::XLow));
        assert!(bindings.is_bound(BoundaryEdge::XHigh));
        assert!(!bindings.is_bound(BoundaryEdge::YLow));
        assert_eq!(bindings.ghost_state(BoundaryEdge::XLow, &left).unwrap(), left);

        let tube = tube
            .with_boundary(BoundaryEdge::XLow, Reflective::for_edge(BoundaryEdge::XLow))
            .unwrap();
        let ghost = tube
            .boundary_bindings()
            .ghost_state(BoundaryEdge::XLow, &left)
            .unwrap();
        assert_eq!(ghost.velocity(), -0.75);

        assert!(matches!(
            tube.with_boundary(BoundaryEdge::YHigh, Transmissive),
            Err(InvalidConfigurationError::EdgeNotOnGrid(BoundaryEdge::YHigh))
        ));
    }
}
