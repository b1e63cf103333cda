use std::path::Path;

use crate::{
    disc::boundary::{BoundaryEdge, BoundaryKind, Reflective, Transmissive},
    error::{IoError, SimulationError},
    io::param_parser::ShockTubeParamParser,
    simulation::ShockTube1d,
    solver::SolverParameters,
};

pub fn initialize_params_by_file(
    file_path: impl AsRef<Path>,
) -> Result<ShockTubeParamParser, IoError> {
    ShockTubeParamParser::parse(file_path)
}
pub fn initialize_solver_params(params: &ShockTubeParamParser) -> SolverParameters {
    SolverParameters {
        max_steps: params.max_steps,
    }
}
pub fn initialize_shock_tube(
    params: &ShockTubeParamParser,
) -> Result<ShockTube1d, SimulationError> {
    let left_state = params.left.to_state()?;
    let right_state = params.right.to_state()?;
    let mut shock_tube = ShockTube1d::with_cell_num(
        &left_state,
        &right_state,
        params.membrane_location,
        params.final_time,
        params.cfl,
        params.flux_scheme,
        params.cell_num,
    )?;
    for (edge, kind) in [
        (BoundaryEdge::XLow, params.boundary.x_low),
        (BoundaryEdge::XHigh, params.boundary.x_high),
    ] {
        shock_tube = match kind {
            BoundaryKind::Transmissive => shock_tube.with_boundary(edge, Transmissive)?,
            BoundaryKind::Reflective => shock_tube.with_boundary(edge, Reflective::for_edge(edge))?,
        };
    }
    Ok(shock_tube)
}
