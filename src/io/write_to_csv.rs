use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::{error::IoError, simulation::FlowFields1d};

#[derive(Serialize)]
struct PointData {
    x: f64,
    density: f64,
    pressure: f64,
    velocity: f64,
    internal_energy: f64,
}

/// One row per cell, with a header line.
pub fn write_to_csv(fields: &FlowFields1d, filename: impl AsRef<Path>) -> Result<(), IoError> {
    let mut writer = Writer::from_path(filename)?;
    for icell in 0..fields.len() {
        let data = PointData {
            x: fields.x[icell],
            density: fields.densities[icell],
            pressure: fields.pressures[icell],
            velocity: fields.velocities[icell],
            internal_energy: fields.internal_energies[icell],
        };
        writer.serialize(data)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
