use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    disc::{boundary::BoundaryKind, flux::FluxScheme},
    eos::ThermodynamicState1D,
    error::{InvalidStateError, IoError},
    simulation::shock_tube1d::DEFAULT_CELL_NUM,
    solver::DEFAULT_MAX_STEPS,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PrimitiveStateParser {
    pub pressure: f64,
    pub density: f64,
    pub velocity: f64,
    pub gamma: f64,
}
impl PrimitiveStateParser {
    pub fn to_state(&self) -> Result<ThermodynamicState1D, InvalidStateError> {
        ThermodynamicState1D::new(self.pressure, self.density, self.velocity, self.gamma)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BoundaryParser {
    #[serde(default)]
    pub x_low: BoundaryKind,
    #[serde(default)]
    pub x_high: BoundaryKind,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ShockTubeParamParser {
    pub left: PrimitiveStateParser,
    pub right: PrimitiveStateParser,
    pub membrane_location: f64,
    pub final_time: f64,
    pub cfl: f64,
    #[serde(default = "default_cell_num")]
    pub cell_num: usize,
    pub flux_scheme: FluxScheme,
    #[serde(default)]
    pub boundary: BoundaryParser,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}
fn default_cell_num() -> usize {
    DEFAULT_CELL_NUM
}
fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}
impl ShockTubeParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let file_content = fs::read_to_string(file_path).map_err(|source| IoError::Read {
            path: file_path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&file_content)
    }
    pub fn from_json_str(content: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOD: &str = r#"{
        "left": { "pressure": 1.0, "density": 1.0, "velocity": 0.75, "gamma": 1.4 },
        "right": { "pressure": 0.1, "density": 0.125, "velocity": 0.0, "gamma": 1.4 },
        "membrane_location": 0.3,
        "final_time": 0.25,
        "cfl": 0.9,
        "flux_scheme": "godunov"
    }"#;

    #[test]
    fn test_defaults() {
        let params = ShockTubeParamParser::from_json_str(SOD).unwrap();
        assert_eq!(params.cell_num, 100);
        assert_eq!(params.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(params.flux_scheme, FluxScheme::Godunov);
        assert_eq!(params.boundary, BoundaryParser::default());
        assert_eq!(params.left.to_state().unwrap().velocity(), 0.75);
    }

    #[test]
    fn test_explicit_fields() {
        let content = SOD.replace(
            "\"flux_scheme\": \"godunov\"",
            "\"flux_scheme\": \"hllc\", \"cell_num\": 400, \"boundary\": { \"x_high\": \"reflective\" }",
        );
        let params = ShockTubeParamParser::from_json_str(&content).unwrap();
        assert_eq!(params.cell_num, 400);
        assert_eq!(params.flux_scheme, FluxScheme::Hllc);
        assert_eq!(params.boundary.x_low, BoundaryKind::Transmissive);
        assert_eq!(params.boundary.x_high, BoundaryKind::Reflective);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            ShockTubeParamParser::from_json_str("{ \"left\": 1 }"),
            Err(IoError::Parse(_))
        ));
        assert!(matches!(
            ShockTubeParamParser::parse("does/not/exist.json"),
            Err(IoError::Read { .. })
        ));
        let params = ShockTubeParamParser::from_json_str(
            &SOD.replace("\"pressure\": 0.1", "\"pressure\": -1.0"),
        )
        .unwrap();
        assert_eq!(
            params.right.to_state(),
            Err(InvalidStateError::NonPositivePressure(-1.0))
        );
    }
}
