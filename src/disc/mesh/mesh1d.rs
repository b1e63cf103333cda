use ndarray::Array1;

use crate::error::InvalidConfigurationError;

/// Uniform cell-centred mesh over the unit interval.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub x: Array1<f64>,
    pub dx: f64,
}
impl Mesh1d {
    /// Cell centres run from `dx / 2` to `1 - dx / 2`.
    pub fn new(cell_num: usize) -> Result<Self, InvalidConfigurationError> {
        if cell_num == 0 {
            return Err(InvalidConfigurationError::EmptyGrid);
        }
        let half_dx = 0.5 / cell_num as f64;
        let x = Array1::linspace(half_dx, 1.0 - half_dx, cell_num);
        let dx = x[0] * 2.0;
        Ok(Self { x, dx })
    }
    pub fn cell_num(&self) -> usize {
        self.x.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_mesh() {
        let mesh = Mesh1d::new(100).unwrap();
        assert_eq!(mesh.cell_num(), 100);
        assert_relative_eq!(mesh.dx, 0.01, epsilon = 1e-15);
        assert_relative_eq!(mesh.x[0], 0.005, epsilon = 1e-15);
        assert_relative_eq!(mesh.x[99], 0.995, epsilon = 1e-15);
        for i in 1..mesh.cell_num() {
            assert_relative_eq!(mesh.x[i] - mesh.x[i - 1], mesh.dx, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_cell_and_empty_mesh() {
        let mesh = Mesh1d::new(1).unwrap();
        assert_eq!(mesh.x.len(), 1);
        assert_relative_eq!(mesh.x[0], 0.5, epsilon = 1e-15);
        assert_relative_eq!(mesh.dx, 1.0, epsilon = 1e-15);
        assert!(matches!(
            Mesh1d::new(0),
            Err(InvalidConfigurationError::EmptyGrid)
        ));
    }
}
