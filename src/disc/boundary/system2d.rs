use super::{Axis, GhostStateProvider, Reflective};
use crate::eos::ThermodynamicState2D;

impl GhostStateProvider<ThermodynamicState2D> for Reflective {
    fn ghost_state(&self, interior: &ThermodynamicState2D) -> ThermodynamicState2D {
        match self.axis {
            Axis::X => interior.mirrored_x(),
            Axis::Y => interior.mirrored_y(),
        }
    }
}
