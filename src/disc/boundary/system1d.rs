use super::{Axis, GhostStateProvider, Reflective};
use crate::eos::ThermodynamicState1D;

impl GhostStateProvider<ThermodynamicState1D> for Reflective {
    fn ghost_state(&self, interior: &ThermodynamicState1D) -> ThermodynamicState1D {
        match self.axis {
            Axis::X => interior.mirrored(),
            // a 1D state carries no y-velocity to reverse
            Axis::Y => interior.clone(),
        }
    }
}
