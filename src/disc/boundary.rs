//! Boundary-condition bindings.
//!
//! Every domain edge is bound to a [`GhostStateProvider`] that turns the state
//! of the adjacent interior cell into the virtual state just outside the
//! domain. The controller feeds that ghost state to the flux calculator so
//! edge interfaces are treated like interior ones.
pub mod system1d;
pub mod system2d;

use std::fmt::Debug;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::error::InvalidConfigurationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryEdge {
    XLow,
    XHigh,
    YLow,
    YHigh,
}
impl BoundaryEdge {
    pub fn axis(&self) -> Axis {
        match self {
            BoundaryEdge::XLow | BoundaryEdge::XHigh => Axis::X,
            BoundaryEdge::YLow | BoundaryEdge::YHigh => Axis::Y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Boundary conditions selectable from a parameter file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    #[default]
    Transmissive,
    Reflective,
}

pub trait GhostStateProvider<S>: Debug {
    fn ghost_state(&self, interior: &S) -> S;
}

/// Zero-gradient outflow: the ghost cell repeats the interior cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transmissive;
impl<S: Clone> GhostStateProvider<S> for Transmissive {
    fn ghost_state(&self, interior: &S) -> S {
        interior.clone()
    }
}

/// Solid wall: the velocity component normal to the edge is reversed.
#[derive(Clone, Copy, Debug)]
pub struct Reflective {
    pub axis: Axis,
}
impl Reflective {
    pub fn for_edge(edge: BoundaryEdge) -> Self {
        Self { axis: edge.axis() }
    }
}

#[derive(Debug)]
pub struct BoundaryBindings<S> {
    providers: HashMap<BoundaryEdge, Box<dyn GhostStateProvider<S>>>,
}
impl<S> Default for BoundaryBindings<S> {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }
}
impl<S> BoundaryBindings<S> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Binds `provider` to `edge`, replacing any previous binding.
    pub fn bind<P>(&mut self, edge: BoundaryEdge, provider: P)
    where
        P: GhostStateProvider<S> + 'static,
    {
        self.providers.insert(edge, Box::new(provider));
    }
    pub fn is_bound(&self, edge: BoundaryEdge) -> bool {
        self.providers.contains_key(&edge)
    }
    pub fn ghost_state(
        &self,
        edge: BoundaryEdge,
        interior: &S,
    ) -> Result<S, InvalidConfigurationError> {
        self.providers
            .get(&edge)
            .map(|provider| provider.ghost_state(interior))
            .ok_or(InvalidConfigurationError::UnboundEdge(edge))
    }
}
