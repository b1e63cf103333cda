//! Ideal-gas cell states and shock-tube grids for Godunov-type finite-volume
//! solvers of the 1D Euler equations.
pub mod disc;
pub mod eos;
pub mod error;
pub mod initialization;
pub mod io;
pub mod simulation;
pub mod solver;
