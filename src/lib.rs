//! Minecraft-style block light as a cellular automaton.
//!
//! Each cell has an emission (0-15, or negative for opaque) and a light level.
//! Passes recompute every level from the neighbors until nothing changes.

pub mod app;
pub mod config;
pub mod simulation;
pub mod view;

pub use config::SolverConfig;
pub use simulation::{Cell, Convergence, Grid, GridError, PassStrategy, Point};
