//! Simulation driver and program loading.
//!
//! Provides the loader that turns assembly into a [`loader::Program`] and the
//! [`simulator::Simulator`] that runs it to completion.

pub mod loader;

pub mod simulator;
