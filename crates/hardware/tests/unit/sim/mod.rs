//! Simulation front-end tests.


/// Final state report text.
pub mod report;
