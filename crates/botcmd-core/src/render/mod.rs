//! Text rendering for admin surfaces

pub mod preview;
