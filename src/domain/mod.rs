// Domain layer: value types and ports. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
