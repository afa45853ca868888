// Domain layer: pickup models and the ports implemented by external collaborators.

pub mod model;
pub mod ports;
