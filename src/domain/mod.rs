// Domain layer: table model, ports and the pure generation services.

pub mod model;
pub mod ports;

pub mod services;
