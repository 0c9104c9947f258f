// Domain layer: models and capability ports. No system access here.

pub mod model;
pub mod ports;
