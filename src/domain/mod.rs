// Domain layer: content and booking models plus ports (interfaces).

pub mod model;
pub mod ports;
