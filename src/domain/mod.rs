// Domain layer: report and catalog models plus the ports the adapters implement.

pub mod model;
pub mod ports;
