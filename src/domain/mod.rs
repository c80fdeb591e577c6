// Domain layer: run context, payloads and the ports the harness talks through.

pub mod model;
pub mod ports;
