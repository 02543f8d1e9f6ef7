// Domain layer: request-scoped models and the upstream port. No HTTP framework types here.

pub mod model;
pub mod ports;
