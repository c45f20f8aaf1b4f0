// Domain layer: document model and the ports the catalog depends on.

pub mod model;
pub mod ports;
