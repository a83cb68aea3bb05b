// Domain layer: value types and ports. Depends only on std/serde.

pub mod model;
pub mod ports;
pub mod verification;
