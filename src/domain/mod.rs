// Domain layer: models, the static Munsell table and ports. No HTTP types here.

pub mod model;
pub mod munsell;
pub mod ports;
