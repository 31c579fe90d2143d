// Domain layer: value objects only. Nothing here touches IO except the
// describe emitters on Vehicle/Car, which write to stderr.

pub mod model;
pub mod vehicle;
