pub mod metrics;
pub mod world_atlas;

pub use metrics::*;
pub use world_atlas::*;
