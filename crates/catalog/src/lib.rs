pub mod codes;
pub mod dataset;
pub mod readiness;
pub mod record;

pub use codes::*;
pub use dataset::*;
pub use readiness::*;
pub use record::*;
