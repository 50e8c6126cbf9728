pub mod choropleth;
pub mod frame;
pub mod ramp;
pub mod style;

pub use choropleth::*;
pub use frame::*;
pub use ramp::*;
pub use style::*;
