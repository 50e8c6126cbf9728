pub mod drag;
pub mod feature;
pub mod globe;
pub mod picking;
pub mod rotation;
pub mod view;

pub use drag::*;
pub use feature::*;
pub use globe::*;
pub use rotation::*;
pub use view::*;
