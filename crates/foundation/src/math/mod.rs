pub mod angle;
pub mod ortho;
pub mod vec;

pub use angle::*;
pub use ortho::*;
pub use vec::*;
