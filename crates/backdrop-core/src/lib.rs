pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod noise;
pub mod palette;
pub mod params;
pub mod scene;
pub mod structure;

pub use camera::*;
pub use clock::*;
pub use color::*;
pub use geometry::*;
pub use noise::*;
pub use palette::*;
pub use params::*;
pub use scene::*;
pub use structure::*;
