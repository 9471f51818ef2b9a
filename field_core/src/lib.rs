pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod params;
pub mod particle;
pub mod render;
pub mod resources;
pub mod systems;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use render::*;
pub use resources::*;
