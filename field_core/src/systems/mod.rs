pub mod forces;
pub mod lifetime;
pub mod movement;

pub use forces::*;
pub use lifetime::*;
pub use movement::*;
