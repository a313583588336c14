pub mod collision;
pub mod draw;
pub mod input;
pub mod movement;

pub use collision::*;
pub use draw::*;
pub use input::*;
pub use movement::*;
