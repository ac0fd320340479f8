pub mod collision;
pub mod movement;
pub mod opponent;
pub mod scoring;

pub use collision::*;
pub use movement::*;
pub use opponent::*;
pub use scoring::*;
