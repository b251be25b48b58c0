pub mod entity;
pub mod enums;

pub use entity::{Entity, Modifiers};
pub use enums::*;
