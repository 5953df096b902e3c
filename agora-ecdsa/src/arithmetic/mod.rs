pub mod modular;
mod point;

pub use modular::{inverse, reduce, xgcd};
pub use point::Point;
