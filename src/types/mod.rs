// src/types/mod.rs

pub mod generator;
pub mod group;
pub mod pattern;
pub mod value;

pub use generator::{rand_of, GeneratorPattern, PRand, PSquare, PWhite};
pub use group::PGroup;
pub use pattern::{Item, Pattern, RangeSpec};
pub use value::{BinOp, Value};
