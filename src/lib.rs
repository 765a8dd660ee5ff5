#![doc = include_str!("../README.md")]

mod error;
pub mod geom;
pub mod kdtree;
mod r#type;

pub use error::PlanarIndexError;
pub use geom::{Axis, AxisRect, Point};
pub use kdtree::KdTree2D;
pub use r#type::CoordNum;
