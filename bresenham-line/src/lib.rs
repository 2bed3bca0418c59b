#![allow(missing_docs)]

pub mod coordinate;
pub mod cursor;
pub mod error;
pub mod line;
pub mod points;

pub use coordinate::Coordinate;
pub use cursor::Cursor;
pub use error::{Axis, LineError};
pub use line::LineGenerator;
pub use points::Points;
