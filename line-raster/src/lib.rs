#![allow(missing_docs)]

pub mod raster;
pub mod utils;
pub const IS_DEBUG: bool = false;
