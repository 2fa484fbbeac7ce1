pub mod cell;
pub mod dataset;

pub use cell::CellValue;
pub use dataset::{Dataset, Row};
