pub mod calendar;
pub mod color;
pub mod dataset;
