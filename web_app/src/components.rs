//! Module with Web App components.

mod filters;
mod motions;

pub use filters::FilterPanel;
pub use motions::MotionList;
