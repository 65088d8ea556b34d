//! Zoom-tiered reference grid: size classes, line generation, the highlighted
//! cell and the engine tying them together.

pub mod engine;
pub mod highlight;
pub mod lines;
pub mod size;
