pub mod renderer;
pub mod route;
pub mod style;
pub mod target;
