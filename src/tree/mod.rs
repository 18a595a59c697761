pub mod model;
pub mod walker;
