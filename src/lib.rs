pub mod cli;
pub mod element;
pub mod report;
pub mod session;
pub mod source;
pub mod strings;
pub mod tags;
pub mod tree;

pub use crate::element::element_model::{ElementHandle, ElementRecord};
pub use crate::session::context::InspectSession;
pub use crate::session::error::InspectError;
pub use crate::strings::resources::StringResourceTable;
pub use crate::tree::model::Dialect;
