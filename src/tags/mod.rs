pub mod classify;
pub mod find;
