pub mod reset;
pub mod store;
