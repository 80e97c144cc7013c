pub mod business;
pub mod deal;
pub mod user;
