// ./src/lib.rs
pub mod debug;
pub mod math;
pub mod setup;
pub mod sim;
