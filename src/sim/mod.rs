pub mod resources;
pub mod scanner;
pub mod state;
pub mod systems;
