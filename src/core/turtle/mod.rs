pub mod errors;
pub mod interpreter;
pub mod state;
