pub mod config;
pub mod constants;
pub mod projects;
pub mod state;

pub use config::*;
pub use constants::*;
pub use projects::*;
pub use state::*;
