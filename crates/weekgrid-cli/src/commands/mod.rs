pub mod clock;
pub mod config;
pub mod grid;
pub mod transfer;
