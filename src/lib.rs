pub mod checkpoint;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod state;
