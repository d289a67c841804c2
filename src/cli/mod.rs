//! Command-line interface

pub mod play;

pub use play::run_play;
